use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::buttons::Button;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Button(Button),
    Restart,
    Quit,
    None,
}

/// Movement button bound to a key: arrows or WASD, either case
pub fn button_for(code: KeyCode) -> Option<Button> {
    let button = match code {
        KeyCode::Up => Button::MoveUp,
        KeyCode::Down => Button::MoveDown,
        KeyCode::Left => Button::MoveLeft,
        KeyCode::Right => Button::MoveRight,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Button::MoveUp,
            's' => Button::MoveDown,
            'a' => Button::MoveLeft,
            'd' => Button::MoveRight,
            _ => return None,
        },
        _ => return None,
    };
    Some(button)
}

/// Translates terminal key presses into game actions
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(button) = button_for(key.code) {
            return KeyAction::Button(button);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
