//! Virtual button state sampled once per tick
//!
//! The game only reads these flags. Translating physical keys into button
//! transitions is the front-end's job (see [`super::handler`]).

use crate::game::Direction;

pub const BUTTON_COUNT: usize = 4;

/// Virtual buttons the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

impl Button {
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::MoveUp,
        Button::MoveDown,
        Button::MoveLeft,
        Button::MoveRight,
    ];

    pub fn direction(&self) -> Direction {
        match self {
            Button::MoveUp => Direction::Up,
            Button::MoveDown => Direction::Down,
            Button::MoveLeft => Direction::Left,
            Button::MoveRight => Direction::Right,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// State of one button: held now, and whether that changed this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub is_down: bool,
    pub changed: bool,
}

/// All button states for the current frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    buttons: [ButtonState; BUTTON_COUNT],
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, button: Button) -> ButtonState {
        self.buttons[button.index()]
    }

    /// Button is currently held
    pub fn is_down(&self, button: Button) -> bool {
        self.state(button).is_down
    }

    /// Button went down during this frame
    pub fn pressed(&self, button: Button) -> bool {
        let state = self.state(button);
        state.is_down && state.changed
    }

    /// Buttons pressed this frame, in declaration order
    pub fn pressed_buttons(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(|&b| self.pressed(b))
    }

    /// Record a key going up or down
    pub fn set(&mut self, button: Button, is_down: bool) {
        let state = &mut self.buttons[button.index()];
        // A release and re-press inside one frame still counts as a press
        state.changed |= state.is_down != is_down;
        state.is_down = is_down;
    }

    /// Release every held button, for sources that never report key-up
    pub fn release_all(&mut self) {
        for button in Button::ALL {
            self.set(button, false);
        }
    }

    /// Start a new frame: forget which buttons changed
    pub fn begin_frame(&mut self) {
        for state in &mut self.buttons {
            state.changed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_seen_for_one_frame() {
        let mut input = Input::new();
        input.set(Button::MoveUp, true);

        assert!(input.is_down(Button::MoveUp));
        assert!(input.pressed(Button::MoveUp));

        input.begin_frame();
        assert!(input.is_down(Button::MoveUp));
        assert!(!input.pressed(Button::MoveUp));
    }

    #[test]
    fn test_held_key_is_not_pressed_again() {
        let mut input = Input::new();
        input.set(Button::MoveLeft, true);
        input.begin_frame();
        input.set(Button::MoveLeft, true);

        assert!(!input.pressed(Button::MoveLeft));
    }

    #[test]
    fn test_release_is_not_a_press() {
        let mut input = Input::new();
        input.set(Button::MoveDown, true);
        input.begin_frame();
        input.set(Button::MoveDown, false);

        assert!(input.state(Button::MoveDown).changed);
        assert!(!input.pressed(Button::MoveDown));
    }

    #[test]
    fn test_release_then_press_in_one_frame() {
        let mut input = Input::new();
        input.set(Button::MoveRight, true);
        input.begin_frame();
        input.release_all();
        input.begin_frame();

        input.set(Button::MoveRight, true);
        assert!(input.pressed(Button::MoveRight));
    }

    #[test]
    fn test_pressed_buttons_in_order() {
        let mut input = Input::new();
        input.set(Button::MoveRight, true);
        input.set(Button::MoveUp, true);

        let pressed: Vec<Button> = input.pressed_buttons().collect();
        assert_eq!(pressed, vec![Button::MoveUp, Button::MoveRight]);
    }

    #[test]
    fn test_button_directions() {
        assert_eq!(Button::MoveUp.direction(), Direction::Up);
        assert_eq!(Button::MoveDown.direction(), Direction::Down);
        assert_eq!(Button::MoveLeft.direction(), Direction::Left);
        assert_eq!(Button::MoveRight.direction(), Direction::Right);
    }
}
