//! Input boundary: virtual buttons read by the game, and the terminal key
//! mapping that feeds them.

pub mod buttons;
pub mod handler;

pub use buttons::{Button, ButtonState, Input};
pub use handler::{InputHandler, KeyAction, button_for};
