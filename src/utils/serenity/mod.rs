pub mod buttons;
pub mod interaction;
