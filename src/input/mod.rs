//! Input handling: the action vocabulary and key-to-action resolution

pub mod actions;
pub mod keybindings;
