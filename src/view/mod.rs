//! View and UI layer
//!
//! Presentation components. They read editor state and never change it,
//! except for the save prompt, which owns its own text field.

pub mod help;
pub mod hex_view;
pub mod prompt;
pub mod status_bar;
pub mod viewport;
