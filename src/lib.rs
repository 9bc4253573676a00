// Library interface for the bewitched byte editor
// This allows tests to drive the editor without a real terminal

pub mod app;
pub mod config;
pub mod input;
pub mod model;
pub mod services;
pub mod view;
