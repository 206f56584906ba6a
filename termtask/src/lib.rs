//! `TermTask` — terminal-native task list manager library.

pub mod app;
pub mod config;
pub mod console;
pub mod ui;
