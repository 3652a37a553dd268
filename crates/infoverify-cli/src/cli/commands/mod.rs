//! CLI command handlers.

pub mod config;
pub mod session;
pub mod ui;
