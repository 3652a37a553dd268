//! Effect handlers for the TUI runtime.
//!
//! Handlers are async functions returning a `TaskResult`. They perform I/O and
//! never touch UI state; the runtime wraps them in the task lifecycle and the
//! reducer applies their results.

pub mod auth;
pub mod documents;

pub use auth::*;
pub use documents::*;
