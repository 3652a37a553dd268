//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! ## Cancellation Effects
//!
//! Cancellation is initiated from the reducer via `UiEffect::CancelTask`.
//! The runtime executes these by calling `token.cancel()` on the provided token.

use std::time::Duration;

use infoverify_core::documents::DocumentRecord;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Run the simulated sign-in/register request.
    StartAuthRequest { task: TaskId, delay: Duration },

    /// Write the session flag to local storage.
    PersistSession,

    /// Discover accepted files for the file picker.
    DiscoverFiles { task: TaskId },

    /// Hand the selected documents to the document processor.
    ProcessDocuments {
        task: TaskId,
        records: Vec<DocumentRecord>,
    },

    /// Cancel an in-progress task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}
