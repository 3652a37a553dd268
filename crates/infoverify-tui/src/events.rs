//! UI event types consumed by the reducer.

use std::path::PathBuf;

use crossterm::event::Event;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (animation, toast expiry).
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<TaskResult>,
    },
    /// Writing the session flag failed.
    SessionPersistFailed(String),
}

/// Payload of a finished task.
#[derive(Debug)]
pub enum TaskResult {
    AuthRequest(RequestOutcome),
    FilesDiscovered(Vec<PathBuf>),
    DocumentsProcessed(Result<Vec<String>, String>),
}

/// Outcome of the simulated auth request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Succeeded,
    Failed(String),
    Cancelled,
}
