//! Toast state.
//!
//! Toasts stack in push order and disappear once their deadline passes.
//! Time is passed in explicitly so expiry is deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct Notifications {
    toasts: Vec<Toast>,
    next_id: u64,
    success_ttl: Duration,
    error_ttl: Duration,
}

impl Notifications {
    pub fn new(success_ttl: Duration, error_ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            success_ttl,
            error_ttl,
        }
    }

    pub fn push_success(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(ToastKind::Success, message.into(), now + self.success_ttl)
    }

    pub fn push_error(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(ToastKind::Error, message.into(), now + self.error_ttl)
    }

    fn push(&mut self, kind: ToastKind, message: String, expires_at: Instant) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast {
            id,
            kind,
            message,
            expires_at,
        });
        id
    }

    /// Drops expired toasts. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        self.toasts.len() != before
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Most recent message, for assertions and the status line.
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000), Duration::from_millis(4000))
    }
}
