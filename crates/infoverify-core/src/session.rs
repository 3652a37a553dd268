//! Session context.
//!
//! Carries the mock authentication flag explicitly instead of having views
//! read storage on their own. The flag is persisted under `isAuthenticated`
//! and is never cleared by the application.

use anyhow::Result;

use crate::storage::LocalStorage;

/// Storage key holding the authentication flag.
pub const AUTH_STORAGE_KEY: &str = "isAuthenticated";

/// Value written on successful sign-in.
const AUTH_STORAGE_VALUE: &str = "true";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// Reads the flag from storage. Any value other than `"true"` counts as signed out.
    pub fn load(storage: &LocalStorage) -> Result<Self> {
        let authenticated = storage
            .get(AUTH_STORAGE_KEY)?
            .is_some_and(|v| v == AUTH_STORAGE_VALUE);
        Ok(Self { authenticated })
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn mark_authenticated(&mut self) {
        self.authenticated = true;
    }

    /// Writes the flag if the session is authenticated.
    pub fn persist(&self, storage: &LocalStorage) -> Result<()> {
        if self.authenticated {
            storage.set(AUTH_STORAGE_KEY, AUTH_STORAGE_VALUE)?;
            tracing::info!(path = %storage.path().display(), "session persisted");
        }
        Ok(())
    }
}
