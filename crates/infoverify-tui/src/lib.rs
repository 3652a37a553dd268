//! Full-screen terminal UI for Info Verify.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod router;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};
use std::sync::Arc;

use anyhow::{Context, Result};
pub use features::{auth, documents, landing, notifications};
use infoverify_core::config::Config;
use infoverify_core::processing::{DocumentProcessor, NoopProcessor};
use infoverify_core::session::Session;
use infoverify_core::storage::LocalStorage;
pub use router::Route;
pub use runtime::TuiRuntime;

/// Runs the UI with the built-in processor (which produces no results).
pub async fn run(config: Config, storage: LocalStorage, start: Route) -> Result<()> {
    run_with_processor(config, storage, start, Arc::new(NoopProcessor)).await
}

/// Runs the UI until the user quits.
///
/// # Errors
/// Fails without a terminal, or if storage or the terminal cannot be set up.
pub async fn run_with_processor(
    config: Config,
    storage: LocalStorage,
    start: Route,
    processor: Arc<dyn DocumentProcessor>,
) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!("infoverify needs an interactive terminal.");
    }

    let session = Session::load(&storage).context("Failed to read session")?;
    tracing::info!(
        authenticated = session.is_authenticated(),
        start = %start,
        "starting ui"
    );

    let mut runtime = TuiRuntime::new(config, storage, session, processor, start)?;
    runtime.run()
}
