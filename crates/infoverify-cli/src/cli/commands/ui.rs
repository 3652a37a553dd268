//! Interactive UI command.

use anyhow::Result;

#[cfg(feature = "tui")]
pub fn run(route: &str) -> Result<()> {
    use anyhow::{Context, anyhow};
    use infoverify_core::config::{Config, paths};
    use infoverify_core::logging;
    use infoverify_core::storage::LocalStorage;
    use infoverify_tui::Route;

    let start = Route::from_path(route).ok_or_else(|| {
        anyhow!("Unknown route: {route} (expected one of /, /auth, /PIIDetectionPage)")
    })?;

    let config = Config::load().context("load config")?;
    let _log_guard = logging::init(&paths::logs_dir(), &config.log.level).context("init logging")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "infoverify starting");

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let storage = LocalStorage::open_default();
    rt.block_on(infoverify_tui::run(config, storage, start))
}

#[cfg(not(feature = "tui"))]
pub fn run(_route: &str) -> Result<()> {
    anyhow::bail!("infoverify was built without the `tui` feature")
}
