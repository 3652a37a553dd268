use anyhow::{Context, Result};
use infoverify_core::session::Session;
use infoverify_core::storage::LocalStorage;

pub fn status() -> Result<()> {
    let storage = LocalStorage::open_default();
    let session = Session::load(&storage)
        .with_context(|| format!("read session from {}", storage.path().display()))?;
    if session.is_authenticated() {
        println!("authenticated");
    } else {
        println!("not authenticated");
    }
    Ok(())
}
