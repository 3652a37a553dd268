//! File discovery and document processing handlers.
//!
//! Both do blocking work, so they run on tokio's blocking pool.

use std::path::PathBuf;
use std::sync::Arc;

use infoverify_core::documents::DocumentRecord;
use infoverify_core::processing::DocumentProcessor;
use tokio_util::sync::CancellationToken;

use crate::events::TaskResult;
use crate::overlays::discover_files;

pub async fn file_discovery(root: PathBuf, cancel: Option<CancellationToken>) -> TaskResult {
    let cancel = cancel.unwrap_or_default();
    let files = tokio::task::spawn_blocking(move || discover_files(&root, &cancel))
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "file discovery task failed");
            Vec::new()
        });
    TaskResult::FilesDiscovered(files)
}

pub async fn process_documents(
    processor: Arc<dyn DocumentProcessor>,
    records: Vec<DocumentRecord>,
) -> TaskResult {
    let result = tokio::task::spawn_blocking(move || processor.submit_documents(&records))
        .await
        .map_err(|err| format!("Document processing stopped unexpectedly: {err}"))
        .and_then(|result| result.map_err(|err| format!("{err:#}")));
    TaskResult::DocumentsProcessed(result)
}
