//! Document processing hook.
//!
//! No extraction or verification engine exists yet. The UI hands the selected
//! records to a `DocumentProcessor` and displays whatever lines it returns.

use anyhow::Result;

use crate::documents::DocumentRecord;

pub trait DocumentProcessor: Send + Sync {
    /// Processes the selected documents and returns one display line per result.
    fn submit_documents(&self, records: &[DocumentRecord]) -> Result<Vec<String>>;
}

/// Processor used until a real backend is wired in. Produces no results.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProcessor;

impl DocumentProcessor for NoopProcessor {
    fn submit_documents(&self, records: &[DocumentRecord]) -> Result<Vec<String>> {
        tracing::debug!(count = records.len(), "no document processor configured");
        Ok(Vec::new())
    }
}
