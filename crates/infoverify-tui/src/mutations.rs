//! State mutations requested by overlays.
//!
//! Overlays only see their own state; changes to the rest of the UI state are
//! returned as mutations and applied by the reducer.

use infoverify_core::documents::DocumentType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    /// Record `file_name` for `doc_type` on the document screen.
    SelectDocument {
        doc_type: DocumentType,
        file_name: String,
    },
}
