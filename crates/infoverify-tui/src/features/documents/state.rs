use infoverify_core::documents::{DocumentSet, DocumentType};

/// Transient state of the document screen. Dropped when the screen is left.
#[derive(Debug, Default)]
pub struct DocumentsState {
    pub set: DocumentSet,
    pub results: Vec<String>,
    /// Highlighted row, an index into `DocumentType::ALL`.
    pub selected: usize,
}

impl DocumentsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn selected_type(&self) -> DocumentType {
        DocumentType::ALL[self.selected.min(DocumentType::ALL.len() - 1)]
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1).min(DocumentType::ALL.len() - 1);
    }

    /// "Replace" once a file is recorded for the slot, "Upload" before.
    pub fn action_label(&self, doc_type: DocumentType) -> &'static str {
        if self.set.get(doc_type).is_some() {
            "Replace"
        } else {
            "Upload"
        }
    }

    pub fn file_label(&self, doc_type: DocumentType) -> &str {
        self.set
            .get(doc_type)
            .map_or("No file selected", |r| r.name.as_str())
    }
}
