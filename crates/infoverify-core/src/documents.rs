//! Document intake model.
//!
//! Records are references only (a display name and a category). File contents
//! are never read.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// File extensions the picker offers, lowercase and without the dot.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

/// The fixed set of documents an applicant must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentType {
    Aadhar,
    Tenth,
    Inter,
    Gate,
    Candidate,
}

impl DocumentType {
    /// All required types, in display order.
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Aadhar,
        DocumentType::Tenth,
        DocumentType::Inter,
        DocumentType::Gate,
        DocumentType::Candidate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Aadhar => "aadhar",
            DocumentType::Tenth => "tenth",
            DocumentType::Inter => "inter",
            DocumentType::Gate => "gate",
            DocumentType::Candidate => "candidate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Aadhar => "Aadhar Card",
            DocumentType::Tenth => "10th Scorecard",
            DocumentType::Inter => "Inter Scorecard",
            DocumentType::Gate => "GATE Scorecard",
            DocumentType::Candidate => "Candidate Details",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown document type: {0}")]
pub struct UnknownDocumentType(pub String);

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownDocumentType(s.to_string()))
    }
}

/// A user-selected file for one document type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Random opaque identifier, fresh on every selection.
    pub id: String,
    /// Original file name.
    pub name: String,
    pub doc_type: DocumentType,
}

/// Ordered records, at most one per type.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    records: Vec<DocumentRecord>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a file for `doc_type`, replacing any earlier selection.
    ///
    /// `None` means the picker was dismissed; the set is left untouched.
    pub fn select_file(
        &mut self,
        doc_type: DocumentType,
        file_name: Option<&str>,
    ) -> Option<&DocumentRecord> {
        let name = file_name?;
        self.records.retain(|r| r.doc_type != doc_type);
        self.records.push(DocumentRecord {
            id: Uuid::new_v4().simple().to_string(),
            name: name.to_string(),
            doc_type,
        });
        self.records.last()
    }

    pub fn get(&self, doc_type: DocumentType) -> Option<&DocumentRecord> {
        self.records.iter().find(|r| r.doc_type == doc_type)
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Whether the picker should offer this file.
pub fn is_accepted_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}
