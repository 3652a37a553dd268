//! Document intake screen: one upload slot per required document.

mod render;
mod state;
mod update;

pub use render::render_documents;
pub use state::DocumentsState;
pub use update::{apply_selection, handle_key, handle_processed};
