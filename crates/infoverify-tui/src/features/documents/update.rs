//! Document screen reducer.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use infoverify_core::documents::DocumentType;

use crate::effects::UiEffect;
use crate::overlays::OverlayRequest;
use crate::router::{Route, ViewUpdate};
use crate::state::TuiState;

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> ViewUpdate {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return ViewUpdate::none();
    }

    match key.code {
        KeyCode::Esc => ViewUpdate::navigate(Route::Landing),
        KeyCode::Up | KeyCode::Char('k') => {
            tui.documents.move_up();
            ViewUpdate::none()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            tui.documents.move_down();
            ViewUpdate::none()
        }
        KeyCode::Enter => ViewUpdate::open(OverlayRequest::FilePicker {
            doc_type: tui.documents.selected_type(),
        }),
        KeyCode::Char('p') => process(tui),
        _ => ViewUpdate::none(),
    }
}

/// Hands the current records to the processor. Ignored while a run is pending.
fn process(tui: &mut TuiState) -> ViewUpdate {
    if tui.tasks.document_processing.is_running() {
        return ViewUpdate::none();
    }
    let task = tui.task_seq.next_id();
    tui.tasks.document_processing.begin(task);
    let records = tui.documents.set.records().to_vec();
    tracing::info!(count = records.len(), "processing documents");
    ViewUpdate::effects(vec![UiEffect::ProcessDocuments { task, records }])
}

/// Records the file chosen in the picker.
pub fn apply_selection(tui: &mut TuiState, doc_type: DocumentType, file_name: &str) {
    if let Some(record) = tui.documents.set.select_file(doc_type, Some(file_name)) {
        tracing::info!(%doc_type, id = %record.id, "document selected");
    }
}

pub fn handle_processed(tui: &mut TuiState, result: Result<Vec<String>, String>) {
    match result {
        Ok(results) => {
            tracing::debug!(count = results.len(), "processing finished");
            tui.documents.results = results;
        }
        Err(message) => {
            tracing::warn!(error = %message, "processing failed");
            tui.notifications.push_error(message, Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};
    use infoverify_core::config::Config;
    use infoverify_core::session::Session;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn tui() -> TuiState {
        let mut session = Session::default();
        session.mark_authenticated();
        let mut state = TuiState::new(Config::default(), session);
        state.route = Route::Documents;
        state
    }

    #[test]
    fn test_enter_opens_picker_for_highlighted_row() {
        let mut tui = tui();
        handle_key(&mut tui, key(KeyCode::Char('j')));
        handle_key(&mut tui, key(KeyCode::Down));

        let update = handle_key(&mut tui, key(KeyCode::Enter));

        assert_eq!(
            update.open_overlay,
            Some(OverlayRequest::FilePicker {
                doc_type: DocumentType::Inter
            })
        );
    }

    #[test]
    fn test_process_carries_current_records() {
        let mut tui = tui();
        apply_selection(&mut tui, DocumentType::Aadhar, "a.pdf");
        apply_selection(&mut tui, DocumentType::Aadhar, "b.pdf");

        let update = handle_key(&mut tui, key(KeyCode::Char('p')));

        match update.effects.as_slice() {
            [UiEffect::ProcessDocuments { records, .. }] => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].name, "b.pdf");
            }
            other => panic!("unexpected effects: {other:?}"),
        }
        assert!(handle_key(&mut tui, key(KeyCode::Char('p'))).effects.is_empty());
    }

    #[test]
    fn test_results_replace_previous() {
        let mut tui = tui();
        handle_processed(&mut tui, Ok(vec!["one".into(), "two".into()]));
        assert_eq!(tui.documents.results.len(), 2);

        handle_processed(&mut tui, Ok(Vec::new()));
        assert!(tui.documents.results.is_empty());
    }

    #[test]
    fn test_processing_error_becomes_toast() {
        let mut tui = tui();
        handle_processed(&mut tui, Err("backend unavailable".into()));
        assert_eq!(
            tui.notifications.latest().map(|t| t.message.as_str()),
            Some("backend unavailable")
        );
    }
}
