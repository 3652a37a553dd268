//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::{TaskResult, UiEvent};
use crate::features::{auth, documents, landing};
use crate::mutations::StateMutation;
use crate::overlays::{FilePickerState, Overlay, OverlayRequest, OverlayTransition};
use crate::router::{self, Route, ViewUpdate};
use crate::state::{AppState, TuiState};

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.notifications.prune(Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            if app.tui.tasks.state_mut(kind).on_started(&started) {
                return vec![];
            }
            // The task was superseded or its view torn down before it started.
            tracing::debug!(?kind, id = started.id.0, "stale task started; cancelling");
            vec![UiEffect::CancelTask {
                kind,
                token: started.cancel,
            }]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if !app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                tracing::debug!(?kind, id = completed.id.0, "dropping stale task result");
                return vec![];
            }
            handle_task_result(app, completed.result)
        }
        UiEvent::SessionPersistFailed(message) => {
            app.tui.notifications.push_error(
                format!("Could not save your session: {message}"),
                Instant::now(),
            );
            vec![]
        }
    }
}

fn handle_task_result(app: &mut AppState, result: TaskResult) -> Vec<UiEffect> {
    match result {
        TaskResult::AuthRequest(outcome) => {
            let update = auth::handle_request_outcome(&mut app.tui, outcome);
            apply_view_update(app, update)
        }
        TaskResult::FilesDiscovered(files) => {
            if let Some(picker) = app.overlay.as_mut().and_then(Overlay::as_file_picker_mut) {
                tracing::debug!(count = files.len(), "files discovered");
                picker.set_files(files);
            }
            vec![]
        }
        TaskResult::DocumentsProcessed(result) => {
            documents::handle_processed(&mut app.tui, result);
            vec![]
        }
    }
}

/// Applies what a screen handler asked for: effects, then overlay, then navigation.
fn apply_view_update(app: &mut AppState, update: ViewUpdate) -> Vec<UiEffect> {
    let mut effects = update.effects;
    if let Some(request) = update.open_overlay {
        effects.extend(open_overlay_request(app, request));
    }
    if let Some(route) = update.navigate {
        effects.extend(router::navigate(app, route));
    }
    effects
}

fn open_overlay_request(app: &mut AppState, request: OverlayRequest) -> Vec<UiEffect> {
    if app.overlay.is_some() {
        return vec![];
    }
    match request {
        OverlayRequest::FilePicker { doc_type } => {
            app.overlay = Some(Overlay::FilePicker(FilePickerState::open(doc_type)));
            let mut effects: Vec<UiEffect> =
                router::cancel_task(&mut app.tui, TaskKind::FileDiscovery)
                    .into_iter()
                    .collect();
            let task = app.tui.task_seq.next_id();
            app.tui.tasks.file_discovery.begin(task);
            effects.push(UiEffect::DiscoverFiles { task });
            effects
        }
    }
}

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::SelectDocument {
                doc_type,
                file_name,
            } => documents::apply_selection(tui, doc_type, &file_name),
        }
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if app.overlay.is_none() && app.tui.route == Route::Auth {
                app.tui.auth.insert_str(&text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(key);
        apply_mutations(&mut app.tui, update.mutations);
        return match update.transition {
            OverlayTransition::Stay => vec![],
            OverlayTransition::Close => {
                app.overlay = None;
                router::cancel_task(&mut app.tui, TaskKind::FileDiscovery)
                    .into_iter()
                    .collect()
            }
        };
    }

    let update = match app.tui.route {
        Route::Landing => landing::handle_key(key),
        Route::Auth => auth::handle_key(&mut app.tui, key),
        Route::Documents => documents::handle_key(&mut app.tui, key),
    };
    apply_view_update(app, update)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crossterm::event::KeyEventState;
    use infoverify_core::config::Config;
    use infoverify_core::credentials::AuthMode;
    use infoverify_core::documents::DocumentType;
    use infoverify_core::session::Session;
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskStarted};
    use crate::events::RequestOutcome;
    use crate::features::notifications::ToastKind;
    use crate::router::SIGN_IN_REQUIRED;

    fn press(code: KeyCode) -> UiEvent {
        press_with(code, KeyModifiers::NONE)
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn type_str(app: &mut AppState, text: &str) -> Vec<UiEffect> {
        text.chars()
            .flat_map(|c| update(app, press(KeyCode::Char(c))))
            .collect()
    }

    fn app() -> AppState {
        AppState::new(Config::default(), Session::default())
    }

    fn signed_in_app() -> AppState {
        let mut session = Session::default();
        session.mark_authenticated();
        AppState::new(Config::default(), session)
    }

    fn completed(kind: TaskKind, id: TaskId, result: TaskResult) -> UiEvent {
        UiEvent::TaskCompleted {
            kind,
            completed: TaskCompleted { id, result },
        }
    }

    /// Drives the form to a submitted sign-in and returns the request task id.
    fn submit_sign_in(app: &mut AppState) -> TaskId {
        update(app, press(KeyCode::Enter));
        assert_eq!(app.tui.route, Route::Auth);
        type_str(app, "a@b.com");
        update(app, press(KeyCode::Tab));
        type_str(app, "password1");
        let effects = update(app, press(KeyCode::Enter));
        match effects.as_slice() {
            [UiEffect::StartAuthRequest { task, .. }] => *task,
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_sign_in_flow_reaches_documents() {
        let mut app = app();
        let task = submit_sign_in(&mut app);

        let token = CancellationToken::new();
        let effects = update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::AuthRequest,
                started: TaskStarted {
                    id: task,
                    cancel: Some(token.clone()),
                },
            },
        );
        assert!(effects.is_empty());
        assert!(!app.tui.session.is_authenticated());

        let effects = update(
            &mut app,
            completed(
                TaskKind::AuthRequest,
                task,
                TaskResult::AuthRequest(RequestOutcome::Succeeded),
            ),
        );

        assert!(app.tui.session.is_authenticated());
        assert_eq!(app.tui.route, Route::Documents);
        assert_eq!(app.tui.route.path(), "/PIIDetectionPage");
        assert!(matches!(effects.as_slice(), [UiEffect::PersistSession]));
        assert!(app.tui.auth.credentials.is_empty());
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_invalid_sign_in_stays_on_auth() {
        let mut app = app();
        update(&mut app, press(KeyCode::Enter));
        type_str(&mut app, "a@b");
        update(&mut app, press(KeyCode::Tab));
        type_str(&mut app, "password1");

        let effects = update(&mut app, press(KeyCode::Enter));

        assert!(effects.is_empty());
        assert_eq!(app.tui.route, Route::Auth);
        assert!(!app.tui.session.is_authenticated());
        assert_eq!(
            app.tui.notifications.latest().map(|t| t.message.as_str()),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_register_flow_returns_to_sign_in() {
        let mut app = app();
        update(&mut app, press(KeyCode::Enter));
        update(&mut app, press_with(KeyCode::Char('r'), KeyModifiers::CONTROL));
        type_str(&mut app, "a@b.com");
        update(&mut app, press(KeyCode::Tab));
        type_str(&mut app, "password1");
        update(&mut app, press(KeyCode::Tab));
        type_str(&mut app, "password1");
        let effects = update(&mut app, press(KeyCode::Enter));
        let [UiEffect::StartAuthRequest { task, .. }] = effects.as_slice() else {
            panic!("unexpected effects: {effects:?}");
        };

        update(
            &mut app,
            completed(
                TaskKind::AuthRequest,
                *task,
                TaskResult::AuthRequest(RequestOutcome::Succeeded),
            ),
        );

        assert_eq!(app.tui.route, Route::Auth);
        assert_eq!(app.tui.auth.mode, AuthMode::SignIn);
        assert!(app.tui.auth.credentials.is_empty());
        assert!(!app.tui.session.is_authenticated());
    }

    #[test]
    fn test_leaving_auth_cancels_and_drops_late_result() {
        let mut app = app();
        let task = submit_sign_in(&mut app);
        let token = CancellationToken::new();
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::AuthRequest,
                started: TaskStarted {
                    id: task,
                    cancel: Some(token.clone()),
                },
            },
        );

        let effects = update(&mut app, press(KeyCode::Esc));
        assert_eq!(app.tui.route, Route::Landing);
        match effects.as_slice() {
            [UiEffect::CancelTask {
                kind: TaskKind::AuthRequest,
                token: Some(t),
            }] => t.cancel(),
            other => panic!("unexpected effects: {other:?}"),
        }
        assert!(token.is_cancelled());

        let effects = update(
            &mut app,
            completed(
                TaskKind::AuthRequest,
                task,
                TaskResult::AuthRequest(RequestOutcome::Succeeded),
            ),
        );
        assert!(effects.is_empty());
        assert!(!app.tui.session.is_authenticated());
        assert_eq!(app.tui.route, Route::Landing);
        assert!(app.tui.notifications.is_empty());
    }

    #[test]
    fn test_stale_start_is_cancelled() {
        let mut app = app();
        let token = CancellationToken::new();
        let effects = update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::AuthRequest,
                started: TaskStarted {
                    id: TaskId(42),
                    cancel: Some(token),
                },
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::CancelTask { token: Some(_), .. }]
        ));
    }

    #[test]
    fn test_guard_redirects_to_auth() {
        let mut app = app();
        let effects = router::navigate(&mut app, Route::Documents);

        assert!(effects.is_empty());
        assert_eq!(app.tui.route, Route::Auth);
        let toast = app.tui.notifications.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, SIGN_IN_REQUIRED);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = signed_in_app();
        router::navigate(&mut app, Route::Documents);
        update(&mut app, press(KeyCode::Enter));
        assert!(app.overlay.is_some());

        let effects = update(&mut app, press_with(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_file_picker_selects_document() {
        let mut app = signed_in_app();
        router::navigate(&mut app, Route::Documents);

        let effects = update(&mut app, press(KeyCode::Enter));
        let [UiEffect::DiscoverFiles { task }] = effects.as_slice() else {
            panic!("unexpected effects: {effects:?}");
        };
        update(
            &mut app,
            completed(
                TaskKind::FileDiscovery,
                *task,
                TaskResult::FilesDiscovered(vec![
                    PathBuf::from("ids/aadhar.pdf"),
                    PathBuf::from("ids/other.png"),
                ]),
            ),
        );

        update(&mut app, press(KeyCode::Enter));

        assert!(app.overlay.is_none());
        let record = app.tui.documents.set.get(DocumentType::Aadhar).unwrap();
        assert_eq!(record.name, "aadhar.pdf");
    }

    #[test]
    fn test_closing_picker_cancels_discovery() {
        let mut app = signed_in_app();
        router::navigate(&mut app, Route::Documents);
        update(&mut app, press(KeyCode::Enter));

        let effects = update(&mut app, press(KeyCode::Esc));

        assert!(app.overlay.is_none());
        assert!(app.tui.documents.set.is_empty());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::CancelTask {
                kind: TaskKind::FileDiscovery,
                ..
            }]
        ));
        assert!(!app.tui.tasks.file_discovery.is_running());
    }

    #[test]
    fn test_leaving_documents_discards_records() {
        let mut app = signed_in_app();
        router::navigate(&mut app, Route::Documents);
        documents::apply_selection(&mut app.tui, DocumentType::Gate, "gate.pdf");
        app.tui.documents.results = vec!["done".to_string()];

        update(&mut app, press(KeyCode::Esc));
        assert_eq!(app.tui.route, Route::Landing);

        router::navigate(&mut app, Route::Documents);
        assert!(app.tui.documents.set.is_empty());
        assert!(app.tui.documents.results.is_empty());
    }

    #[test]
    fn test_persist_failure_is_reported() {
        let mut app = app();
        update(&mut app, UiEvent::SessionPersistFailed("disk full".to_string()));
        let toast = app.tui.notifications.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.message.contains("disk full"));
    }

    #[test]
    fn test_paste_fills_focused_field() {
        let mut app = app();
        update(&mut app, press(KeyCode::Enter));
        update(&mut app, UiEvent::Terminal(Event::Paste("a@b.com".to_string())));
        assert_eq!(app.tui.auth.credentials.email, "a@b.com");
    }
}
