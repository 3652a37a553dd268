//! Auth feature reducer.
//!
//! Key handling for the credential form and processing of the simulated
//! request outcome.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use infoverify_core::credentials::{self, AuthError, AuthMode};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::RequestOutcome;
use crate::router::{self, Route, ViewUpdate};
use crate::state::TuiState;

const SIGNED_IN: &str = "Logged in successfully!";
const REGISTERED: &str = "Account created successfully! Please log in.";

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> ViewUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => ViewUpdate::navigate(Route::Landing),
        KeyCode::Enter => submit(tui),
        KeyCode::Tab | KeyCode::Down => {
            tui.auth.focus_next();
            ViewUpdate::none()
        }
        KeyCode::BackTab | KeyCode::Up => {
            tui.auth.focus_prev();
            ViewUpdate::none()
        }
        KeyCode::Char('r') if ctrl => toggle_mode(tui),
        KeyCode::Char('t') if ctrl => {
            tui.auth.toggle_password_visibility();
            ViewUpdate::none()
        }
        KeyCode::Backspace => {
            tui.auth.backspace();
            ViewUpdate::none()
        }
        KeyCode::Char(c) if !ctrl && !alt => {
            tui.auth.insert_char(c);
            ViewUpdate::none()
        }
        _ => ViewUpdate::none(),
    }
}

/// Switches sign-in/register. A pending request belongs to the old mode and
/// is cancelled.
fn toggle_mode(tui: &mut TuiState) -> ViewUpdate {
    tui.auth.toggle_mode();
    tracing::debug!(mode = ?tui.auth.mode, "auth mode toggled");
    ViewUpdate::effects(
        router::cancel_task(tui, TaskKind::AuthRequest)
            .into_iter()
            .collect(),
    )
}

/// Validates the form and starts the request.
///
/// Ignored while a request is already pending.
pub fn submit(tui: &mut TuiState) -> ViewUpdate {
    if tui.tasks.auth_request.is_running() {
        tracing::debug!("auth submit ignored: request pending");
        return ViewUpdate::none();
    }

    if let Err(err) = credentials::validate(&tui.auth.credentials, tui.auth.mode) {
        tracing::debug!(error = %err, "auth validation failed");
        tui.notifications.push_error(err.to_string(), Instant::now());
        return ViewUpdate::none();
    }

    let task = tui.task_seq.next_id();
    tui.tasks.auth_request.begin(task);
    tracing::info!(mode = ?tui.auth.mode, "auth request submitted");
    ViewUpdate::effects(vec![UiEffect::StartAuthRequest {
        task,
        delay: tui.config.auth_delay(),
    }])
}

pub fn handle_request_outcome(tui: &mut TuiState, outcome: RequestOutcome) -> ViewUpdate {
    let now = Instant::now();
    match outcome {
        RequestOutcome::Succeeded => match tui.auth.mode {
            AuthMode::SignIn => {
                tui.notifications.push_success(SIGNED_IN, now);
                tui.session.mark_authenticated();
                tracing::info!("signed in");
                ViewUpdate {
                    effects: vec![UiEffect::PersistSession],
                    navigate: Some(Route::Documents),
                    open_overlay: None,
                }
            }
            AuthMode::Register => {
                tui.notifications.push_success(REGISTERED, now);
                tui.auth.finish_registration();
                tracing::info!("account registered");
                ViewUpdate::none()
            }
        },
        RequestOutcome::Failed(message) => {
            let err = AuthError::SubmissionFailed(message);
            tracing::warn!(error = %err, "auth request failed");
            tui.notifications.push_error(err.to_string(), now);
            ViewUpdate::none()
        }
        RequestOutcome::Cancelled => ViewUpdate::none(),
    }
}
