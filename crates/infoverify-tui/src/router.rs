//! Routes and navigation.
//!
//! Every screen change goes through `navigate`, which consults the session
//! before entering a protected route and tears down the screen being left
//! (its transient state is discarded and its pending tasks cancelled).

use std::fmt;
use std::time::Instant;

use infoverify_core::session::Session;

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::overlays::OverlayRequest;
use crate::state::{AppState, TuiState};

/// Shown when an unauthenticated user tries to open the document screen.
pub const SIGN_IN_REQUIRED: &str = "Please sign in to continue";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Auth,
    Documents,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Landing, Route::Auth, Route::Documents];

    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Auth => "/auth",
            Route::Documents => "/PIIDetectionPage",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn requires_session(self) -> bool {
        matches!(self, Route::Documents)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Result of checking a route against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Allow(Route),
    Redirect { to: Route, reason: &'static str },
}

pub fn guard(target: Route, session: &Session) -> Guard {
    if target.requires_session() && !session.is_authenticated() {
        Guard::Redirect {
            to: Route::Auth,
            reason: SIGN_IN_REQUIRED,
        }
    } else {
        Guard::Allow(target)
    }
}

/// What a screen's key handler asks the reducer to do next.
#[derive(Debug, Default)]
pub struct ViewUpdate {
    pub effects: Vec<UiEffect>,
    pub navigate: Option<Route>,
    pub open_overlay: Option<OverlayRequest>,
}

impl ViewUpdate {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn effects(effects: Vec<UiEffect>) -> Self {
        Self {
            effects,
            ..Self::default()
        }
    }

    pub fn navigate(route: Route) -> Self {
        Self {
            navigate: Some(route),
            ..Self::default()
        }
    }

    pub fn open(request: OverlayRequest) -> Self {
        Self {
            open_overlay: Some(request),
            ..Self::default()
        }
    }
}

/// Switches screens, applying the session guard and tearing down the old screen.
pub fn navigate(app: &mut AppState, target: Route) -> Vec<UiEffect> {
    let resolved = match guard(target, &app.tui.session) {
        Guard::Allow(route) => route,
        Guard::Redirect { to, reason } => {
            tracing::info!(from = %target, to = %to, "route guard redirect");
            app.tui.notifications.push_error(reason, Instant::now());
            to
        }
    };

    let current = app.tui.route;
    if resolved == current {
        return Vec::new();
    }

    let effects = leave(app, current);
    tracing::info!(from = %current, to = %resolved, "navigate");
    app.tui.route = resolved;
    effects
}

/// Discards the transient state of `route` and cancels its tasks.
fn leave(app: &mut AppState, route: Route) -> Vec<UiEffect> {
    match route {
        Route::Landing => Vec::new(),
        Route::Auth => {
            app.tui.auth.reset();
            cancel_task(&mut app.tui, TaskKind::AuthRequest)
                .into_iter()
                .collect()
        }
        Route::Documents => {
            app.overlay = None;
            app.tui.documents.reset();
            [TaskKind::FileDiscovery, TaskKind::DocumentProcessing]
                .into_iter()
                .filter_map(|kind| cancel_task(&mut app.tui, kind))
                .collect()
        }
    }
}

/// Forgets a running task and returns the effect that cancels it.
pub fn cancel_task(tui: &mut TuiState, kind: TaskKind) -> Option<UiEffect> {
    let state = tui.tasks.state_mut(kind);
    if !state.is_running() {
        return None;
    }
    tracing::debug!(?kind, "cancel task");
    let token = state.take_cancel();
    Some(UiEffect::CancelTask { kind, token })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/PIIDetectionPage"), Some(Route::Documents));
        assert_eq!(Route::from_path("/piidetectionpage"), None);
        assert_eq!(Route::from_path("/unknown"), None);
    }

    #[test]
    fn test_guard_blocks_documents_without_session() {
        let session = Session::default();
        assert_eq!(
            guard(Route::Documents, &session),
            Guard::Redirect {
                to: Route::Auth,
                reason: SIGN_IN_REQUIRED
            }
        );
        assert_eq!(guard(Route::Landing, &session), Guard::Allow(Route::Landing));
        assert_eq!(guard(Route::Auth, &session), Guard::Allow(Route::Auth));
    }

    #[test]
    fn test_guard_allows_documents_with_session() {
        let mut session = Session::default();
        session.mark_authenticated();
        assert_eq!(
            guard(Route::Documents, &session),
            Guard::Allow(Route::Documents)
        );
    }
}
