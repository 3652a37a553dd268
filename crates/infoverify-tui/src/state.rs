//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── route: Route              (current screen)
//! │   ├── session: Session          (authenticated flag)
//! │   ├── auth: AuthFormState       (credential form)
//! │   ├── documents: DocumentsState (selected files, results)
//! │   ├── notifications             (toast stack)
//! │   ├── task_seq / tasks          (async task lifecycle)
//! │   └── config
//! └── overlay: Option<Overlay>      (file picker)
//! ```
//!
//! Overlay handlers get `&mut Overlay` while the reducer keeps `&mut TuiState`,
//! so the two live side by side rather than nested.

use infoverify_core::config::Config;
use infoverify_core::session::Session;

use crate::common::{TaskSeq, Tasks};
use crate::features::auth::AuthFormState;
use crate::features::documents::DocumentsState;
use crate::features::notifications::Notifications;
use crate::overlays::Overlay;
use crate::router::Route;

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            tui: TuiState::new(config, session),
            overlay: None,
        }
    }
}

/// Everything except the active overlay.
#[derive(Debug)]
pub struct TuiState {
    pub should_quit: bool,
    pub route: Route,
    pub session: Session,
    pub auth: AuthFormState,
    pub documents: DocumentsState,
    pub notifications: Notifications,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub config: Config,
}

impl TuiState {
    /// Fresh state on the landing screen.
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            should_quit: false,
            route: Route::Landing,
            session,
            auth: AuthFormState::new(),
            documents: DocumentsState::new(),
            notifications: Notifications::new(config.success_ttl(), config.error_ttl()),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            config,
        }
    }
}
