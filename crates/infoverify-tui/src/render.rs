//! Pure view functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;

use crate::features::{auth, documents, landing, notifications};
use crate::overlays::OverlayExt;
use crate::router::Route;
use crate::state::AppState;

/// Draws the current screen, then the overlay, then toasts on top.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let tui = &app.tui;

    match tui.route {
        Route::Landing => landing::render_landing(frame, area),
        Route::Auth => auth::render_auth(
            frame,
            &tui.auth,
            tui.tasks.auth_request.is_running(),
            area,
        ),
        Route::Documents => documents::render_documents(
            frame,
            &tui.documents,
            tui.tasks.document_processing.is_running(),
            area,
        ),
    }

    app.overlay.render(frame, area);
    notifications::render_notifications(&tui.notifications, frame, area);
}
