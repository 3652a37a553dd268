//! Landing screen: static introduction with a single way forward.

mod render;

use crossterm::event::{KeyCode, KeyEvent};
pub use render::render_landing;

use crate::effects::UiEffect;
use crate::router::{Route, ViewUpdate};

pub fn handle_key(key: KeyEvent) -> ViewUpdate {
    match key.code {
        KeyCode::Enter => ViewUpdate::navigate(Route::Auth),
        KeyCode::Esc | KeyCode::Char('q') => ViewUpdate::effects(vec![UiEffect::Quit]),
        _ => ViewUpdate::none(),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_enter_goes_to_auth() {
        assert_eq!(handle_key(key(KeyCode::Enter)).navigate, Some(Route::Auth));
    }

    #[test]
    fn test_q_quits() {
        let update = handle_key(key(KeyCode::Char('q')));
        assert!(matches!(update.effects.as_slice(), [UiEffect::Quit]));
        assert!(update.navigate.is_none());
    }

    #[test]
    fn test_other_keys_ignored() {
        let update = handle_key(key(KeyCode::Char('x')));
        assert!(update.effects.is_empty());
        assert!(update.navigate.is_none());
    }
}
