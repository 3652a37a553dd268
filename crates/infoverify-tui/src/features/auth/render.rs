//! Auth feature view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{AuthField, AuthFormState};
use crate::common::{mask, truncate_start_with_ellipsis};
use crate::overlays::render_utils::{InputHint, calculate_overlay_area, render_hints};

const FORM_WIDTH: u16 = 56;

/// Renders the sign-in/register card. `pending` dims the submit button.
pub fn render_auth(frame: &mut Frame, state: &AuthFormState, pending: bool, area: Rect) {
    let fields = state.visible_fields();
    // label, input, gap per field; then button, switch line, hints and borders
    let height = fields.len() as u16 * 3 + 9;
    let card = calculate_overlay_area(area, area.height, FORM_WIDTH, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", state.mode.title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let field_width = inner.width.saturating_sub(4) as usize;
    let mut lines = vec![Line::default()];

    for field in fields {
        lines.push(Line::from(Span::styled(
            format!("  {}", field.label()),
            Style::default().fg(Color::Gray),
        )));
        lines.push(field_line(state, *field, field_width));
        lines.push(Line::default());
    }

    let button_style = if pending {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };
    let button = if pending {
        "[ Please wait... ]".to_string()
    } else {
        format!("[ {} ]", state.mode.title())
    };
    lines.push(Line::from(Span::styled(button, button_style)).alignment(Alignment::Center));
    lines.push(Line::default());

    let (prompt, action) = if state.mode.is_register() {
        ("Already have an account? ", "Sign In")
    } else {
        ("Need an account? ", "Register")
    };
    lines.push(
        Line::from(vec![
            Span::styled(prompt, Style::default().fg(Color::DarkGray)),
            Span::styled(
                action,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ])
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines), inner);

    let visibility = if state.show_password { "hide" } else { "show" };
    let hints = [
        InputHint::new("Enter", "submit"),
        InputHint::new("Tab", "next"),
        InputHint::new("^T", visibility),
        InputHint::new("^R", "switch"),
        InputHint::new("Esc", "back"),
    ];
    render_hints(frame, inner, &hints, Color::Cyan);
}

fn field_line(state: &AuthFormState, field: AuthField, width: usize) -> Line<'static> {
    let focused = state.focus == field;
    let value = state.value(field);
    let marker = if focused { "> " } else { "  " };
    let marker_style = Style::default().fg(Color::Cyan);

    if value.is_empty() {
        let mut spans = vec![Span::styled(marker, marker_style)];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
        spans.push(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
        return Line::from(spans);
    }

    let shown = if state.is_masked(field) {
        mask(value)
    } else {
        value.to_string()
    };
    let mut spans = vec![
        Span::styled(marker, marker_style),
        Span::styled(
            truncate_start_with_ellipsis(&shown, width.saturating_sub(1)),
            Style::default().fg(Color::White),
        ),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use infoverify_core::credentials::AuthMode;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw(state: &AuthFormState, pending: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render_auth(frame, state, pending, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn register_form() -> AuthFormState {
        let mut state = AuthFormState::new();
        state.mode = AuthMode::Register;
        state.credentials.email = "a@b.com".to_string();
        state.credentials.password = "secret12".to_string();
        state.credentials.confirm_password = "secret12".to_string();
        state
    }

    #[test]
    fn test_both_password_rows_masked() {
        let screen = draw(&register_form(), false);

        assert_eq!(screen.matches("••••••••").count(), 2);
        assert!(!screen.contains("secret12"));
        assert!(screen.contains("a@b.com"));
        assert!(screen.contains("Confirm Password"));
    }

    #[test]
    fn test_show_password_reveals_both_rows() {
        let mut state = register_form();
        state.toggle_password_visibility();

        let screen = draw(&state, false);
        assert_eq!(screen.matches("secret12").count(), 2);
        // Hint separators use single bullets; masked values never appear.
        assert!(!screen.contains("••"));
    }

    #[test]
    fn test_sign_in_card() {
        let screen = draw(&AuthFormState::new(), false);
        assert!(screen.contains("[ Sign In ]"));
        assert!(screen.contains("Need an account? Register"));
        assert!(!screen.contains("Confirm Password"));
    }

    #[test]
    fn test_pending_button() {
        let screen = draw(&register_form(), true);
        assert!(screen.contains("[ Please wait... ]"));
        assert!(screen.contains("Already have an account? Sign In"));
    }
}
