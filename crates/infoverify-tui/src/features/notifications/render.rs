//! Toast rendering: stacked boxes at the top center of the screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::{Notifications, ToastKind};
use crate::common::truncate_with_ellipsis;

const TOAST_HEIGHT: u16 = 3;
const MAX_TOAST_WIDTH: u16 = 60;

pub fn render_notifications(notifications: &Notifications, frame: &mut Frame, area: Rect) {
    let mut y = area.y + 1;
    for toast in notifications.visible() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }

        let (icon, color) = match toast.kind {
            ToastKind::Success => ("✓", Color::Green),
            ToastKind::Error => ("✗", Color::Red),
        };

        let max_width = MAX_TOAST_WIDTH.min(area.width.saturating_sub(4));
        let text_width = max_width.saturating_sub(6) as usize;
        let message = truncate_with_ellipsis(&toast.message, text_width);
        let width = (message.width() as u16 + 6).min(max_width);
        let x = area.x + area.width.saturating_sub(width) / 2;
        let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);

        frame.render_widget(Clear, toast_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let line = Line::from(vec![
            Span::styled(icon, Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), toast_area);

        y += TOAST_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn rows(notifications: &Notifications) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| render_notifications(notifications, frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_toasts_stack_top_center() {
        let mut notifications = Notifications::default();
        let now = Instant::now();
        notifications.push_success("Saved", now);
        notifications.push_error("Passwords do not match", now);

        let rows = rows(&notifications);

        // "Saved" is 5 columns wide plus icon, padding and borders.
        assert_eq!(rows[1].chars().position(|c| c == '┌'), Some((80 - 11) / 2));
        assert!(rows[2].contains("✓ Saved"));
        assert_eq!(rows[4].chars().position(|c| c == '┌'), Some((80 - 28) / 2));
        assert!(rows[5].contains("✗ Passwords do not match"));
        assert!(rows[0].trim().is_empty());
    }

    #[test]
    fn test_no_toasts_draw_nothing() {
        let rows = rows(&Notifications::default());
        assert!(rows.iter().all(|row| row.trim().is_empty()));
    }
}
