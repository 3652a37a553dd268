//! Shared drawing helpers for overlays and centered cards.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_start_with_ellipsis;

/// A `width` x `height` box centered in `area`, shrunk to fit with a margin.
pub fn calculate_overlay_area(area: Rect, available_height: u16, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(available_height.min(area.height).saturating_sub(2));

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + available_height.min(area.height).saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Clears the background and draws a titled border.
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

/// Areas inside a rendered overlay. `footer` holds the hints line.
pub struct OverlayLayout {
    pub popup: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Draws the container and hints, returning where the body goes.
pub fn render_overlay(frame: &mut Frame, area: Rect, config: &OverlayConfig<'_>) -> OverlayLayout {
    let popup = calculate_overlay_area(area, area.height, config.width, config.height);
    render_overlay_container(frame, popup, config.title, config.border_color);

    let inner = Block::default().borders(Borders::ALL).inner(popup);
    let footer_height = u16::from(!config.hints.is_empty());
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(footer_height)]).areas(inner);

    if !config.hints.is_empty() {
        render_hints(frame, footer, config.hints, config.border_color);
    }

    OverlayLayout {
        popup,
        body,
        footer,
    }
}

/// One "key action" pair in a hints line.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

pub struct InputLine<'a> {
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub prompt: &'a str,
    pub accent: Color,
}

/// Renders "> text█", or the placeholder after the cursor when empty.
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &InputLine<'_>) {
    let prompt_width = unicode_width::UnicodeWidthStr::width(input.prompt);
    let max_width = (area.width as usize).saturating_sub(prompt_width + 1);
    let cursor = Span::styled("█", Style::default().fg(input.accent));

    let mut spans = vec![Span::styled(input.prompt, Style::default().fg(input.accent))];
    match (input.value.is_empty(), input.placeholder) {
        (true, Some(placeholder)) => {
            spans.push(cursor);
            spans.push(Span::styled(
                truncate_start_with_ellipsis(placeholder, max_width),
                Style::default().fg(Color::DarkGray),
            ));
        }
        _ => {
            spans.push(Span::styled(
                truncate_start_with_ellipsis(input.value, max_width),
                Style::default().fg(Color::White),
            ));
            spans.push(cursor);
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders centered hints on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    if area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        row,
    );
}

/// Horizontal rule `y_offset` rows below the top of `area`.
pub fn render_separator(frame: &mut Frame, area: Rect, y_offset: u16) {
    if y_offset >= area.height {
        return;
    }
    let row = Rect::new(area.x, area.y + y_offset, area.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(Color::DarkGray),
        )),
        row,
    );
}

/// A rectangle of the given percentage size centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(r);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
