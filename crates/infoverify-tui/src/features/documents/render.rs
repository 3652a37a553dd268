use infoverify_core::documents::DocumentType;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::state::DocumentsState;
use crate::common::truncate_with_ellipsis;
use crate::overlays::render_utils::{InputHint, render_hints};

const HEADER: &str = "RAC Document Verification System";
const RESULTS_PLACEHOLDER: &str = "Results will appear here...";

/// Renders the intake screen. `processing` dims the process button.
pub fn render_documents(frame: &mut Frame, state: &DocumentsState, processing: bool, area: Rect) {
    let [header, main, button, hints] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(7),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            HEADER,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        header,
    );

    let [uploads, results] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(main);
    render_uploads(frame, state, uploads);
    render_results(frame, &state.results, results);

    let (label, style) = if processing {
        ("[ Processing... ]", Style::default().fg(Color::DarkGray))
    } else {
        (
            "[ Process Documents ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center),
        button,
    );

    let hint_list = [
        InputHint::new("↑↓", "nav"),
        InputHint::new("Enter", "choose file"),
        InputHint::new("p", "process"),
        InputHint::new("Esc", "home"),
    ];
    render_hints(frame, hints, &hint_list, Color::Cyan);
}

fn render_uploads(frame: &mut Frame, state: &DocumentsState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Upload Required Documents ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_width = DocumentType::ALL
        .iter()
        .map(|t| t.label().len())
        .max()
        .unwrap_or(0);
    let file_width = (inner.width as usize).saturating_sub(label_width + 16);

    let lines: Vec<Line> = DocumentType::ALL
        .iter()
        .enumerate()
        .map(|(idx, doc_type)| {
            let highlighted = idx == state.selected;
            let has_file = state.set.get(*doc_type).is_some();
            let row_style = if highlighted {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let file_style = if has_file {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            Line::from(vec![
                Span::styled(if highlighted { "▶ " } else { "  " }, row_style),
                Span::styled(
                    format!("{:<label_width$}  ", doc_type.label()),
                    row_style.fg(Color::Gray),
                ),
                Span::styled(
                    format!("[{:^9}] ", state.action_label(*doc_type)),
                    row_style.fg(Color::Cyan),
                ),
                Span::styled(
                    truncate_with_ellipsis(state.file_label(*doc_type), file_width),
                    row_style.patch(file_style),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_results(frame: &mut Frame, results: &[String], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Processing Results ");

    let lines: Vec<Line> = if results.is_empty() {
        vec![Line::from(Span::styled(
            RESULTS_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        results.iter().map(|r| Line::from(r.as_str())).collect()
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
