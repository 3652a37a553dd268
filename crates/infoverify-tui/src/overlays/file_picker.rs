//! File picker for one document slot.
//!
//! Discovery results arrive through the inbox while the picker is open; until
//! then the list shows a loading line. Typing filters the list with fuzzy
//! matching. Only the chosen file's name leaves the picker.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use infoverify_core::documents::{DocumentType, is_accepted_file};
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use tokio_util::sync::CancellationToken;

use super::OverlayUpdate;
use super::render_utils::{
    InputHint, InputLine, OverlayConfig, render_input_line, render_overlay, render_separator,
};
use crate::common::truncate_start_with_ellipsis;
use crate::mutations::StateMutation;

const MAX_VISIBLE_FILES: usize = 10;
const MAX_DEPTH: usize = 8;

/// A file that survived the current filter.
#[derive(Debug, Clone)]
pub struct FileMatch {
    pub file_idx: usize,
    /// `None` when no filter is applied.
    pub score: Option<u32>,
    /// Character positions of matched characters, ascending.
    pub match_chars: Vec<u32>,
}

#[derive(Debug)]
pub struct FilePickerState {
    pub doc_type: DocumentType,
    pub query: String,
    pub files: Vec<PathBuf>,
    pub filtered: Vec<FileMatch>,
    pub selected: usize,
    /// First list row on screen. Clamped during render to keep `selected` visible.
    pub offset: Cell<usize>,
    /// List rows available in the last render.
    pub visible_rows: Cell<usize>,
    pub loading: bool,
}

impl FilePickerState {
    pub fn open(doc_type: DocumentType) -> Self {
        Self {
            doc_type,
            query: String::new(),
            files: Vec::new(),
            filtered: Vec::new(),
            selected: 0,
            offset: Cell::new(0),
            visible_rows: Cell::new(MAX_VISIBLE_FILES),
            loading: true,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_file_picker(frame, self, area);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Enter => {
                let mutations = self
                    .selected_file_name()
                    .map(|file_name| StateMutation::SelectDocument {
                        doc_type: self.doc_type,
                        file_name,
                    })
                    .into_iter()
                    .collect();
                OverlayUpdate::close().with_mutations(mutations)
            }
            KeyCode::Up => {
                self.move_up();
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                self.move_down();
                OverlayUpdate::stay()
            }
            KeyCode::Char('p') if ctrl => {
                self.move_up();
                OverlayUpdate::stay()
            }
            KeyCode::Char('n') if ctrl => {
                self.move_down();
                OverlayUpdate::stay()
            }
            KeyCode::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                self.query.push(c);
                self.refilter();
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.scroll_to_selection(self.visible_rows.get());
    }

    fn move_down(&mut self) {
        if self.selected + 1 < self.filtered.len() {
            self.selected += 1;
            self.scroll_to_selection(self.visible_rows.get());
        }
    }

    /// Adjusts `offset` so `selected` falls within `rows` rows and returns it.
    fn scroll_to_selection(&self, rows: usize) -> usize {
        let rows = rows.max(1);
        let mut offset = self.offset.get().min(self.selected);
        if self.selected >= offset + rows {
            offset = self.selected + 1 - rows;
        }
        self.offset.set(offset);
        offset
    }

    pub fn selected_file(&self) -> Option<&PathBuf> {
        self.filtered
            .get(self.selected)
            .and_then(|m| self.files.get(m.file_idx))
    }

    /// Display name of the highlighted file (its last path component).
    pub fn selected_file_name(&self) -> Option<String> {
        self.selected_file()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub fn set_files(&mut self, files: Vec<PathBuf>) {
        self.files = files;
        self.loading = false;
        self.refilter();
    }

    fn refilter(&mut self) {
        let query = std::mem::take(&mut self.query);
        self.apply_filter(&query);
        self.query = query;
    }

    /// Rebuilds `filtered` for `pattern`, best score first.
    pub fn apply_filter(&mut self, pattern: &str) {
        self.filtered = if pattern.is_empty() {
            (0..self.files.len())
                .map(|file_idx| FileMatch {
                    file_idx,
                    score: None,
                    match_chars: Vec::new(),
                })
                .collect()
        } else {
            let mut matcher = Matcher::new(Config::DEFAULT.match_paths());
            let pattern = Pattern::parse(pattern, CaseMatching::Ignore, Normalization::Smart);
            let mut buf = Vec::new();

            let mut matches: Vec<FileMatch> = self
                .files
                .iter()
                .enumerate()
                .filter_map(|(file_idx, path)| {
                    let text = path.to_string_lossy();
                    let haystack = Utf32Str::new(&text, &mut buf);
                    let score = pattern.score(haystack, &mut matcher)?;
                    let mut match_chars = Vec::new();
                    pattern.indices(haystack, &mut matcher, &mut match_chars);
                    match_chars.sort_unstable();
                    match_chars.dedup();
                    Some(FileMatch {
                        file_idx,
                        score: Some(score),
                        match_chars,
                    })
                })
                .collect();
            matches.sort_by(|a, b| b.score.cmp(&a.score));
            matches
        };

        self.selected = 0;
        self.offset.set(0);
    }
}

/// Lists accepted document files under `root`, relative to it and sorted.
///
/// Honors ignore files and skips hidden entries. Returns what it has so far
/// once `cancel` fires.
pub fn discover_files(root: &Path, cancel: &CancellationToken) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    let mut files = Vec::new();
    let walker = WalkBuilder::new(root)
        .standard_filters(true)
        .max_depth(Some(MAX_DEPTH))
        .build();

    for entry in walker.flatten() {
        if cancel.is_cancelled() {
            return files;
        }
        if !entry.file_type().is_some_and(|ft| ft.is_file()) || !is_accepted_file(entry.path()) {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root)
            && !rel.as_os_str().is_empty()
        {
            files.push(rel.to_path_buf());
        }
    }

    files.sort();
    files
}

/// Splits `text` into plain and highlighted spans by character position.
fn highlighted_line(text: &str, match_chars: &[u32]) -> Line<'static> {
    let plain = Style::default().fg(Color::Cyan);
    let hit = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_hit = false;
    for (pos, ch) in text.chars().enumerate() {
        let is_hit = u32::try_from(pos).is_ok_and(|p| match_chars.binary_search(&p).is_ok());
        if is_hit != run_hit && !run.is_empty() {
            spans.push(Span::styled(
                std::mem::take(&mut run),
                if run_hit { hit } else { plain },
            ));
        }
        run.push(ch);
        run_hit = is_hit;
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, if run_hit { hit } else { plain }));
    }
    Line::from(spans)
}

pub fn render_file_picker(frame: &mut Frame, picker: &FilePickerState, area: Rect) {
    let count = picker.filtered.len();
    let visible = count.clamp(1, MAX_VISIBLE_FILES) as u16;

    let title = if picker.loading {
        format!("{} (loading...)", picker.doc_type.label())
    } else {
        format!("{} ({count})", picker.doc_type.label())
    };
    let hints = [
        InputHint::new("↑↓", "nav"),
        InputHint::new("Enter", "select"),
        InputHint::new("Esc", "cancel"),
    ];
    // query, separator, list, hints, borders
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: &title,
            border_color: Color::Blue,
            width: 60,
            height: visible + 5,
            hints: &hints,
        },
    );
    let body = layout.body;
    if body.height < 3 {
        return;
    }

    render_input_line(
        frame,
        Rect::new(body.x, body.y, body.width, 1),
        &InputLine {
            value: &picker.query,
            placeholder: Some("type to filter"),
            prompt: "> ",
            accent: Color::Blue,
        },
    );
    render_separator(frame, body, 1);
    let list_area = Rect::new(body.x, body.y + 2, body.width, body.height - 2);

    if picker.loading || picker.filtered.is_empty() {
        let message = if picker.loading {
            "Looking for documents..."
        } else if picker.files.is_empty() {
            "No PDF or image files found"
        } else {
            "No matches"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
            list_area,
        );
        return;
    }

    let rows = list_area.height as usize;
    picker.visible_rows.set(rows);
    let offset = picker.scroll_to_selection(rows);

    let max_width = list_area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = picker
        .filtered
        .iter()
        .skip(offset)
        .take(rows)
        .filter_map(|m| {
            let text = picker.files.get(m.file_idx)?.to_string_lossy().into_owned();
            let shown = truncate_start_with_ellipsis(&text, max_width);
            // Highlights are only kept when nothing was cut off.
            let line = if shown == text {
                highlighted_line(&text, &m.match_chars)
            } else {
                highlighted_line(&shown, &[])
            };
            Some(ListItem::new(line))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(Some(picker.selected - offset));
    frame.render_stateful_widget(list, list_area, &mut state);
}
