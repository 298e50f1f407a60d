//! Panel widgets - the section list and the editable input line
//!
//! Widgets implement the [`Viewer`] trait: render themselves from the
//! session and translate keyboard input into [`ViewerEvent`]s. They never
//! mutate the session; the app applies the events.

use crate::model::{flatten, Row};
use crossterm::event::{KeyCode, KeyEvent};
use namer_parser::TitleSession;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Events emitted by widgets for the app to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Select the option at (section, option).
    Select { section: usize, option: usize },
    /// Select a child of the open folder.
    SelectChild { child: usize },
    /// The input line was committed with this content.
    CommitInput(String),
    /// Nothing to apply.
    NoChange,
}

/// Trait for panel widgets: render from the session, map keys to events.
pub trait Viewer {
    fn render(&self, frame: &mut Frame, area: Rect, session: &TitleSession);
    fn handle_key(&mut self, key: KeyEvent, session: &TitleSession) -> Option<ViewerEvent>;
}

/// The navigable section/option panel.
#[derive(Debug, Default)]
pub struct SectionViewer {
    /// Cursor position as an index into the flattened rows.
    cursor: usize,
}

impl SectionViewer {
    pub fn new() -> Self {
        SectionViewer { cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Section index under the cursor, for save-word targeting.
    pub fn current_section(&self, session: &TitleSession) -> Option<usize> {
        let rows = flatten(session);
        match rows.get(self.cursor)? {
            Row::Title { section, .. } | Row::Option { section, .. } => Some(*section),
            Row::Child { .. } => session.state().open_folder.map(|(section, _)| section),
        }
    }

    /// Keep the cursor on a selectable row after the row list changed
    /// (folder opened/closed, tree reloaded).
    fn normalize(&mut self, rows: &[Row]) {
        if rows.is_empty() {
            self.cursor = 0;
            return;
        }
        if self.cursor >= rows.len() {
            self.cursor = rows.len() - 1;
        }
        if !rows[self.cursor].is_selectable() {
            self.cursor = next_selectable(rows, self.cursor)
                .or_else(|| prev_selectable(rows, self.cursor))
                .unwrap_or(0);
        }
    }
}

fn next_selectable(rows: &[Row], from: usize) -> Option<usize> {
    rows.iter()
        .enumerate()
        .skip(from + 1)
        .find(|(_, row)| row.is_selectable())
        .map(|(idx, _)| idx)
}

fn prev_selectable(rows: &[Row], from: usize) -> Option<usize> {
    rows.iter()
        .enumerate()
        .take(from)
        .rev()
        .find(|(_, row)| row.is_selectable())
        .map(|(idx, _)| idx)
}

impl Viewer for SectionViewer {
    fn render(&self, frame: &mut Frame, area: Rect, session: &TitleSession) {
        let rows = flatten(session);
        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let text = match row {
                    Row::Title { text, .. } => text.clone(),
                    Row::Option {
                        label,
                        is_folder,
                        is_open,
                        ..
                    } => {
                        let marker = if *is_open {
                            " \u{25be}" // open folder
                        } else if *is_folder {
                            " \u{25b8}"
                        } else {
                            ""
                        };
                        format!("  {}{}", label, marker)
                    }
                    Row::Child { label, .. } => format!("    {}", label),
                };
                if idx == self.cursor {
                    Line::from(text).style(
                        Style::default()
                            .bg(Color::Blue)
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if matches!(row, Row::Title { .. }) {
                    Line::from(text).style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::from(text)
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_key(&mut self, key: KeyEvent, session: &TitleSession) -> Option<ViewerEvent> {
        let rows = flatten(session);
        self.normalize(&rows);
        if rows.is_empty() {
            return Some(ViewerEvent::NoChange);
        }
        match key.code {
            KeyCode::Up => {
                if let Some(prev) = prev_selectable(&rows, self.cursor) {
                    self.cursor = prev;
                }
                Some(ViewerEvent::NoChange)
            }
            KeyCode::Down => {
                if let Some(next) = next_selectable(&rows, self.cursor) {
                    self.cursor = next;
                }
                Some(ViewerEvent::NoChange)
            }
            KeyCode::Enter => match &rows[self.cursor] {
                Row::Option {
                    section, option, ..
                } => Some(ViewerEvent::Select {
                    section: *section,
                    option: *option,
                }),
                Row::Child { child, .. } => Some(ViewerEvent::SelectChild { child: *child }),
                Row::Title { .. } => Some(ViewerEvent::NoChange),
            },
            _ => Some(ViewerEvent::NoChange),
        }
    }
}

/// The editable input line. Holds staged suggestions in Alt-off mode and
/// free-typed words; Enter commits the content.
#[derive(Debug, Default)]
pub struct InputViewer {
    buffer: String,
}

impl InputViewer {
    pub fn new() -> Self {
        InputViewer {
            buffer: String::new(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Stage a suggested word, replacing whatever was typed.
    pub fn stage(&mut self, word: impl Into<String>) {
        self.buffer = word.into();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Viewer for InputViewer {
    fn render(&self, frame: &mut Frame, area: Rect, _session: &TitleSession) {
        let line = Line::from(format!("{}\u{2588}", self.buffer));
        frame.render_widget(Paragraph::new(line), area);
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &TitleSession) -> Option<ViewerEvent> {
        match key.code {
            KeyCode::Char(c) => {
                self.buffer.push(c);
                Some(ViewerEvent::NoChange)
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                Some(ViewerEvent::NoChange)
            }
            KeyCode::Enter => {
                let content = std::mem::take(&mut self.buffer);
                Some(ViewerEvent::CommitInput(content))
            }
            _ => Some(ViewerEvent::NoChange),
        }
    }
}
