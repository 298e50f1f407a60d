//! UI rendering logic
//!
//! Layout structure:
//! - Title bar (1 line, fixed): template name and alt mode flag
//! - Section panel (responsive height)
//! - Input line (3 lines with border)
//! - Title line (1 line): the title built so far
//! - Status line (1 line): last action or error

use crate::app::App;
use crate::model::Focus;
use crate::widgets::Viewer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 40;
/// Height of the bordered input line
const INPUT_HEIGHT: u16 = 3;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App, template_name: &str) {
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title bar
            Constraint::Min(1),               // Section panel
            Constraint::Length(INPUT_HEIGHT), // Input line
            Constraint::Length(1),            // Built title
            Constraint::Length(1),            // Status line
        ])
        .split(size);

    render_title_bar(frame, chunks[0], app, template_name);
    render_section_panel(frame, chunks[1], app);
    render_input_line(frame, chunks[2], app);
    render_built_title(frame, chunks[3], app);
    render_status_line(frame, chunks[4], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App, template_name: &str) {
    let alt = if app.session.state().alt_mode {
        "Alt ON"
    } else {
        "Alt OFF"
    };
    let title = format!("namer:: {} | {}", template_name, alt);
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_section_panel(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::Sections {
        " [FOCUSED]"
    } else {
        ""
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Sections{}", focus_indicator));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if app.session.sections().is_empty() {
        let paragraph = Paragraph::new("no sections available - fix the template and press r")
            .style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, inner_area);
        return;
    }
    app.section_viewer.render(frame, inner_area, &app.session);
}

fn render_input_line(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::Input {
        " [FOCUSED]"
    } else {
        ""
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Input{}", focus_indicator));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    app.input.render(frame, inner_area, &app.session);
}

fn render_built_title(frame: &mut Frame, area: Rect, app: &App) {
    let line = ratatui::text::Line::from(vec![
        Span::styled(
            "Title: ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(app.session.state().text.clone()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(app.status.clone())];
    if app.session.state().open_folder.is_some() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "folder open",
            Style::default().fg(Color::Yellow),
        ));
    }
    let paragraph = Paragraph::new(ratatui::text::Line::from(spans))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(paragraph, area);
}
