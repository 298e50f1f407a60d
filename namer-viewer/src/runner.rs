//! Terminal lifecycle and the embedding entry point
//!
//! `run_title_builder` is the programmatic equivalent of running the
//! binary: it opens the template, drives the interactive session to
//! completion, and returns the finalized title in export form (underscore
//! separators). The export is also mirrored to stdout, so embedding
//! callers and shell pipelines see the same string.

use crate::app::App;
use crate::ui;
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use namer_config::NamerConfig;
use namer_parser::TemplateLoader;
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Duration;

/// Run the interactive title builder over the given template and return
/// the exported title string.
pub fn run_title_builder(
    template_path: impl AsRef<Path>,
    config: NamerConfig,
) -> io::Result<String> {
    let template_path = template_path.as_ref();
    let template_name = template_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let loader = TemplateLoader::from_path(template_path)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string()))?;
    let mut app = App::new(loader, config)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string()))?;

    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &template_name);

    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;
    result?;

    Ok(app.finish())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    template_name: &str,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::render(frame, app, template_name);
        })?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) {
                        return Ok(());
                    }
                }
                // On terminal resize the next draw() picks up the new size
                Event::Resize(_, _) => {}
                _ => {
                    // Ignore other events (mouse, focus, etc.)
                }
            }
        }
    }
}
