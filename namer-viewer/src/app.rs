//! Application state and key routing
//!
//! `App` owns the title session, the two panel widgets, the focus flag and
//! the template loader. It routes key events to the focused widget,
//! applies the resulting events to the session, and carries the
//! shell-level operations: reload, clear, save-word, finish.

use crate::model::Focus;
use crate::widgets::{InputViewer, SectionViewer, Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use namer_config::NamerConfig;
use namer_parser::{
    parse, LoaderError, Outcome, SessionEvent, TemplateLoader, TitleSession, TitleState,
};
use tracing::warn;

/// Seed for a fresh title when date seeding is enabled, e.g. `27_Aug_26`.
pub fn date_seed() -> String {
    chrono::Local::now().format("%d_%b_%y").to_string()
}

/// The running application.
pub struct App {
    pub session: TitleSession,
    pub section_viewer: SectionViewer,
    pub input: InputViewer,
    pub focus: Focus,
    /// One-line message for the status bar (last action or error).
    pub status: String,
    loader: TemplateLoader,
    config: NamerConfig,
}

impl App {
    /// Build an app from a loaded template. Fails only if the template is
    /// malformed; from then on every failure is recoverable.
    pub fn new(loader: TemplateLoader, config: NamerConfig) -> Result<Self, LoaderError> {
        let sections = loader.parse()?;
        let session = TitleSession::new(sections, Self::fresh_state(&config))
            .with_separators(&config.title.separator, &config.title.export_separator);
        Ok(App {
            session,
            section_viewer: SectionViewer::new(),
            input: InputViewer::new(),
            focus: Focus::Sections,
            status: String::from("ready"),
            loader,
            config,
        })
    }

    fn fresh_state(config: &NamerConfig) -> TitleState {
        let seed = if config.title.seed_with_date {
            date_seed()
        } else {
            String::new()
        };
        TitleState::seeded(seed, config.interaction.alt_mode_default)
    }

    /// Handle one key event. Returns true when the session is finished.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        if key.code == KeyCode::Tab {
            self.focus = self.focus.toggle();
            return false;
        }
        match self.focus {
            Focus::Input => {
                if let Some(event) = self.input.handle_key(key, &self.session) {
                    self.apply_viewer_event(event);
                }
                false
            }
            Focus::Sections => match key.code {
                KeyCode::Char('q') if key.modifiers.is_empty() => true,
                KeyCode::Char('a') => {
                    self.session.apply(SessionEvent::ToggleAltMode);
                    self.status = format!(
                        "alt mode {}",
                        if self.session.state().alt_mode { "on" } else { "off" }
                    );
                    false
                }
                KeyCode::Char('c') => {
                    self.session.apply(SessionEvent::Clear);
                    self.input.clear();
                    self.status = String::from("title cleared");
                    false
                }
                KeyCode::Char('r') => {
                    self.reload();
                    false
                }
                KeyCode::Char('s') => {
                    self.save_typed_word();
                    false
                }
                _ => {
                    if let Some(event) = self.section_viewer.handle_key(key, &self.session) {
                        self.apply_viewer_event(event);
                    }
                    false
                }
            },
        }
    }

    fn apply_viewer_event(&mut self, event: ViewerEvent) {
        let outcome = match event {
            ViewerEvent::Select { section, option } => {
                self.session.apply(SessionEvent::Select { section, option })
            }
            ViewerEvent::SelectChild { child } => {
                self.session.apply(SessionEvent::SelectChild { child })
            }
            ViewerEvent::CommitInput(content) => {
                self.commit_typed(content);
                return;
            }
            ViewerEvent::NoChange => return,
        };
        match outcome {
            Outcome::Suggestion(word) => {
                // Alt mode off: stage the word for manual adjustment.
                self.input.stage(word);
                self.focus = Focus::Input;
                self.status = String::from("word staged, Enter to commit");
            }
            Outcome::TitleChanged => self.status = String::from("word added"),
            Outcome::FolderOpened => self.status = String::from("folder opened"),
            Outcome::FolderClosed => self.status = String::from("folder closed"),
            Outcome::Ignored => self.status = String::from("selection no longer available"),
            Outcome::Unchanged => {}
        }
    }

    /// Commit the input line: append the (possibly edited) word to the
    /// title with the display separator and hand the full text to the
    /// session as an explicit overwrite.
    fn commit_typed(&mut self, word: String) {
        if word.trim().is_empty() {
            return;
        }
        let text = self.session.state().text.as_str();
        let next = if text.is_empty() {
            word.trim().to_string()
        } else {
            format!("{}{}{}", text, self.session.separator(), word.trim())
        };
        self.session.apply(SessionEvent::SetText(next));
        self.status = String::from("word added");
        self.focus = Focus::Sections;
    }

    /// Re-read and re-parse the template. The tree is replaced atomically
    /// and the title state reset; on any failure the previous tree and
    /// state stay untouched.
    pub fn reload(&mut self) {
        let Some(path) = self.loader.path().map(|p| p.to_path_buf()) else {
            self.status = String::from("no template file to reload");
            return;
        };
        let loaded = TemplateLoader::from_path(&path).and_then(|loader| {
            let sections = loader.parse()?;
            Ok((loader, sections))
        });
        match loaded {
            Ok((loader, sections)) => {
                self.loader = loader;
                self.session.replace_sections(sections);
                self.session.reset(Self::fresh_state(&self.config));
                self.input.clear();
                self.status = String::from("template reloaded");
            }
            Err(err) => {
                warn!(%err, "template reload failed, keeping previous tree");
                self.status = format!("reload failed: {}", err);
            }
        }
    }

    /// Save the typed word into the template column of the section under
    /// the cursor, then rebuild the tree from the updated grid. The title
    /// built so far is kept.
    fn save_typed_word(&mut self) {
        let word = self.input.buffer().trim().to_string();
        if word.is_empty() {
            self.status = String::from("type a word to save first");
            return;
        }
        let Some(section_idx) = self.section_viewer.current_section(&self.session) else {
            self.status = String::from("no section selected");
            return;
        };
        let section = self.session.sections()[section_idx].clone();
        match self.loader.save_word(&section, &word) {
            Ok(()) => match parse(self.loader.grid()) {
                Ok(sections) => {
                    self.session.replace_sections(sections);
                    self.input.clear();
                    self.status = format!("saved '{}' under {}", word, section.title);
                }
                Err(err) => {
                    warn!(%err, "grid unparsable after save");
                    self.status = format!("save left a malformed table: {}", err);
                }
            },
            Err(err) => {
                warn!(%err, "save word failed");
                self.status = format!("save failed: {}", err);
            }
        }
    }

    /// Finish the session: export the title (underscore separator) and
    /// mirror it to stdout.
    pub fn finish(&self) -> String {
        self.session.export()
    }
}
