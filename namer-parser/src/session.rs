//! Title builder state machine
//!
//! `TitleSession` owns the parsed section tree plus the mutable
//! [`TitleState`], and applies [`SessionEvent`]s one at a time. Every
//! transition is a total, synchronous function of (state, event): events
//! that reference options not present in the tree are ignored with a
//! warning, never an error.
//!
//! The session is pure application state in the sense of the viewer model:
//! it knows nothing about rendering, so it can be tested without a
//! terminal.

use crate::sections::{Section, SectionOption};
use tracing::warn;

/// Default separator between title sections in the live display.
pub const DEFAULT_SEPARATOR: &str = " - ";
/// Default separator substituted into the exported string.
pub const DEFAULT_EXPORT_SEPARATOR: &str = "_";

/// The mutable state of one title-building session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleState {
    /// The title built so far, with the display separator applied.
    pub text: String,
    /// Alt-Button mode: when on, selected words are appended directly to
    /// the title; when off, they are handed back as suggestions for manual
    /// editing.
    pub alt_mode: bool,
    /// The currently open folder, as (section index, option index).
    pub open_folder: Option<(usize, usize)>,
}

impl TitleState {
    /// Fresh state with an empty title.
    pub fn new(alt_mode: bool) -> Self {
        TitleState {
            text: String::new(),
            alt_mode,
            open_folder: None,
        }
    }

    /// Fresh state whose title starts from a seed (e.g. the current date).
    pub fn seeded(seed: impl Into<String>, alt_mode: bool) -> Self {
        TitleState {
            text: seed.into(),
            alt_mode,
            open_folder: None,
        }
    }
}

/// User-driven events the session responds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Flip Alt-Button mode. Text and open folder are untouched.
    ToggleAltMode,
    /// Select an option of a section by index.
    Select { section: usize, option: usize },
    /// Select a child word of the currently open folder by index.
    SelectChild { child: usize },
    /// Overwrite the title text (manual-edit commit path).
    SetText(String),
    /// Reset the title text and close any open folder. Alt mode survives.
    Clear,
}

/// What a transition did, so the shell knows what to refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State unchanged (or only the alt flag flipped).
    Unchanged,
    /// The title text changed.
    TitleChanged,
    /// A folder was opened; text untouched.
    FolderOpened,
    /// A folder was closed without selecting a child.
    FolderClosed,
    /// Alt mode is off: the word is returned for manual insertion instead
    /// of being committed.
    Suggestion(String),
    /// The event referenced something not in the tree and was dropped.
    Ignored,
}

/// A title-building session over a parsed section tree.
#[derive(Debug, Clone)]
pub struct TitleSession {
    sections: Vec<Section>,
    state: TitleState,
    separator: String,
    export_separator: String,
}

impl TitleSession {
    pub fn new(sections: Vec<Section>, state: TitleState) -> Self {
        TitleSession {
            sections,
            state,
            separator: DEFAULT_SEPARATOR.to_string(),
            export_separator: DEFAULT_EXPORT_SEPARATOR.to_string(),
        }
    }

    /// Override the display and export separators (from configuration).
    pub fn with_separators(
        mut self,
        separator: impl Into<String>,
        export_separator: impl Into<String>,
    ) -> Self {
        self.separator = separator.into();
        self.export_separator = export_separator.into();
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn state(&self) -> &TitleState {
        &self.state
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Atomically replace the section tree (template reload). Any open
    /// folder refers to the old tree and is closed; the title text is the
    /// caller's concern.
    pub fn replace_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
        self.state.open_folder = None;
    }

    /// Restart the session with fresh state, keeping the current tree.
    pub fn reset(&mut self, state: TitleState) {
        self.state = state;
    }

    /// Apply one event and report what changed.
    pub fn apply(&mut self, event: SessionEvent) -> Outcome {
        match event {
            SessionEvent::ToggleAltMode => {
                self.state.alt_mode = !self.state.alt_mode;
                Outcome::Unchanged
            }
            SessionEvent::Select { section, option } => self.select(section, option),
            SessionEvent::SelectChild { child } => self.select_child(child),
            SessionEvent::SetText(text) => {
                self.state.text = text;
                Outcome::TitleChanged
            }
            SessionEvent::Clear => {
                self.state.text.clear();
                self.state.open_folder = None;
                Outcome::TitleChanged
            }
        }
    }

    fn select(&mut self, section: usize, option: usize) -> Outcome {
        let Some(selected) = self
            .sections
            .get(section)
            .and_then(|s| s.options.get(option))
        else {
            warn!(section, option, "select event for unknown option, ignoring");
            return Outcome::Ignored;
        };

        if selected.is_folder() {
            if self.state.open_folder == Some((section, option)) {
                // Re-selecting the open folder closes it; navigation only.
                self.state.open_folder = None;
                return Outcome::FolderClosed;
            }
            self.state.open_folder = Some((section, option));
            return Outcome::FolderOpened;
        }

        // Plain option, or a folder with no children acting as one.
        let word = selected.word().to_string();
        self.state.open_folder = None;
        self.commit(word)
    }

    fn select_child(&mut self, child: usize) -> Outcome {
        let Some((section, option)) = self.state.open_folder else {
            warn!(child, "child selection with no open folder, ignoring");
            return Outcome::Ignored;
        };
        let children = match self
            .sections
            .get(section)
            .and_then(|s| s.options.get(option))
        {
            Some(selected) => selected.children(),
            None => {
                warn!(section, option, "open folder no longer in tree, ignoring");
                self.state.open_folder = None;
                return Outcome::Ignored;
            }
        };
        let Some(word) = children.get(child).cloned() else {
            warn!(child, "child selection out of range, ignoring");
            return Outcome::Ignored;
        };
        self.state.open_folder = None;
        self.commit(word)
    }

    /// Combine a resolved word into the title per the current alt mode.
    fn commit(&mut self, word: String) -> Outcome {
        if !self.state.alt_mode {
            return Outcome::Suggestion(word);
        }
        if self.state.text.is_empty() {
            self.state.text = word;
        } else {
            self.state.text.push_str(&self.separator);
            self.state.text.push_str(&word);
        }
        Outcome::TitleChanged
    }

    /// The finished title with the display separator, mirrored to stdout.
    pub fn finalize(&self) -> String {
        let title = self.state.text.clone();
        println!("{title}");
        title
    }

    /// The finished title with the export separator substituted, mirrored
    /// to stdout. This is the string embedding consumers receive.
    pub fn export(&self) -> String {
        let title = self.state.text.replace(&self.separator, &self.export_separator);
        println!("{title}");
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::parse::parse;

    fn scenario_sections() -> Vec<Section> {
        let rows = vec![
            vec!["Tests", "Modulation", "BW", "Freq", "", "", "", "Version"],
            vec!["PSD", "802.11a", "20", "2.4", "2412", "2437", "2462", "1"],
            vec!["PWR", "802.11n", "40", "5.1", "5180", "-", "-", "FINAL"],
            vec!["OBW", "-", "80", "5.7", "-", "-", "-", "-"],
        ];
        let grid = Grid::from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        );
        parse(&grid).unwrap()
    }

    fn alt_session() -> TitleSession {
        TitleSession::new(scenario_sections(), TitleState::new(true))
    }

    #[test]
    fn test_toggle_alt_mode_touches_nothing_else() {
        let mut session = alt_session();
        session.apply(SessionEvent::Select {
            section: 0,
            option: 0,
        });
        let before = session.state().text.clone();
        assert_eq!(session.apply(SessionEvent::ToggleAltMode), Outcome::Unchanged);
        assert!(!session.state().alt_mode);
        assert_eq!(session.state().text, before);
        assert_eq!(session.state().open_folder, None);
    }

    #[test]
    fn test_alt_on_appends_with_separator() {
        let mut session = alt_session();
        session.apply(SessionEvent::Select {
            section: 0,
            option: 0,
        });
        session.apply(SessionEvent::Select {
            section: 2,
            option: 1,
        });
        assert_eq!(session.state().text, "PSD - 40");
    }

    #[test]
    fn test_alt_off_returns_suggestion() {
        let mut session = TitleSession::new(scenario_sections(), TitleState::new(false));
        let outcome = session.apply(SessionEvent::Select {
            section: 0,
            option: 1,
        });
        assert_eq!(outcome, Outcome::Suggestion("PWR".into()));
        assert_eq!(session.state().text, "");

        // The caller commits edits explicitly.
        session.apply(SessionEvent::SetText("PWR_edited".into()));
        assert_eq!(session.state().text, "PWR_edited");
    }

    #[test]
    fn test_opening_folder_never_mutates_text() {
        let mut session = alt_session();
        let outcome = session.apply(SessionEvent::Select {
            section: 3,
            option: 0,
        });
        assert_eq!(outcome, Outcome::FolderOpened);
        assert_eq!(session.state().text, "");
        assert_eq!(session.state().open_folder, Some((3, 0)));
    }

    #[test]
    fn test_selecting_child_commits_once_and_closes_folder() {
        let mut session = alt_session();
        session.apply(SessionEvent::Select {
            section: 3,
            option: 0,
        });
        let outcome = session.apply(SessionEvent::SelectChild { child: 0 });
        assert_eq!(outcome, Outcome::TitleChanged);
        assert_eq!(session.state().text, "2412");
        assert_eq!(session.state().open_folder, None);
    }

    #[test]
    fn test_reselecting_open_folder_closes_it() {
        let mut session = alt_session();
        session.apply(SessionEvent::Select {
            section: 3,
            option: 0,
        });
        let outcome = session.apply(SessionEvent::Select {
            section: 3,
            option: 0,
        });
        assert_eq!(outcome, Outcome::FolderClosed);
        assert_eq!(session.state().open_folder, None);
        assert_eq!(session.state().text, "");
    }

    #[test]
    fn test_empty_folder_acts_as_plain_option() {
        // Freq row "5.7" has only empty sub-cells, so it is plain.
        let mut session = alt_session();
        let outcome = session.apply(SessionEvent::Select {
            section: 3,
            option: 2,
        });
        assert_eq!(outcome, Outcome::TitleChanged);
        assert_eq!(session.state().text, "5.7");
        assert_eq!(session.state().open_folder, None);
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let mut session = alt_session();
        session.apply(SessionEvent::Select {
            section: 0,
            option: 0,
        });
        let before = session.state().clone();
        assert_eq!(
            session.apply(SessionEvent::Select {
                section: 99,
                option: 0,
            }),
            Outcome::Ignored
        );
        assert_eq!(
            session.apply(SessionEvent::SelectChild { child: 0 }),
            Outcome::Ignored
        );
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_clear_resets_text_keeps_alt_mode() {
        let mut session = alt_session();
        session.apply(SessionEvent::Select {
            section: 0,
            option: 0,
        });
        session.apply(SessionEvent::Select {
            section: 3,
            option: 0,
        });
        session.apply(SessionEvent::Clear);
        assert_eq!(session.state().text, "");
        assert_eq!(session.state().open_folder, None);
        assert!(session.state().alt_mode);
    }

    #[test]
    fn test_scenario_b_finalize_and_export() {
        let mut session = alt_session();
        // PSD
        session.apply(SessionEvent::Select {
            section: 0,
            option: 0,
        });
        // 2.4 -> 2412
        session.apply(SessionEvent::Select {
            section: 3,
            option: 0,
        });
        session.apply(SessionEvent::SelectChild { child: 0 });
        // FINAL
        session.apply(SessionEvent::Select {
            section: 4,
            option: 1,
        });
        assert_eq!(session.finalize(), "PSD - 2412 - FINAL");
        assert_eq!(session.export(), "PSD_2412_FINAL");
    }

    #[test]
    fn test_seeded_state_prefixes_title() {
        let mut session =
            TitleSession::new(scenario_sections(), TitleState::seeded("27_Aug_26", true));
        session.apply(SessionEvent::Select {
            section: 0,
            option: 0,
        });
        assert_eq!(session.state().text, "27_Aug_26 - PSD");
        assert_eq!(session.export(), "27_Aug_26_PSD");
    }

    #[test]
    fn test_replace_sections_closes_folder() {
        let mut session = alt_session();
        session.apply(SessionEvent::Select {
            section: 3,
            option: 0,
        });
        session.replace_sections(Vec::new());
        assert_eq!(session.state().open_folder, None);
        assert_eq!(
            session.apply(SessionEvent::Select {
                section: 0,
                option: 0,
            }),
            Outcome::Ignored
        );
    }
}
