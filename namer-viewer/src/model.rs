//! Display model for the section panel
//!
//! The session's tree is projected into a flat list of rows: a title row
//! per section, an option row per descriptor, and - when a folder is open -
//! its child words spliced in right below the folder row. The widgets only
//! ever see this flattened form, so rendering stays a pure map over it.

use namer_parser::TitleSession;

/// Which panel currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The section/option panel has focus.
    #[default]
    Sections,
    /// The editable input line has focus.
    Input,
}

impl Focus {
    /// Toggle focus to the other panel.
    pub fn toggle(&self) -> Focus {
        match self {
            Focus::Sections => Focus::Input,
            Focus::Input => Focus::Sections,
        }
    }
}

/// One display row of the section panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Section header; not selectable.
    Title { section: usize, text: String },
    /// A selectable option of a section.
    Option {
        section: usize,
        option: usize,
        label: String,
        is_folder: bool,
        is_open: bool,
    },
    /// A child word of the currently open folder.
    Child { child: usize, label: String },
}

impl Row {
    /// Whether the cursor may rest on this row.
    pub fn is_selectable(&self) -> bool {
        !matches!(self, Row::Title { .. })
    }
}

/// Flatten the session's tree into display rows, splicing the open
/// folder's children under its row.
pub fn flatten(session: &TitleSession) -> Vec<Row> {
    let open = session.state().open_folder;
    let mut rows = Vec::new();
    for (section_idx, section) in session.sections().iter().enumerate() {
        rows.push(Row::Title {
            section: section_idx,
            text: section.title.clone(),
        });
        for (option_idx, descriptor) in section.descriptors().into_iter().enumerate() {
            let is_open = open == Some((section_idx, option_idx));
            rows.push(Row::Option {
                section: section_idx,
                option: option_idx,
                label: descriptor.label,
                is_folder: descriptor.is_folder,
                is_open,
            });
            if is_open {
                let children = section.options[option_idx].children();
                for (child_idx, child) in children.iter().enumerate() {
                    rows.push(Row::Child {
                        child: child_idx,
                        label: child.clone(),
                    });
                }
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use namer_parser::{SessionEvent, TemplateLoader, TitleSession, TitleState};

    const TEMPLATE: &str = "\
Tests,Freq,,Version
PSD,2.4,2412,1
PWR,5.7,-,FINAL
";

    fn session() -> TitleSession {
        let sections = TemplateLoader::from_string(TEMPLATE).unwrap().parse().unwrap();
        TitleSession::new(sections, TitleState::new(true))
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Sections.toggle(), Focus::Input);
        assert_eq!(Focus::Input.toggle(), Focus::Sections);
    }

    #[test]
    fn test_flatten_without_open_folder() {
        let rows = flatten(&session());
        // 3 title rows + 2 + 2 + 2 option rows.
        assert_eq!(rows.len(), 9);
        assert!(matches!(&rows[0], Row::Title { text, .. } if text == "Tests"));
        assert!(rows.iter().all(|r| !matches!(r, Row::Child { .. })));
    }

    #[test]
    fn test_flatten_splices_open_folder_children() {
        let mut session = session();
        session.apply(SessionEvent::Select {
            section: 1,
            option: 0,
        });
        let rows = flatten(&session);
        let open_idx = rows
            .iter()
            .position(|r| matches!(r, Row::Option { is_open: true, .. }))
            .unwrap();
        assert!(
            matches!(&rows[open_idx + 1], Row::Child { child: 0, label } if label == "2412")
        );
    }

    #[test]
    fn test_title_rows_are_not_selectable() {
        for row in flatten(&session()) {
            match row {
                Row::Title { .. } => assert!(!row.is_selectable()),
                _ => assert!(row.is_selectable()),
            }
        }
    }
}
