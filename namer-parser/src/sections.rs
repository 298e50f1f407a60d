//! Section/option tree
//!
//! The parsed form of a template: an ordered list of titled sections, each
//! holding the selectable words of its column. A word whose row carries
//! extra cells in the untitled columns to the right becomes a folder with
//! those cells as children.
//!
//! These are plain data types; rendering code only ever sees them through
//! [`Section::descriptors`], so the tree stays free of display concerns.

use serde::Serialize;

/// A titled group of selectable words, one per titled template column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section title, taken from row 0 of the originating column.
    pub title: String,
    /// Originating column index in the source grid.
    pub column: usize,
    /// Selectable options, in source row order.
    pub options: Vec<SectionOption>,
}

/// A selectable option within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionOption {
    /// A single clickable word.
    Plain { word: String },
    /// A word that opens a sub-menu of child words.
    Folder { word: String, children: Vec<String> },
}

impl SectionOption {
    /// The word shown on the option itself.
    pub fn word(&self) -> &str {
        match self {
            SectionOption::Plain { word } => word,
            SectionOption::Folder { word, .. } => word,
        }
    }

    /// Child words, empty for plain options.
    pub fn children(&self) -> &[String] {
        match self {
            SectionOption::Plain { .. } => &[],
            SectionOption::Folder { children, .. } => children,
        }
    }

    /// Whether selecting this option opens a folder. A folder with no
    /// children acts as a plain option, so it does not count here.
    pub fn is_folder(&self) -> bool {
        !self.children().is_empty()
    }
}

/// Rendering-boundary projection of one option: what to draw on the
/// control and whether it opens a folder. The shell maps over these
/// instead of touching the tree types directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDescriptor {
    pub label: String,
    pub is_folder: bool,
}

impl Section {
    /// Ordered descriptors for this section's options.
    pub fn descriptors(&self) -> Vec<OptionDescriptor> {
        self.options
            .iter()
            .map(|option| OptionDescriptor {
                label: option.word().to_string(),
                is_folder: option.is_folder(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(word: &str, children: &[&str]) -> SectionOption {
        SectionOption::Folder {
            word: word.to_string(),
            children: children.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_option_word() {
        let plain = SectionOption::Plain { word: "PSD".into() };
        assert_eq!(plain.word(), "PSD");
        assert_eq!(folder("2.4", &["2412"]).word(), "2.4");
    }

    #[test]
    fn test_empty_folder_is_not_a_folder() {
        assert!(folder("2.4", &["2412"]).is_folder());
        assert!(!folder("5.7", &[]).is_folder());
        assert!(!SectionOption::Plain { word: "20".into() }.is_folder());
    }

    #[test]
    fn test_descriptors() {
        let section = Section {
            title: "Freq".into(),
            column: 3,
            options: vec![
                folder("2.4", &["2412", "2437"]),
                SectionOption::Plain { word: "5.7".into() },
            ],
        };
        let descriptors = section.descriptors();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].label, "2.4");
        assert!(descriptors[0].is_folder);
        assert_eq!(descriptors[1].label, "5.7");
        assert!(!descriptors[1].is_folder);
    }
}
