//! Column-to-hierarchy parser
//!
//! Scans the grid left to right, one column at a time. A column whose row-0
//! cell is non-empty starts a new section; a column with an empty row-0 cell
//! contributes sub-option children to the most recent section. The first
//! column must be titled - a sub-option column with no titled predecessor
//! is ambiguous and rejected rather than silently dropped.

use crate::grid::{is_blank, Grid};
use crate::sections::{Section, SectionOption};
use std::fmt;

/// Structural failures in the template table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The grid has no rows or no columns.
    Empty,
    /// Row 0 of column 0 is empty, so the leading columns have no titled
    /// section to attach to.
    OrphanSubColumns,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Empty => write!(f, "template table has no cells"),
            TableError::OrphanSubColumns => write!(
                f,
                "first column has no section title; sub-option columns need a titled column to their left"
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// Parse a rectangular grid into the ordered section tree.
///
/// Sections appear in source column order, options in source row order,
/// folder children in sub-column order. Empty cells (including the `-`
/// placeholder) contribute nothing.
pub fn parse(grid: &Grid) -> Result<Vec<Section>, TableError> {
    if grid.rows() == 0 || grid.cols() == 0 {
        return Err(TableError::Empty);
    }
    if is_blank(grid.cell(0, 0)) {
        return Err(TableError::OrphanSubColumns);
    }

    let mut sections: Vec<Section> = Vec::new();
    // For the section currently being built: which option slot (if any)
    // each grid row maps to. Rows blank in the titled column get no slot,
    // so sub-column cells on those rows have no parent word and are ignored.
    let mut row_slots: Vec<Option<usize>> = Vec::new();

    for col in 0..grid.cols() {
        let header = grid.cell(0, col);
        if !is_blank(header) {
            row_slots = vec![None; grid.rows()];
            let mut options = Vec::new();
            for row in 1..grid.rows() {
                let word = grid.cell(row, col);
                if is_blank(word) {
                    continue;
                }
                row_slots[row] = Some(options.len());
                options.push(SectionOption::Plain {
                    word: word.trim().to_string(),
                });
            }
            sections.push(Section {
                title: header.trim().to_string(),
                column: col,
                options,
            });
        } else {
            // Sub-option column: attach non-empty cells to the row's option
            // in the current section, promoting Plain to Folder on first
            // attachment. Column 0 is titled, so a current section exists.
            let Some(section) = sections.last_mut() else {
                continue;
            };
            for row in 1..grid.rows() {
                let value = grid.cell(row, col);
                if is_blank(value) {
                    continue;
                }
                let Some(slot) = row_slots.get(row).copied().flatten() else {
                    continue;
                };
                let child = value.trim().to_string();
                let option = &mut section.options[slot];
                if let SectionOption::Plain { word } = option {
                    let word = std::mem::take(word);
                    *option = SectionOption::Folder {
                        word,
                        children: Vec::new(),
                    };
                }
                if let SectionOption::Folder { children, .. } = option {
                    children.push(child);
                }
            }
        }
    }

    Ok(sections)
}
