//! Rectangular cell grid
//!
//! The grid is the raw material the parser works on: every cell is a string,
//! every row has the same number of columns. CSV rows of uneven length are
//! padded with empty cells on construction so the rest of the crate never
//! has to deal with ragged data.

/// A cell counts as empty when it is blank or holds the `-` placeholder
/// that templates use for "no value".
pub fn is_blank(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || trimmed == "-"
}

/// Rectangular grid of string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<String>>,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows, padding short rows so the result is
    /// rectangular. An empty input produces a grid with zero rows and
    /// zero columns.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let cells = rows
            .into_iter()
            .map(|mut row| {
                row.resize(cols, String::new());
                row
            })
            .collect();
        Grid { cells, cols }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell content at (row, col). Out-of-range positions read as empty,
    /// which keeps callers total over the grid.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Overwrite a cell. Rows and columns are grown as needed so the grid
    /// stays rectangular after the write.
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) {
        if col >= self.cols {
            self.cols = col + 1;
            for r in &mut self.cells {
                r.resize(self.cols, String::new());
            }
        }
        while self.cells.len() <= row {
            self.cells.push(vec![String::new(); self.cols]);
        }
        self.cells[row][col] = value.into();
    }

    /// Iterate over rows, for serialization back to CSV.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_cells() {
        assert!(is_blank(""));
        assert!(is_blank("  "));
        assert!(is_blank("-"));
        assert!(is_blank(" - "));
        assert!(!is_blank("2.4"));
        assert!(!is_blank("--"));
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let grid = Grid::from_rows(vec![
            vec!["a".into(), "b".into(), "c".into()],
            vec!["d".into()],
        ]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cell(1, 0), "d");
        assert_eq!(grid.cell(1, 2), "");
    }

    #[test]
    fn test_empty_input() {
        let grid = Grid::from_rows(Vec::new());
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
        assert_eq!(grid.cell(5, 5), "");
    }

    #[test]
    fn test_set_cell_grows_grid() {
        let mut grid = Grid::from_rows(vec![vec!["a".into()]]);
        grid.set_cell(2, 1, "x");
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.cell(2, 1), "x");
        assert_eq!(grid.cell(1, 0), "");
    }
}
