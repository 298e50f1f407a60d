//! Template loading utilities
//!
//! `TemplateLoader` reads a CSV template from a file or a string, exposes
//! the normalized [`Grid`], and offers a `parse()` shortcut straight to the
//! section tree. It also carries the write-back path for the "save word"
//! feature: a typed word can be stored into a section's column so it shows
//! up as a regular option on the next load.

use crate::grid::{is_blank, Grid};
use crate::parse::{parse, TableError};
use crate::sections::Section;
use std::fmt;
use std::path::{Path, PathBuf};

/// Errors on the template loading/saving path.
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading or writing the template file.
    Io(String),
    /// CSV-level read/write error.
    Csv(String),
    /// The table failed its structural invariants.
    Table(TableError),
    /// A write-back was requested for a template not loaded from a file.
    NoBackingFile,
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Csv(msg) => write!(f, "CSV error: {}", msg),
            LoaderError::Table(err) => write!(f, "Malformed table: {}", err),
            LoaderError::NoBackingFile => {
                write!(f, "template has no backing file to save into")
            }
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<TableError> for LoaderError {
    fn from(err: TableError) -> Self {
        LoaderError::Table(err)
    }
}

impl From<csv::Error> for LoaderError {
    fn from(err: csv::Error) -> Self {
        LoaderError::Csv(err.to_string())
    }
}

/// Template loader with parse shortcuts and write-back.
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    grid: Grid,
    path: Option<PathBuf>,
}

impl TemplateLoader {
    /// Load a template from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path.as_ref())
            .map_err(|err| LoaderError::Io(err.to_string()))?;
        let grid = read_grid(reader)?;
        Ok(TemplateLoader {
            grid,
            path: Some(path.as_ref().to_path_buf()),
        })
    }

    /// Load a template from CSV text (tests, embedding).
    pub fn from_string(source: &str) -> Result<Self, LoaderError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source.as_bytes());
        let grid = read_grid(reader)?;
        Ok(TemplateLoader { grid, path: None })
    }

    /// The normalized cell grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Path this template was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Parse the grid into the section tree.
    pub fn parse(&self) -> Result<Vec<Section>, LoaderError> {
        Ok(parse(&self.grid)?)
    }

    /// Store a typed word into the column of the given section so it
    /// becomes a selectable option. The word lands in the first empty cell
    /// of that column (a fresh row if the column is full) and the whole
    /// grid is rewritten to the backing file.
    pub fn save_word(&mut self, section: &Section, word: &str) -> Result<(), LoaderError> {
        let Some(path) = self.path.clone() else {
            return Err(LoaderError::NoBackingFile);
        };
        let col = section.column;
        let mut row = 1;
        while row < self.grid.rows() && !is_blank(self.grid.cell(row, col)) {
            row += 1;
        }
        self.grid.set_cell(row, col, word.trim());
        self.write_to(&path)
    }

    fn write_to(&self, path: &Path) -> Result<(), LoaderError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|err| LoaderError::Io(err.to_string()))?;
        for row in self.grid.iter_rows() {
            writer.write_record(row)?;
        }
        writer
            .flush()
            .map_err(|err| LoaderError::Io(err.to_string()))?;
        Ok(())
    }
}

fn read_grid<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Grid, LoaderError> {
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Grid::from_rows(rows))
}
