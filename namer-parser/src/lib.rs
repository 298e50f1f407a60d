//! Core library for the namer title builder.
//!
//! A namer template is a rectangular CSV grid: the first row of each titled
//! column names a section of the final title, the remaining rows of that
//! column are the selectable words, and untitled columns to the right group
//! extra words into folders under the titled column's rows.
//!
//! The crate has five parts:
//! - [`grid`] - the rectangular cell grid read from the template
//! - [`sections`] - the section/option tree the grid parses into
//! - [`parse`] - the column scan that builds that tree
//! - [`session`] - the state machine that turns selections into a title
//! - [`loader`] - template loading and write-back around the `csv` crate

pub mod grid;
pub mod loader;
pub mod parse;
pub mod sections;
pub mod session;

pub use grid::Grid;
pub use loader::{LoaderError, TemplateLoader};
pub use parse::{parse, TableError};
pub use sections::{OptionDescriptor, Section, SectionOption};
pub use session::{Outcome, SessionEvent, TitleSession, TitleState};
