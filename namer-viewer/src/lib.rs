//! Terminal shell for the namer title builder.
//!
//! The shell follows a strict model/render split: `namer-parser` owns the
//! session state machine, [`model`] projects it into flat rows for display,
//! [`widgets`] render those rows and translate keys into events, and
//! [`app`] wires the events back into the session. [`runner`] owns the
//! terminal lifecycle and is the embedding entry point.

pub mod app;
pub mod model;
pub mod runner;
pub mod ui;
pub mod widgets;

pub use runner::run_title_builder;
