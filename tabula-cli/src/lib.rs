//! Command-line front end for the tabula engine.
//!
//! Reads a JSON table document, replays its state onto a
//! [`tabula::TableModel`], and prints the resulting render plan.

pub mod document;
pub mod error;
pub mod logging;

pub use document::{render, TableDocument};
pub use error::CliError;
