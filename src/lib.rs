//! # line-comparer
//!
//! Compares whitespace-separated lines grouped in blank-line separated blocks,
//! and reports the columns whose values are not the same on every line of a block.

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use analysis::{detect_malformed, detect_malformed_text, BlockReport, ColumnStats};
pub use error::{LineComparerError, Result};
pub use output::{show_malformed, Highlighter};
