//! Command implementation for line-comparer CLI

use crate::analysis::detect_malformed_text;
use crate::error::{LineComparerError, Result};
use crate::output::{highlighter, render_reports, show_malformed};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Runtime options of a comparison run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Highlight malformed columns and status markers with terminal colors
    pub colors: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// Read the whole input file
fn read_input(infile: &Path) -> Result<String> {
    if !infile.exists() {
        return Err(LineComparerError::invalid_input(format!(
            "Input file does not exist: {}",
            infile.display()
        )));
    }

    let text = fs::read_to_string(infile)?;
    log::info!("Read {} bytes from {}", text.len(), infile.display());
    Ok(text)
}

/// Compare the blocks of the given file and print them on standard output
pub fn execute(options: &CompareOptions, infile: &Path) -> Result<()> {
    let text = read_input(infile)?;
    show_malformed(detect_malformed_text(&text), options.colors)
}

/// Compare the blocks of the given file and write them to `out`.
///
/// Returns the number of blocks rendered and how many of them were malformed.
pub fn compare_file<W: Write>(options: &CompareOptions, infile: &Path, out: &mut W) -> Result<(usize, usize)> {
    let text = read_input(infile)?;
    let highlighter = highlighter(options.colors);
    Ok(render_reports(out, detect_malformed_text(&text), highlighter.as_ref())?)
}
