//! Command-line interface for line-comparer

use clap::Parser;
use std::path::PathBuf;

use crate::commands::CompareOptions;

#[derive(Parser, Debug)]
#[command(name = "line-comparer")]
#[command(about = "Compare lines of blank-line separated blocks and highlight the columns that differ")]
#[command(version)]
pub struct Cli {
    /// File containing the lines to compare
    #[arg(value_parser = existing_file)]
    pub infile: PathBuf,

    /// Do not print colors
    #[arg(long)]
    pub no_colors: bool,
}

impl Cli {
    /// Runtime options derived from the parsed arguments
    pub fn options(&self) -> CompareOptions {
        CompareOptions {
            colors: !self.no_colors,
        }
    }
}

/// Validate that the given path exists
fn existing_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if !path.exists() {
        return Err(format!("file {} doesn't exist", s));
    }
    Ok(path)
}
