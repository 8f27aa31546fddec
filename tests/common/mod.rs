//! Common test utilities and helpers

use line_comparer::commands::{compare_file, CompareOptions};
use line_comparer::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture manager for creating temporary input files
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Get the root path of the test fixture
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create an input file with raw string content
    pub fn create_input(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Create an input file from blocks of rows, separated by a blank line
    pub fn create_blocks(&self, name: &str, blocks: &[Vec<&str>]) -> Result<PathBuf> {
        let content = blocks
            .iter()
            .map(|rows| rows.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n");
        self.create_input(name, &content)
    }

    /// Compare a file without colors and return what was written
    pub fn render_plain(&self, path: &Path) -> Result<(String, usize, usize)> {
        let mut out = Vec::new();
        let (blocks, bad_blocks) = compare_file(&CompareOptions { colors: false }, path, &mut out)?;
        let text = String::from_utf8(out).expect("output should be valid UTF-8");
        Ok((text, blocks, bad_blocks))
    }
}

/// Sample inputs for testing
pub mod sample_data {
    pub fn mixed_blocks() -> Vec<Vec<&'static str>> {
        vec![
            vec!["1 13 78", "1 78 13"],
            vec!["89 34 54", "89 34 54"],
        ]
    }

    pub fn inventory_blocks() -> Vec<Vec<&'static str>> {
        vec![
            vec!["apple  fruit  red", "apple  fruit  red", "apple  fruit  green"],
            vec!["carrot vegetable orange", "carrot vegetable orange"],
            vec!["kiwi fruit brown"],
        ]
    }
}
