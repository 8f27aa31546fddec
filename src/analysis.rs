//! Block splitting and per-column distribution analysis
//!
//! Input lines are grouped into blocks separated by blank lines. Every line of a
//! block is split on whitespace, and the resulting columns are compared across the
//! block: a column holding more than one distinct value is reported as malformed.

use std::collections::HashSet;

/// Tokens of a single input line
pub type Line = Vec<String>;

/// Distribution of the values found at one column index of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnStats {
    /// Number of different values in the column
    pub distinct: usize,
    /// Width, in characters, of the longest value in the column
    pub width: usize,
}

/// Analysis result for one block of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockReport {
    pub lines: Vec<Line>,
    /// Ascending column indexes holding more than one distinct value
    pub malformed: Vec<usize>,
    /// Max width of each analysed column
    pub widths: Vec<usize>,
}

impl BlockReport {
    /// Build the report of a block of tokenized lines
    pub fn from_lines(lines: Vec<Line>) -> Self {
        let distribution = column_distribution(&lines);
        let malformed = distribution
            .iter()
            .enumerate()
            .filter(|(_, stats)| stats.distinct > 1)
            .map(|(index, _)| index)
            .collect();
        let widths = distribution.iter().map(|stats| stats.width).collect();

        Self {
            lines,
            malformed,
            widths,
        }
    }

    /// True when every column is uniform across the block
    pub fn is_ok(&self) -> bool {
        self.malformed.is_empty()
    }

    /// Number of analysed columns, bounded by the shortest line
    pub fn column_count(&self) -> usize {
        self.widths.len()
    }

    pub fn is_malformed(&self, index: usize) -> bool {
        self.malformed.binary_search(&index).is_ok()
    }
}

/// Split a line into its whitespace-separated tokens
pub fn tokenize(line: &str) -> Line {
    line.split_whitespace().map(str::to_string).collect()
}

/// Compute, for each column of the block, the number of distinct values and
/// the width of the longest one.
///
/// Columns are paired positionally across lines, so only the indexes present
/// in every line are analysed.
pub fn column_distribution(block: &[Line]) -> Vec<ColumnStats> {
    let columns = block.iter().map(Vec::len).min().unwrap_or(0);

    (0..columns)
        .map(|index| {
            let values: HashSet<&str> = block.iter().map(|line| line[index].as_str()).collect();
            let width = block
                .iter()
                .map(|line| line[index].chars().count())
                .max()
                .unwrap_or(0);
            ColumnStats {
                distinct: values.len(),
                width,
            }
        })
        .collect()
}

/// Lazy sequence of block reports over a source of lines
#[derive(Debug, Clone)]
pub struct DetectMalformed<I> {
    lines: I,
}

impl<I, S> Iterator for DetectMalformed<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = BlockReport;

    fn next(&mut self) -> Option<BlockReport> {
        let mut block = Vec::new();

        for line in self.lines.by_ref() {
            let line = line.as_ref().trim();
            if line.is_empty() {
                if block.is_empty() {
                    continue;
                }
                return Some(BlockReport::from_lines(block));
            }
            block.push(tokenize(line));
        }

        if block.is_empty() {
            None
        } else {
            Some(BlockReport::from_lines(block))
        }
    }
}

/// Analyse already split lines, yielding one report per non-empty block
pub fn detect_malformed<I, S>(lines: I) -> DetectMalformed<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DetectMalformed {
        lines: lines.into_iter(),
    }
}

/// Analyse raw text, splitting it on line endings first.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn detect_malformed_text(text: &str) -> DetectMalformed<impl Iterator<Item = &str>> {
    detect_malformed(text.lines().flat_map(|line| line.split('\r')))
}
