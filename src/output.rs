//! Output formatting utilities

use crate::analysis::BlockReport;
use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};

const FAILURE_MARKER: &str = "BAD!";
const SUCCESS_MARKER: &str = "OK!";

/// Styling applied to malformed values and block status markers
pub trait Highlighter {
    /// Style of malformed values and of the failure marker
    fn failure(&self, text: &str) -> String;

    /// Style of the success marker
    fn success(&self, text: &str) -> String;
}

/// Highlights with ANSI escape codes: red for failures, green for successes
#[derive(Debug)]
pub struct AnsiHighlighter(());

impl AnsiHighlighter {
    /// Enable terminal colors, or `None` if the terminal cannot display them
    pub fn new() -> Option<Self> {
        #[cfg(windows)]
        if colored::control::set_virtual_terminal(true).is_err() {
            return None;
        }

        // Colors were explicitly requested, whatever the output stream is
        colored::control::set_override(true);
        Some(Self(()))
    }
}

impl Highlighter for AnsiHighlighter {
    fn failure(&self, text: &str) -> String {
        text.red().to_string()
    }

    fn success(&self, text: &str) -> String {
        text.green().to_string()
    }
}

/// Leaves text untouched
#[derive(Debug, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn failure(&self, text: &str) -> String {
        text.to_string()
    }

    fn success(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Select the highlighter for the requested color mode
pub fn highlighter(colors: bool) -> Box<dyn Highlighter> {
    if !colors {
        return Box::new(PlainHighlighter);
    }

    match AnsiHighlighter::new() {
        Some(ansi) => Box::new(ansi),
        None => {
            log::warn!("Terminal colors are unavailable, printing plain text");
            Box::new(PlainHighlighter)
        }
    }
}

/// Format one line of a block, right-justifying each value to its column width.
///
/// In a malformed block only the analysed columns are printed: values past the
/// shortest line have nothing to be compared against.
pub fn format_line(line: &[String], report: &BlockReport, highlighter: &dyn Highlighter) -> String {
    let shown = if report.is_ok() { line.len() } else { report.column_count() };

    line.iter()
        .take(shown)
        .enumerate()
        .map(|(index, value)| match report.widths.get(index) {
            Some(&width) => {
                let justified = format!("{:>width$}", value, width = width);
                if report.is_malformed(index) {
                    highlighter.failure(&justified)
                } else {
                    justified
                }
            }
            // Extra values of a uniform block are printed as they are
            None => value.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write one block followed by its status marker and a separating blank line
pub fn render_report<W: Write>(
    out: &mut W,
    report: &BlockReport,
    highlighter: &dyn Highlighter,
) -> io::Result<()> {
    for line in &report.lines {
        writeln!(out, "{}", format_line(line, report, highlighter))?;
    }

    if report.is_ok() {
        writeln!(out, "{}", highlighter.success(SUCCESS_MARKER))?;
    } else {
        writeln!(out, "{}", highlighter.failure(FAILURE_MARKER))?;
    }
    writeln!(out)
}

/// Write every report, returning how many blocks were rendered and how many were malformed
pub fn render_reports<W, I>(out: &mut W, reports: I, highlighter: &dyn Highlighter) -> io::Result<(usize, usize)>
where
    W: Write,
    I: IntoIterator<Item = BlockReport>,
{
    let mut blocks = 0;
    let mut bad_blocks = 0;

    for report in reports {
        log::debug!(
            "Block {}: {} lines, {} columns, malformed columns {:?}",
            blocks + 1,
            report.lines.len(),
            report.column_count(),
            report.malformed
        );
        render_report(out, &report, highlighter)?;

        blocks += 1;
        if !report.is_ok() {
            bad_blocks += 1;
        }
    }

    Ok((blocks, bad_blocks))
}

/// Print the given reports on standard output
pub fn show_malformed<I>(reports: I, colors: bool) -> Result<()>
where
    I: IntoIterator<Item = BlockReport>,
{
    let highlighter = highlighter(colors);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let (blocks, bad_blocks) = render_reports(&mut out, reports, highlighter.as_ref())?;
    out.flush()?;

    log::info!("Compared {} blocks, {} malformed", blocks, bad_blocks);
    Ok(())
}
