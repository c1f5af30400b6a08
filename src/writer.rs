/*!
 * Plain-text report writer for InspectFS
 *
 * Produces the fixed report layout: the loaded-pattern preamble, the
 * directory tree, then one labeled content block per non-ignored file.
 */

use std::io::{self, Write};

use crate::config;
use crate::scanner::Inspector;
use crate::types::{FileContent, FileRecord};

/// Column width file contents are wrapped to for readability.
const WRAP_WIDTH: usize = 80;

/// Writer for the inspection report
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    /// Create a report writer over any line-oriented sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the complete report: patterns, tree, then file contents.
    ///
    /// Output is streamed; each file is read and written before the next
    /// is opened.
    pub fn write_report(&mut self, inspector: &Inspector) -> io::Result<()> {
        self.write_patterns(inspector)?;

        writeln!(self.out, "Directory Tree for: {}", inspector.root().display())?;
        writeln!(self.out)?;
        inspector.render_tree(&mut self.out)?;

        writeln!(self.out, "\n\n=== Files and Their Contents ===\n")?;
        for record in inspector.files() {
            self.write_file_record(&record)?;
        }

        Ok(())
    }

    /// List the loaded ignore patterns, if any.
    fn write_patterns(&mut self, inspector: &Inspector) -> io::Result<()> {
        let patterns = inspector.patterns();
        if patterns.is_empty() {
            return Ok(());
        }

        let ignore_file = config::ignore_file_path(inspector.root());
        writeln!(
            self.out,
            "Loaded ignore patterns from {}:",
            ignore_file.display()
        )?;
        for pattern in patterns.iter() {
            writeln!(self.out, "  - {}", pattern.raw())?;
        }
        writeln!(self.out, "\n")?;
        Ok(())
    }

    /// Write one file's labeled block followed by a separator rule.
    fn write_file_record(&mut self, record: &FileRecord) -> io::Result<()> {
        writeln!(self.out, "Filename: {}", record.name)?;
        writeln!(self.out, "Filepath: {}", record.path.display())?;
        match &record.content {
            FileContent::Text(text) => {
                writeln!(self.out, "Content:")?;
                self.write_wrapped(text)?;
            }
            FileContent::Unreadable(reason) => {
                writeln!(self.out, "Content: [{}]", reason)?;
            }
        }
        writeln!(self.out, "\n{}\n", "-".repeat(WRAP_WIDTH))?;
        Ok(())
    }

    /// Write text wrapped to the report column width, one input line at a
    /// time so the author's line breaks survive.
    fn write_wrapped(&mut self, text: &str) -> io::Result<()> {
        for line in text.lines() {
            writeln!(self.out, "{}", textwrap::fill(line, WRAP_WIDTH))?;
        }
        Ok(())
    }

    /// Consume the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
