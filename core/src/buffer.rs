//! In-memory accumulation of generated statements.

use std::io::Write;

use crate::format::format_insert;
use crate::types::{RegionRecord, SqlStatement};

/// Ordered statements produced during one run.
///
/// Rendered as each statement followed by `\n`.
///
/// # Examples
///
/// ```
/// use region_sql_core::{OutputBuffer, RegionRecord, format_insert};
///
/// let mut buffer = OutputBuffer::new();
/// buffer.push(format_insert(&RegionRecord::new("01").with_description("Ontario")));
/// assert_eq!(buffer.len(), 1);
/// assert!(buffer.render().ends_with("'Ontario');\n"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    statements: Vec<SqlStatement>,
}

impl OutputBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a statement.
    pub fn push(&mut self, statement: SqlStatement) {
        self.statements.push(statement);
    }

    /// Number of statements held.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns `true` if no statement has been pushed.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterates statements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SqlStatement> {
        self.statements.iter()
    }

    /// Renders the full script text.
    pub fn render(&self) -> String {
        let capacity = self.statements.iter().map(|s| s.as_str().len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for statement in &self.statements {
            out.push_str(statement.as_str());
            out.push('\n');
        }
        out
    }

    /// Writes the rendered script to `writer` and returns the byte count.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<u64> {
        let mut written = 0u64;
        for statement in &self.statements {
            writer.write_all(statement.as_str().as_bytes())?;
            writer.write_all(b"\n")?;
            written += statement.as_str().len() as u64 + 1;
        }
        writer.flush()?;
        Ok(written)
    }
}

/// Formats every record into a fresh buffer, preserving order.
pub fn render(records: &[RegionRecord]) -> OutputBuffer {
    let mut buffer = OutputBuffer::new();
    for record in records {
        buffer.push(format_insert(record));
    }
    buffer
}
