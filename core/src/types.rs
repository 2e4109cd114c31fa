//! Record and statement types.
//!
//! A [`RegionRecord`] is the parsed form of one input line. Each record is
//! turned into exactly one [`SqlStatement`] by
//! [`format_insert`](crate::format_insert).

use std::fmt;

/// Country every generated province row belongs to.
pub const COUNTRY_ID: u32 = 3;

/// Input file read when no path is supplied.
pub const DEFAULT_INPUT_PATH: &str = "regions.txt";

/// Output file written when no path is supplied.
pub const DEFAULT_OUTPUT_PATH: &str = "inserts.sql";

/// Maximum number of description words taken from a line.
pub const MAX_DESCRIPTION_WORDS: usize = 2;

/// One region parsed from an input line.
///
/// # Examples
///
/// ```
/// use region_sql_core::RegionRecord;
///
/// let record = RegionRecord::new("02").with_description("British Columbia");
/// assert_eq!(record.code, "02");
/// assert_eq!(record.description_or_empty(), "British Columbia");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRecord {
    /// Short identifier, the first token on the line.
    pub code: String,
    /// Human-readable name; `None` when the line held only a code.
    pub description: Option<String>,
}

impl RegionRecord {
    /// Creates a record with no description.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the description, or `""` when absent.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// A single formatted `INSERT` statement, without a line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement(String);

impl SqlStatement {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    /// Returns the statement text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SqlStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
