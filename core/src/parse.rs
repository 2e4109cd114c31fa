//! Line parsing for region listings.
//!
//! Each non-blank line is split on ASCII whitespace. The first token is the code,
//! the next one or two tokens form the description, and anything after that
//! is dropped.

use std::io::BufRead;

use tracing::{debug, warn};

use crate::types::{MAX_DESCRIPTION_WORDS, RegionRecord};

/// Records read from an input source, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    pub records: Vec<RegionRecord>,
    /// Lines that were empty or held only whitespace.
    pub blank_lines: usize,
}

/// Parses one input line into a record.
///
/// Returns `None` for blank or whitespace-only lines.
///
/// # Examples
///
/// ```
/// use region_sql_core::parse_line;
///
/// let record = parse_line("02 British Columbia").unwrap();
/// assert_eq!(record.code, "02");
/// assert_eq!(record.description.as_deref(), Some("British Columbia"));
///
/// assert!(parse_line("   ").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<RegionRecord> {
    let mut tokens = line.split_ascii_whitespace();
    let code = tokens.next()?;
    let words: Vec<&str> = tokens.take(MAX_DESCRIPTION_WORDS).collect();

    let mut record = RegionRecord::new(code);
    if !words.is_empty() {
        record.description = Some(words.join(" "));
    }
    Some(record)
}

/// Reads every line of `reader` and parses it.
///
/// # Errors
///
/// Returns the underlying I/O error if a line cannot be read (including
/// invalid UTF-8).
pub fn read_records<R: BufRead>(reader: R) -> std::io::Result<ParsedInput> {
    let mut parsed = ParsedInput::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        let Some(record) = parse_line(&line) else {
            parsed.blank_lines += 1;
            continue;
        };

        let token_count = line.split_ascii_whitespace().count();
        if token_count > MAX_DESCRIPTION_WORDS + 1 {
            warn!(
                line = line_no,
                tokens = token_count,
                "ignoring tokens beyond a two-word description"
            );
        }
        debug!(line = line_no, code = %record.code, "parsed region record");
        parsed.records.push(record);
    }

    Ok(parsed)
}
