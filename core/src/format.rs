//! Statement formatting.
//!
//! All SQL text is produced here. Values are interpolated verbatim: a quote
//! inside a code or description ends up in the generated script as-is.

use crate::types::{COUNTRY_ID, RegionRecord, SqlStatement};

/// Formats the `INSERT` statement for one record.
///
/// # Examples
///
/// ```
/// use region_sql_core::{RegionRecord, format_insert};
///
/// let stmt = format_insert(&RegionRecord::new("01").with_description("Ontario"));
/// assert_eq!(
///     stmt.as_str(),
///     "INSERT INTO [Province]( [CountryId], [Code], [Description] ) VALUES (3, '01', 'Ontario');"
/// );
/// ```
pub fn format_insert(record: &RegionRecord) -> SqlStatement {
    SqlStatement::new(format!(
        "INSERT INTO [Province]( [CountryId], [Code], [Description] ) VALUES ({COUNTRY_ID}, '{code}', '{description}');",
        code = record.code,
        description = record.description_or_empty(),
    ))
}
