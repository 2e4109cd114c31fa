//! Region listing to SQL insert script generation.
//!
//! Reads a plain-text file with one region per line (a code followed by an
//! optional one- or two-word description) and writes one `INSERT` statement
//! per region into the `[Province]` table:
//!
//! - [`parse_line`] / [`read_records`] — whitespace tokenizing into
//!   [`RegionRecord`]s.
//! - [`format_insert`] — the single place where SQL text is built.
//! - [`OutputBuffer`] — ordered, in-memory statement accumulation.
//! - [`generate`] — read, format, and write in one call.
//!
//! Values are not escaped. A description containing `'` produces a script
//! with that quote embedded as-is.
//!
//! # Example
//!
//! ```
//! use region_sql_core::*;
//!
//! let parsed = read_records("01 Ontario\n02 British Columbia\n".as_bytes()).unwrap();
//! let buffer = render(&parsed.records);
//!
//! assert_eq!(buffer.len(), 2);
//! assert_eq!(
//!     buffer.iter().nth(1).unwrap().as_str(),
//!     "INSERT INTO [Province]( [CountryId], [Code], [Description] ) VALUES (3, '02', 'British Columbia');"
//! );
//! ```

mod buffer;
mod config;
mod error;
mod format;
mod generate;
mod parse;
mod types;

pub use buffer::{OutputBuffer, render};
pub use config::GeneratorConfig;
pub use error::{ConfigError, GenerateError, Result};
pub use format::format_insert;
pub use generate::{GenerateSummary, generate, generate_with_config, load_config};
pub use parse::{ParsedInput, parse_line, read_records};
pub use types::*;
