//! End-to-end script generation.
//!
//! The input is read and parsed in full before the output is opened, so a
//! failed read leaves any existing output file untouched. The output is then
//! written once.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::buffer::render;
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::parse::read_records;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Statements written, one per non-blank input line.
    pub statements: usize,
    pub skipped_blank_lines: usize,
    pub bytes_written: u64,
}

/// Reads `input`, formats one `INSERT` per non-blank line, and writes the
/// script to `output`, replacing any previous contents.
///
/// # Errors
///
/// Returns [`GenerateError::InputNotFound`] if `input` cannot be opened or
/// read, and [`GenerateError::OutputWriteFailure`] if `output` cannot be
/// created or written.
///
/// # Examples
///
/// ```no_run
/// let summary = region_sql_core::generate("regions.txt", "inserts.sql").unwrap();
/// println!("wrote {} statements", summary.statements);
/// ```
pub fn generate(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<GenerateSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let input_err = |source| GenerateError::InputNotFound {
        path: input.to_path_buf(),
        source,
    };
    let parsed = {
        let file = File::open(input).map_err(input_err)?;
        read_records(BufReader::new(file)).map_err(input_err)?
    };
    debug!(
        input = %input.display(),
        records = parsed.records.len(),
        blank_lines = parsed.blank_lines,
        "read region listing"
    );

    let buffer = render(&parsed.records);

    let output_err = |source| GenerateError::OutputWriteFailure {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output).map_err(output_err)?;
    let bytes_written = buffer.write_to(BufWriter::new(file)).map_err(output_err)?;

    let summary = GenerateSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        statements: buffer.len(),
        skipped_blank_lines: parsed.blank_lines,
        bytes_written,
    };
    info!(
        output = %output.display(),
        statements = summary.statements,
        bytes = summary.bytes_written,
        "wrote insert script"
    );
    Ok(summary)
}

/// Runs [`generate`] with the paths from `config`.
pub fn generate_with_config(config: &GeneratorConfig) -> Result<GenerateSummary> {
    generate(&config.input, &config.output)
}

/// Loads a [`GeneratorConfig`], reporting failures as [`GenerateError::Config`].
pub fn load_config(path: impl AsRef<Path>) -> Result<GeneratorConfig> {
    let path = path.as_ref();
    GeneratorConfig::load(path).map_err(|source| GenerateError::Config {
        path: path.to_path_buf(),
        source,
    })
}
