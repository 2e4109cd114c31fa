//! Error types for region script generation.
//!
//! Only two things can go wrong during a run: the input cannot be read, or
//! the output cannot be written. Malformed rows are not errors; they flow
//! through to the generated script unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating an insert script.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The input file is missing or could not be read.
    #[error("cannot read input '{}': {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created, truncated, or written.
    #[error("cannot write output '{}': {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generator config file could not be loaded.
    #[error("invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// Errors raised while loading or saving a [`GeneratorConfig`](crate::GeneratorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`GenerateError`].
pub type Result<T> = std::result::Result<T, GenerateError>;
