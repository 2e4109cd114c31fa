//! File-based generator configuration.
//!
//! Only the input and output paths can be configured. Both fall back to
//! [`DEFAULT_INPUT_PATH`] and [`DEFAULT_OUTPUT_PATH`] when omitted.
//!
//! # Example YAML
//!
//! ```yaml
//! input: data/regions.txt
//! output: build/inserts.sql
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

/// Input and output locations for a generator run.
///
/// # Examples
///
/// ```
/// use region_sql_core::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.input.to_str(), Some("regions.txt"));
/// assert_eq!(config.output.to_str(), Some("inserts.sql"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Region listing to read.
    pub input: PathBuf,
    /// Script file to write.
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl GeneratorConfig {
    /// Creates a config for explicit paths.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be written, or
    /// [`ConfigError::Yaml`] if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}
