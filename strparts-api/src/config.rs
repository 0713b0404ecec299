//! Chunking configuration

use crate::error::{ApiError, Result};
use serde::Deserialize;
use std::path::Path;
use strparts_core::DelimiterMode;

/// Default configuration constants
pub mod defaults {
    /// Default maximum chunk length in characters
    pub const MAX_LEN: i64 = 80;
}

/// How input text is cut into chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkPolicy {
    /// Fixed-length slices
    Fixed {
        /// Length of each chunk in characters
        max_len: i64,
    },
    /// Cut on a delimiter, and wherever a run exceeds `max_len`
    Delimited {
        /// Maximum content chunk length in characters
        max_len: i64,
        /// Delimiter character
        delimiter: char,
        /// Whether delimiters are emitted as their own chunks
        mode: DelimiterMode,
    },
}

impl ChunkPolicy {
    /// Maximum chunk length in characters
    pub fn max_len(&self) -> i64 {
        match *self {
            ChunkPolicy::Fixed { max_len } | ChunkPolicy::Delimited { max_len, .. } => max_len,
        }
    }

    /// Short name used in logs and output metadata
    pub fn name(&self) -> &'static str {
        match self {
            ChunkPolicy::Fixed { .. } => "fixed",
            ChunkPolicy::Delimited {
                mode: DelimiterMode::Drop,
                ..
            } => "delimited",
            ChunkPolicy::Delimited {
                mode: DelimiterMode::Retain,
                ..
            } => "delimited-retain",
        }
    }
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        ChunkPolicy::Fixed {
            max_len: defaults::MAX_LEN,
        }
    }
}

/// Chunking configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) policy: ChunkPolicy,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The chunk policy this configuration selects
    pub fn policy(&self) -> ChunkPolicy {
        self.policy
    }

    /// Parse a configuration from TOML
    ///
    /// ```toml
    /// max_len = 16
    /// delimiter = ","
    /// retain_delimiter = true
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(s)?;
        file.into_config()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading chunk configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let max_len = self.policy.max_len();
        if max_len <= 0 {
            return Err(ApiError::Config(format!(
                "max_len must be greater than 0, got {max_len}"
            )));
        }
        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_len: Option<i64>,
    delimiter: Option<char>,
    retain_delimiter: bool,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum chunk length in characters
    pub fn max_len(mut self, max_len: i64) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Cut on `delimiter` (None = length-only chunking)
    pub fn delimiter(mut self, delimiter: impl Into<Option<char>>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Emit delimiters as their own chunks
    pub fn retain_delimiter(mut self, retain: bool) -> Self {
        self.retain_delimiter = retain;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let max_len = self.max_len.unwrap_or(defaults::MAX_LEN);

        let policy = match self.delimiter {
            Some(delimiter) => ChunkPolicy::Delimited {
                max_len,
                delimiter,
                mode: self.retain_delimiter.into(),
            },
            None if self.retain_delimiter => {
                return Err(ApiError::Config(
                    "retain_delimiter requires a delimiter".into(),
                ));
            }
            None => ChunkPolicy::Fixed { max_len },
        };

        let config = Config { policy };
        config.validate()?;
        Ok(config)
    }
}

/// On-disk configuration layout
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Maximum chunk length in characters
    pub max_len: Option<i64>,

    /// Delimiter, a single character
    pub delimiter: Option<String>,

    /// Emit delimiters as their own chunks
    pub retain_delimiter: bool,
}

impl FileConfig {
    /// Validate and convert into a [`Config`]
    pub fn into_config(self) -> Result<Config> {
        let delimiter = match self.delimiter.as_deref() {
            None => None,
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => {
                        return Err(ApiError::Config(format!(
                            "delimiter must be exactly one character, got {s:?}"
                        )));
                    }
                }
            }
        };

        let mut builder = Config::builder()
            .delimiter(delimiter)
            .retain_delimiter(self.retain_delimiter);
        if let Some(max_len) = self.max_len {
            builder = builder.max_len(max_len);
        }
        builder.build()
    }
}
