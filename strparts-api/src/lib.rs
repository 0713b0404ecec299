//! Public API for strparts string chunking
//!
//! This crate wraps the core scans behind a configured [`Chunker`] and
//! adds offset-carrying output types and TOML configuration.
//!
//! ```rust
//! use strparts_api::{Chunker, Config};
//!
//! let config = Config::builder().max_len(4).delimiter('-').build().unwrap();
//! let chunker = Chunker::with_config(config);
//!
//! assert_eq!(chunker.split("ab-cdefg-hij").unwrap(), ["ab", "cdef", "g", "hij"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use strparts_core::{delimited_chunks, fixed_chunks};

// Re-export key types
pub use config::{ChunkPolicy, Config, ConfigBuilder, FileConfig};
pub use dto::{Chunk, ChunkKind, Metadata, Output};
pub use error::{ApiError, Result};
pub use strparts_core::{CoreError, DelimiterMode, ErrorKind};

/// Splits text according to a [`Config`]
///
/// Holds no state besides its configuration, so one instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Chunker {
    config: Config,
}

impl Chunker {
    /// Create a chunker with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chunker with a custom configuration
    pub fn with_config(config: Config) -> Self {
        log::debug!("Chunker configured with {:?}", config.policy());
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Split `text` into borrowed chunks
    pub fn split<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let chunks = match self.config.policy {
            ChunkPolicy::Fixed { max_len } => fixed_chunks(text, max_len)?,
            ChunkPolicy::Delimited {
                max_len,
                delimiter,
                mode,
            } => delimited_chunks(text, delimiter, max_len, mode)?,
        };

        log::trace!(
            "Split {} bytes into {} chunks ({})",
            text.len(),
            chunks.len(),
            self.config.policy.name()
        );
        Ok(chunks)
    }

    /// Split `text` into owned chunks with offsets and run metadata
    pub fn process(&self, text: &str) -> Result<Output> {
        let parts = self.split(text)?;
        // Delimiters dropped between parts, and the one emitted in retain mode
        let (dropped, retained) = match self.config.policy {
            ChunkPolicy::Fixed { .. } => (None, None),
            ChunkPolicy::Delimited {
                delimiter,
                mode: DelimiterMode::Drop,
                ..
            } => (Some(delimiter), None),
            ChunkPolicy::Delimited {
                delimiter,
                mode: DelimiterMode::Retain,
                ..
            } => (None, Some(delimiter)),
        };

        let mut chunks = Vec::with_capacity(parts.len());
        let mut byte_offset = 0;
        let mut char_offset = 0;

        for part in parts {
            if let Some(del) = dropped {
                // Content never starts with the delimiter, so skip the gap
                while text[byte_offset..].starts_with(del) {
                    byte_offset += del.len_utf8();
                    char_offset += 1;
                }
            }

            let mut chars = part.chars();
            let kind = match (chars.next(), chars.next(), retained) {
                (Some(c), None, Some(d)) if c == d => ChunkKind::Delimiter,
                _ => ChunkKind::Content,
            };

            chunks.push(Chunk {
                text: part.to_string(),
                char_offset,
                byte_offset,
                kind,
            });

            byte_offset += part.len();
            char_offset += part.chars().count();
        }

        let metadata = Metadata {
            total_bytes: text.len(),
            total_chars: text.chars().count(),
            chunk_count: chunks.len(),
            policy: self.config.policy.name().to_string(),
        };

        Ok(Output { chunks, metadata })
    }
}

// Convenience functions

/// Split text into fixed-length chunks
pub fn split_text(text: &str, max_len: i64) -> Result<Vec<&str>> {
    Ok(fixed_chunks(text, max_len)?)
}

/// Split text with a configuration loaded from a TOML file
pub fn split_with_config_file<'a>(
    text: &'a str,
    path: impl AsRef<std::path::Path>,
) -> Result<Vec<&'a str>> {
    let chunker = Chunker::with_config(Config::from_file(path)?);
    chunker.split(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chunker_is_fixed() {
        let chunker = Chunker::new();
        let text = "x".repeat(170);
        let chunks = chunker.split(&text).unwrap();
        assert_eq!(chunks.iter().map(|c| c.len()).collect::<Vec<_>>(), [80, 80, 10]);
    }

    #[test]
    fn test_process_offsets() {
        let config = Config::builder()
            .max_len(3)
            .delimiter('、')
            .retain_delimiter(true)
            .build()
            .unwrap();
        let output = Chunker::with_config(config).process("あいうえ、お").unwrap();

        assert_eq!(output.texts(), ["あいう", "え", "、", "お"]);
        let offsets: Vec<_> = output
            .chunks
            .iter()
            .map(|c| (c.char_offset, c.byte_offset, c.kind))
            .collect();
        assert_eq!(
            offsets,
            [
                (0, 0, ChunkKind::Content),
                (3, 9, ChunkKind::Content),
                (4, 12, ChunkKind::Delimiter),
                (5, 15, ChunkKind::Content),
            ]
        );
        assert_eq!(output.metadata.total_chars, 6);
        assert_eq!(output.metadata.total_bytes, 18);
        assert_eq!(output.metadata.chunk_count, 4);
        assert_eq!(output.metadata.policy, "delimited-retain");
    }

    #[test]
    fn test_process_offsets_on_long_input() {
        let n = 200_000;
        let text = "あ".repeat(n);
        let config = Config::builder().max_len(1).build().unwrap();
        let output = Chunker::with_config(config).process(&text).unwrap();

        assert_eq!(output.len(), n);
        for (i, chunk) in output.chunks.iter().enumerate() {
            assert_eq!(chunk.char_offset, i);
            assert_eq!(chunk.byte_offset, 3 * i);
        }
    }

    #[test]
    fn test_process_offsets_skip_runs_of_dropped_delimiters() {
        let config = Config::builder().max_len(2).delimiter('、').build().unwrap();
        let text = "、、あいう、、、え、";
        let output = Chunker::with_config(config).process(text).unwrap();

        assert_eq!(output.texts(), ["あい", "う", "え"]);
        let offsets: Vec<_> = output
            .chunks
            .iter()
            .map(|c| (c.char_offset, c.byte_offset))
            .collect();
        assert_eq!(offsets, [(2, 6), (4, 12), (8, 24)]);
        for chunk in &output.chunks {
            assert_eq!(&text[chunk.byte_offset..][..chunk.text.len()], chunk.text);
        }
    }

    #[test]
    fn test_split_text_propagates_core_errors() {
        let err = split_text("abc", 0).unwrap_err();
        match err {
            ApiError::Core(core) => assert_eq!(core.kind(), ErrorKind::InvalidArgument),
            other => panic!("Expected core error, got {other:?}"),
        }
    }
}
