//! Delimiter-aware, length-bounded string chunking
//!
//! This crate holds the deterministic layer of strparts: argument checks,
//! the chunking scans, and a few string helpers. Nothing here performs I/O
//! or keeps state between calls, so every function is safe to call from any
//! number of threads at once.
//!
//! # Example
//!
//! ```rust
//! use strparts_core::{delimited_chunks, fixed_chunks, DelimiterMode};
//!
//! assert_eq!(fixed_chunks("abcdefg", 3).unwrap(), ["abc", "def", "g"]);
//!
//! let parts = delimited_chunks(",one,two,,three,", ',', 5, DelimiterMode::Retain).unwrap();
//! assert_eq!(parts, [",", "one", ",", "two", ",", ",", "three", ","]);
//! ```

#![warn(missing_docs)]

pub mod check;
pub mod chunker;
pub mod error;
pub mod text;

// Re-export key types
pub use chunker::{
    delimited_chunks, delimited_parts, delimited_parts_with_delimiter, fixed_chunks,
    DelimiterMode,
};
pub use error::{CoreError, ErrorKind, Result};
