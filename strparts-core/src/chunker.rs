//! Length-bounded and delimiter-aware chunking
//!
//! Lengths and positions count `char`s, not bytes. Every returned chunk
//! borrows from the input, so a chunk never splits a UTF-8 sequence.

use crate::{
    check::{require_non_null, require_strictly_positive},
    error::Result,
};

/// What happens to a delimiter once it has closed a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DelimiterMode {
    /// Consume the delimiter without emitting it
    #[default]
    Drop,
    /// Emit the delimiter as its own one-character chunk
    Retain,
}

impl DelimiterMode {
    /// Whether delimiters appear in the output
    pub fn retains(self) -> bool {
        matches!(self, DelimiterMode::Retain)
    }
}

impl From<bool> for DelimiterMode {
    fn from(retain: bool) -> Self {
        if retain {
            DelimiterMode::Retain
        } else {
            DelimiterMode::Drop
        }
    }
}

/// Split `s` into consecutive slices of `len` characters
///
/// The last slice holds whatever remains. An empty input yields no chunks.
///
/// # Errors
/// * `NullInput` if `s` is `None`
/// * `InvalidArgument` if `len <= 0`
pub fn fixed_chunks<'a>(s: impl Into<Option<&'a str>>, len: i64) -> Result<Vec<&'a str>> {
    let s = require_non_null(s.into(), "s")?;
    let len = require_strictly_positive(len, "len")?;

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut pending = 0;

    for (pos, _) in s.char_indices() {
        if pending == len {
            chunks.push(&s[start..pos]);
            start = pos;
            pending = 0;
        }
        pending += 1;
    }

    if start < s.len() {
        chunks.push(&s[start..]);
    }

    Ok(chunks)
}

/// Split `s` on `del`, cutting any run longer than `len` characters
///
/// A delimiter always closes the pending chunk, even when it is shorter
/// than `len`. When the pending chunk reaches `len` it is cut before the
/// character at that position is looked at, so a delimiter sitting right
/// after a full chunk closes an empty run and emits nothing for it.
///
/// In [`DelimiterMode::Retain`] each delimiter becomes its own chunk and the
/// concatenated output equals `s`. In [`DelimiterMode::Drop`] the output
/// equals `s` with every delimiter removed. No chunk is ever empty.
///
/// # Errors
/// * `NullInput` if `s` is `None`
/// * `InvalidArgument` if `len <= 0`
///
/// # Example
/// ```rust
/// use strparts_core::{delimited_chunks, DelimiterMode};
///
/// let parts = delimited_chunks("ab-cdefg-hij", '-', 4, DelimiterMode::Drop).unwrap();
/// assert_eq!(parts, ["ab", "cdef", "g", "hij"]);
///
/// let parts = delimited_chunks("ab-cdefg-hij", '-', 4, DelimiterMode::Retain).unwrap();
/// assert_eq!(parts, ["ab", "-", "cdef", "g", "-", "hij"]);
/// ```
pub fn delimited_chunks<'a>(
    s: impl Into<Option<&'a str>>,
    del: char,
    len: i64,
    mode: DelimiterMode,
) -> Result<Vec<&'a str>> {
    let s = require_non_null(s.into(), "s")?;
    let len = require_strictly_positive(len, "len")?;

    let mut chunks = Vec::new();
    // Byte offset of `l`; `pending` is `r - l` in characters
    let mut start = 0;
    let mut pending = 0;

    for (pos, ch) in s.char_indices() {
        if pending >= len {
            chunks.push(&s[start..pos]);
            start = pos;
            pending = 0;
        }

        if ch == del {
            if pending > 0 {
                chunks.push(&s[start..pos]);
            }
            let next = pos + ch.len_utf8();
            if mode.retains() {
                chunks.push(&s[pos..next]);
            }
            start = next;
            pending = 0;
        } else {
            pending += 1;
        }
    }

    if start < s.len() {
        chunks.push(&s[start..]);
    }

    Ok(chunks)
}

/// [`delimited_chunks`] in drop mode
pub fn delimited_parts<'a>(s: impl Into<Option<&'a str>>, del: char, len: i64) -> Result<Vec<&'a str>> {
    delimited_chunks(s, del, len, DelimiterMode::Drop)
}

/// [`delimited_chunks`] in retain mode
pub fn delimited_parts_with_delimiter<'a>(
    s: impl Into<Option<&'a str>>,
    del: char,
    len: i64,
) -> Result<Vec<&'a str>> {
    delimited_chunks(s, del, len, DelimiterMode::Retain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ErrorKind};

    #[test]
    fn test_fixed_chunks_remainder() {
        assert_eq!(fixed_chunks("abcdefg", 3).unwrap(), ["abc", "def", "g"]);
        assert_eq!(fixed_chunks("abcdef", 3).unwrap(), ["abc", "def"]);
        assert_eq!(fixed_chunks("ab", 5).unwrap(), ["ab"]);
    }

    #[test]
    fn test_fixed_chunks_empty() {
        assert!(fixed_chunks("", 1).unwrap().is_empty());
        assert!(fixed_chunks("", 100).unwrap().is_empty());
    }

    #[test]
    fn test_fixed_chunks_counts_chars() {
        // 2 + 3 + 4 byte characters
        let text = "éあ🎉éあ🎉";
        assert_eq!(fixed_chunks(text, 2).unwrap(), ["éあ", "🎉é", "あ🎉"]);
    }

    #[test]
    fn test_fixed_chunks_validation() {
        assert_eq!(
            fixed_chunks(None, 3).unwrap_err(),
            CoreError::NullInput { name: "s" }
        );
        assert_eq!(fixed_chunks("abc", 0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(fixed_chunks("abc", -4).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_delimited_drop_examples() {
        assert_eq!(
            delimited_parts("one,two,three,four", ',', 5).unwrap(),
            ["one", "two", "three", "four"]
        );
        assert_eq!(
            delimited_parts("abcdefghijk", '-', 3).unwrap(),
            ["abc", "def", "ghi", "jk"]
        );
        assert_eq!(
            delimited_parts("ab-cdefg-hij", '-', 4).unwrap(),
            ["ab", "cdef", "g", "hij"]
        );
    }

    #[test]
    fn test_delimited_retain_examples() {
        assert_eq!(
            delimited_parts_with_delimiter(",one,two,,three,", ',', 5).unwrap(),
            [",", "one", ",", "two", ",", ",", "three", ","]
        );
        assert_eq!(
            delimited_parts_with_delimiter("abcdefghijk", '-', 3).unwrap(),
            ["abc", "def", "ghi", "jk"]
        );
    }

    #[test]
    fn test_delimiter_at_length_boundary() {
        // The delimiter is the 4th character, right after a full chunk
        assert_eq!(delimited_parts("abc,def", ',', 3).unwrap(), ["abc", "def"]);
        assert_eq!(
            delimited_parts_with_delimiter("abc,def", ',', 3).unwrap(),
            ["abc", ",", "def"]
        );
        assert_eq!(
            delimited_parts_with_delimiter("abc,", ',', 3).unwrap(),
            ["abc", ","]
        );
    }

    #[test]
    fn test_delimiter_only_inputs() {
        assert!(delimited_parts(",,,", ',', 2).unwrap().is_empty());
        assert_eq!(
            delimited_parts_with_delimiter(",,,", ',', 2).unwrap(),
            [",", ",", ","]
        );
        assert!(delimited_parts("", ',', 2).unwrap().is_empty());
    }

    #[test]
    fn test_multibyte_delimiter() {
        assert_eq!(
            delimited_parts_with_delimiter("これは、テスト、です", '、', 2).unwrap(),
            ["これ", "は", "、", "テス", "ト", "、", "です"]
        );
    }

    #[test]
    fn test_delimited_validation_is_uniform() {
        for mode in [DelimiterMode::Drop, DelimiterMode::Retain] {
            assert_eq!(
                delimited_chunks(None, ',', 3, mode).unwrap_err().kind(),
                ErrorKind::NullInput
            );
            assert_eq!(
                delimited_chunks("a,b", ',', 0, mode).unwrap_err().kind(),
                ErrorKind::InvalidArgument
            );
            assert_eq!(
                delimited_chunks("a,b", ',', -1, mode).unwrap_err().kind(),
                ErrorKind::InvalidArgument
            );
        }
    }

    #[test]
    fn test_delimiter_mode_from_bool() {
        assert_eq!(DelimiterMode::from(true), DelimiterMode::Retain);
        assert_eq!(DelimiterMode::from(false), DelimiterMode::Drop);
        assert_eq!(DelimiterMode::default(), DelimiterMode::Drop);
    }
}
