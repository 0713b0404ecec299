//! Small string helpers used alongside the chunker

use crate::{
    check::require_non_null,
    error::{CoreError, Result},
};
use std::fmt::Display;

/// Placeholder replaced by [`format`]
pub const PLACEHOLDER: &str = "%s";

/// Char-indexed slice `[l, r)` of `s`
///
/// `r` is clamped to the length of `s`, so asking for more than is left
/// returns the tail.
///
/// # Errors
/// `IndexOutOfBounds` if `l` is past the end of `s` or `r < l`.
pub fn substring(s: &str, l: usize, r: usize) -> Result<&str> {
    let n = s.chars().count();
    if l > n {
        return Err(CoreError::IndexOutOfBounds { index: l, len: n });
    }
    if r < l {
        return Err(CoreError::IndexOutOfBounds { index: r, len: n });
    }

    let start = byte_offset(s, l);
    let end = if r >= n { s.len() } else { byte_offset(s, r) };
    Ok(&s[start..end])
}

/// Byte offset of the `index`-th character, or `s.len()` past the end
fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices()
        .nth(index)
        .map_or(s.len(), |(pos, _)| pos)
}

/// Whether `s` is `base` repeated one or more times
///
/// An empty `base` never matches.
///
/// # Errors
/// `NullInput` if either argument is `None`.
pub fn is_repetition_of<'a>(
    s: impl Into<Option<&'a str>>,
    base: impl Into<Option<&'a str>>,
) -> Result<bool> {
    let s = require_non_null(s.into(), "s")?;
    let base = require_non_null(base.into(), "base")?;

    if base.is_empty() || s.len() < base.len() || s.len() % base.len() != 0 {
        return Ok(false);
    }

    // Equal byte blocks imply equal char blocks
    Ok(s.as_bytes()
        .chunks(base.len())
        .all(|block| block == base.as_bytes()))
}

/// Replace `%s` placeholders in `template` with `args`, in order
///
/// A placeholder preceded by `%` (`%%s`) is left as written. Placeholders
/// without a matching argument stay in the output; extra arguments are
/// ignored.
///
/// # Errors
/// `NullInput` if `template` is `None`.
///
/// # Example
/// ```rust
/// use strparts_core::text::format;
///
/// let out = format("%s of %s, not %%s", &[&3, &"four"]).unwrap();
/// assert_eq!(out, "3 of four, not %%s");
/// ```
pub fn format<'a>(template: impl Into<Option<&'a str>>, args: &[&dyn Display]) -> Result<String> {
    let template = require_non_null(template.into(), "template")?;

    let mut out = String::with_capacity(template.len() + 32 * args.len());
    let mut copied = 0;
    let mut search = 0;
    let mut next_arg = 0;

    while next_arg < args.len() {
        let Some(found) = template[search..].find(PLACEHOLDER) else {
            break;
        };
        let at = search + found;
        search = at + PLACEHOLDER.len();

        if template[..at].ends_with('%') {
            continue;
        }

        out.push_str(&template[copied..at]);
        out.push_str(&args[next_arg].to_string());
        copied = search;
        next_arg += 1;
    }

    out.push_str(&template[copied..]);
    Ok(out)
}
