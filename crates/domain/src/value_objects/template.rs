//! Template scanning value objects
//!
//! Locates the two substitution forms inside a prompt template: variant
//! groups delimited by balanced `{` `}` pairs, and wildcard tokens written
//! `__name__`. Scanners report byte spans so callers can splice replacements
//! in place. All markers are ASCII, so spans always fall on UTF-8 boundaries.

use std::ops::Range;
use thiserror::Error;

/// Error when scanning a template for variant groups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateScanError {
    /// An opening brace with no matching closing brace
    #[error("Unbalanced variant group at offset {offset}")]
    UnbalancedGroup { offset: usize },
}

/// One top-level variant group located in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantGroup {
    /// Text between the braces, delimiters stripped
    pub body: String,
    /// Byte span of the whole group, braces included
    pub span: Range<usize>,
}

/// One wildcard token located in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardToken {
    /// Name between the `__` markers
    pub name: String,
    /// Byte span of the whole token, markers included
    pub span: Range<usize>,
}

/// Find the next top-level variant group at or after byte offset `from`
///
/// Nested brace pairs inside the body are balanced and skipped rather than
/// treated as the group's end. A stray `}` with no preceding `{` is plain
/// text. Returns `Ok(None)` when no group remains.
pub fn next_variant_group(
    text: &str,
    from: usize,
) -> Result<Option<VariantGroup>, TemplateScanError> {
    let bytes = text.as_bytes();
    let Some(rel) = bytes[from.min(bytes.len())..].iter().position(|&b| b == b'{') else {
        return Ok(None);
    };
    let start = from + rel;

    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(start) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Some(VariantGroup {
                        body: text[start + 1..i].to_string(),
                        span: start..i + 1,
                    }));
                }
            }
            _ => {}
        }
    }

    Err(TemplateScanError::UnbalancedGroup { offset: start })
}

/// Find the next wildcard token at or after byte offset `from`
///
/// A token is the shortest `__name__` match; the name may be empty. An
/// unpaired `__` is plain text, so this never fails. Like the variant
/// locator, the scan is byte-wise, so `from` need not be a char boundary.
pub fn next_wildcard_token(text: &str, from: usize) -> Option<WildcardToken> {
    let bytes = text.as_bytes();
    let open = find_marker(bytes, from.min(bytes.len()))?;
    let name_start = open + 2;
    let name_end = find_marker(bytes, name_start)?;

    Some(WildcardToken {
        name: text[name_start..name_end].to_string(),
        span: open..name_end + 2,
    })
}

/// Byte position of the next `__` pair at or after `from`
fn find_marker(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..]
        .windows(2)
        .position(|pair| pair == b"__")
        .map(|rel| from + rel)
}
