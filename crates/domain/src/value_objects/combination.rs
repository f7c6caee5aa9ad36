//! Combination spec value object and parsing
//!
//! A combination spec is the body of one variant group, e.g. the
//! `2$$and$$bread|butter` in `{2$$and$$bread|butter}`. Parsing normalizes it
//! into a count range, a joiner, and an ordered option list.

use std::fmt;
use thiserror::Error;

/// Picks made when the quantity field is empty
pub const DEFAULT_PICK_COUNT: usize = 1;

/// Joiner used when the joiner field is empty
pub const DEFAULT_JOINER: &str = ",";

/// Error when parsing a combination spec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinationParseError {
    /// Quantity field is not a number or a numeric range
    #[error("Invalid quantity field: {0}")]
    InvalidQuantity(String),
}

/// A parsed variant group body like `1-2$$and$$bread|butter`
///
/// Invariants established here and never violated afterwards:
/// `min_count <= max_count`, and `options` is non-empty (an empty options
/// field parses to a single empty-string option).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationSpec {
    /// Fewest options a selection may pick
    min_count: usize,
    /// Most options a selection may pick
    max_count: usize,
    /// Separator text placed between picked options
    joiner: String,
    /// Ordered, unexpanded option texts
    options: Vec<String>,
}

impl CombinationSpec {
    /// Create a spec from already-split parts, normalizing the invariants
    ///
    /// Bounds given in the wrong order are swapped, and an empty option list
    /// becomes a single empty-string option.
    pub fn new(
        min_count: usize,
        max_count: usize,
        joiner: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        let (min_count, max_count) = if min_count <= max_count {
            (min_count, max_count)
        } else {
            (max_count, min_count)
        };
        let options = if options.is_empty() {
            vec![String::new()]
        } else {
            options
        };
        Self {
            min_count,
            max_count,
            joiner: joiner.into(),
            options,
        }
    }

    /// Parse a variant group body
    ///
    /// The body splits on the literal `$$` into at most three segments:
    /// - `options` - quantity and joiner take their defaults
    /// - `quantity$$options`
    /// - `quantity$$joiner$$options` - any further `$$` stays inside options
    ///
    /// Quantity forms: empty (one pick), `N`, `A-B`, `A-` (upper bound is the
    /// option count), `-B` (lower bound is zero). Anything else is rejected,
    /// never silently defaulted. Options split on `|`; a `|` inside a nested
    /// `{...}` belongs to that group and does not split.
    pub fn parse(body: &str) -> Result<Self, CombinationParseError> {
        let segments: Vec<&str> = body.splitn(3, "$$").collect();
        let (quantity_field, joiner_field, options_field) = match segments.as_slice() {
            [options] => ("", "", *options),
            [quantity, options] => (*quantity, "", *options),
            [quantity, joiner, options] => (*quantity, *joiner, *options),
            // splitn(3) yields between one and three segments
            _ => ("", "", body),
        };

        let options = split_options(options_field);
        let (min_count, max_count) = parse_count_bounds(quantity_field, options.len())?;
        let joiner = if joiner_field.is_empty() {
            DEFAULT_JOINER
        } else {
            joiner_field
        };

        Ok(Self::new(min_count, max_count, joiner, options))
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    /// Fewest options a selection may pick
    pub fn min_count(&self) -> usize {
        self.min_count
    }

    /// Most options a selection may pick
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Separator text placed between picked options
    pub fn joiner(&self) -> &str {
        &self.joiner
    }

    /// Ordered, unexpanded option texts (never empty)
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl fmt::Display for CombinationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}$${}$${}",
            self.min_count,
            self.max_count,
            self.joiner,
            self.options.join("|")
        )
    }
}

/// Split an options field on `|`, keeping nested `{...}` bodies intact
///
/// Always yields at least one element; an empty field yields `[""]`.
fn split_options(field: &str) -> Vec<String> {
    let mut options = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in field.chars() {
        match ch {
            '{' => {
                depth += 1;
                current.push(ch);
            }
            '}' => {
                // A stray closer is plain text, not a depth change
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            '|' if depth == 0 => options.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    options.push(current);
    options
}

/// Resolve a quantity field to an inclusive `(min, max)` pick range
fn parse_count_bounds(
    field: &str,
    option_count: usize,
) -> Result<(usize, usize), CombinationParseError> {
    let field = field.trim();
    if field.is_empty() {
        return Ok((DEFAULT_PICK_COUNT, DEFAULT_PICK_COUNT));
    }

    let (min, max) = match field.split_once('-') {
        Some((lower, upper)) => {
            let lower = lower.trim();
            let upper = upper.trim();
            let min = if lower.is_empty() {
                0
            } else {
                parse_count(lower, field)?
            };
            let max = if upper.is_empty() {
                option_count
            } else {
                parse_count(upper, field)?
            };
            (min, max)
        }
        None => {
            let n = parse_count(field, field)?;
            (n, n)
        }
    };

    // Order-normalize so `A-` with A above the option count stays valid
    Ok(if min <= max { (min, max) } else { (max, min) })
}

fn parse_count(text: &str, field: &str) -> Result<usize, CombinationParseError> {
    text.parse()
        .map_err(|_| CombinationParseError::InvalidQuantity(format!("'{}'", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_only() {
        let spec = CombinationSpec::parse("bread|butter").unwrap();
        assert_eq!(spec.min_count(), DEFAULT_PICK_COUNT);
        assert_eq!(spec.max_count(), DEFAULT_PICK_COUNT);
        assert_eq!(spec.joiner(), DEFAULT_JOINER);
        assert_eq!(spec.options(), ["bread", "butter"]);
    }

    #[test]
    fn test_parse_fixed_count() {
        let spec = CombinationSpec::parse("2$$bread|butter").unwrap();
        assert_eq!(spec.min_count(), 2);
        assert_eq!(spec.max_count(), 2);
        assert_eq!(spec.options(), ["bread", "butter"]);
    }

    #[test]
    fn test_parse_range() {
        let spec = CombinationSpec::parse("1-2$$bread|butter").unwrap();
        assert_eq!(spec.min_count(), 1);
        assert_eq!(spec.max_count(), 2);
    }

    #[test]
    fn test_parse_reversed_range_normalizes() {
        let spec = CombinationSpec::parse("2-1$$bread|butter").unwrap();
        assert_eq!(spec.min_count(), 1);
        assert_eq!(spec.max_count(), 2);
    }

    #[test]
    fn test_parse_range_missing_upper() {
        let spec = CombinationSpec::parse("1-$$bread|butter").unwrap();
        assert_eq!(spec.min_count(), 1);
        assert_eq!(spec.max_count(), 2);
    }

    #[test]
    fn test_parse_range_missing_upper_above_option_count() {
        // Upper bound defaults to the option count, then the pair normalizes
        let spec = CombinationSpec::parse("5-$$a|b").unwrap();
        assert_eq!(spec.min_count(), 2);
        assert_eq!(spec.max_count(), 5);
    }

    #[test]
    fn test_parse_range_missing_lower() {
        let spec = CombinationSpec::parse("-1$$bread|butter").unwrap();
        assert_eq!(spec.min_count(), 0);
        assert_eq!(spec.max_count(), 1);
    }

    #[test]
    fn test_parse_custom_joiner() {
        let spec = CombinationSpec::parse("2$$and$$bread|butter").unwrap();
        assert_eq!(spec.min_count(), 2);
        assert_eq!(spec.max_count(), 2);
        assert_eq!(spec.joiner(), "and");
        assert_eq!(spec.options(), ["bread", "butter"]);
    }

    #[test]
    fn test_parse_pipe_joiner() {
        let spec = CombinationSpec::parse("2$$|$$bread|butter").unwrap();
        assert_eq!(spec.joiner(), "|");
        assert_eq!(spec.options(), ["bread", "butter"]);
    }

    #[test]
    fn test_parse_empty_body() {
        let spec = CombinationSpec::parse("").unwrap();
        assert_eq!(spec.min_count(), 1);
        assert_eq!(spec.max_count(), 1);
        assert_eq!(spec.joiner(), ",");
        assert_eq!(spec.options(), [""]);
    }

    #[test]
    fn test_parse_extra_separators_stay_in_options() {
        let spec = CombinationSpec::parse("1$$+$$a$$b|c").unwrap();
        assert_eq!(spec.joiner(), "+");
        assert_eq!(spec.options(), ["a$$b", "c"]);
    }

    #[test]
    fn test_parse_range_joiner_options() {
        let spec = CombinationSpec::parse("2-4$$|$$a|b|c").unwrap();
        assert_eq!(spec.min_count(), 2);
        assert_eq!(spec.max_count(), 4);
        assert_eq!(spec.joiner(), "|");
        assert_eq!(spec.options(), ["a", "b", "c"]);
    }

    #[test]
    fn test_parse_nested_group_stays_in_option() {
        let spec = CombinationSpec::parse("a|{b|c}d").unwrap();
        assert_eq!(spec.options(), ["a", "{b|c}d"]);
    }

    #[test]
    fn test_parse_empty_option_slots() {
        let spec = CombinationSpec::parse("a||b").unwrap();
        assert_eq!(spec.options(), ["a", "", "b"]);
    }

    #[test]
    fn test_parse_whitespace_around_quantity() {
        let spec = CombinationSpec::parse(" 2 $$bread").unwrap();
        assert_eq!(spec.min_count(), 2);
        assert_eq!(spec.max_count(), 2);
    }

    #[test]
    fn test_parse_non_numeric_quantity() {
        assert!(matches!(
            CombinationSpec::parse("x$$bread|butter"),
            Err(CombinationParseError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_parse_malformed_range() {
        let err = CombinationSpec::parse("1-2-3$$a").unwrap_err();
        assert_eq!(err.to_string(), "Invalid quantity field: '1-2-3'");
    }

    #[test]
    fn test_parse_decimal_quantity() {
        assert!(matches!(
            CombinationSpec::parse("1.5$$a|b"),
            Err(CombinationParseError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_new_normalizes_reversed_bounds() {
        let spec = CombinationSpec::new(3, 1, ",", vec!["a".into()]);
        assert_eq!(spec.min_count(), 1);
        assert_eq!(spec.max_count(), 3);
    }

    #[test]
    fn test_new_normalizes_empty_options() {
        let spec = CombinationSpec::new(1, 1, ",", vec![]);
        assert_eq!(spec.options(), [""]);
    }

    #[test]
    fn test_display_canonical_form() {
        let spec = CombinationSpec::parse("2$$and$$bread|butter").unwrap();
        assert_eq!(spec.to_string(), "2-2$$and$$bread|butter");
    }
}
