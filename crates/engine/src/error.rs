//! Unified error type for prompt expansion
//!
//! Everything `expand` and `generate` can fail with, in one enum, so callers
//! match on a single type instead of juggling the domain and port errors.

use promptforge_domain::{CombinationParseError, TemplateScanError};
use thiserror::Error;

use crate::infrastructure::ports::CatalogError;

/// Error produced while expanding a template
///
/// Every variant aborts the current `expand` call; nothing is retried
/// internally. The caller decides whether to retry, skip, or propagate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// A variant group body failed to parse
    #[error("Combination spec error: {0}")]
    Combination(#[from] CombinationParseError),

    /// The template contains an opening brace with no matching close
    #[error("Template scan error: {0}")]
    Scan(#[from] TemplateScanError),

    /// The wildcard catalog rejected a lookup
    #[error("Wildcard catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Nested expansion exceeded the configured depth bound
    #[error("Expansion exceeded recursion limit of {limit}")]
    RecursionLimit { limit: usize },

    /// A variant group requested more picks than the configured bound
    #[error("Pick count {count} exceeds limit of {limit}")]
    PickCountLimit { count: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_combination_parse_error() {
        let err: ExpandError = CombinationParseError::InvalidQuantity("'x'".into()).into();
        assert!(matches!(err, ExpandError::Combination(_)));
        assert_eq!(
            err.to_string(),
            "Combination spec error: Invalid quantity field: 'x'"
        );
    }

    #[test]
    fn test_from_scan_error() {
        let err: ExpandError = TemplateScanError::UnbalancedGroup { offset: 7 }.into();
        assert!(matches!(err, ExpandError::Scan(_)));
        assert!(err.to_string().contains("offset 7"));
    }

    #[test]
    fn test_from_catalog_error() {
        let err: ExpandError = CatalogError::UnknownWildcard("colors".into()).into();
        assert!(matches!(err, ExpandError::Catalog(_)));
        assert!(err.to_string().contains("colors"));
    }

    #[test]
    fn test_recursion_limit_display() {
        let err = ExpandError::RecursionLimit { limit: 32 };
        assert_eq!(err.to_string(), "Expansion exceeded recursion limit of 32");
    }

    #[test]
    fn test_pick_count_limit_display() {
        let err = ExpandError::PickCountLimit { count: 4, limit: 3 };
        assert_eq!(err.to_string(), "Pick count 4 exceeds limit of 3");
    }
}
