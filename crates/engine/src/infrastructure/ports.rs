//! Port traits for infrastructure boundaries.
//!
//! The wildcard catalog is the ONLY abstraction in the engine; everything
//! else is concrete types. The port exists because catalogs live outside the
//! expansion core (wildcard files on disk, a database, a fixture map) and
//! because tests mock it.

// =============================================================================
// Error Types
// =============================================================================

/// Error from a wildcard catalog lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The name is not registered in the catalog
    ///
    /// A miss is a hard error, never an empty option list; silently
    /// producing empty text would mask template authoring mistakes.
    #[error("Unknown wildcard: {0}")]
    UnknownWildcard(String),
    /// The catalog backend failed
    #[error("Catalog backend error: {0}")]
    Backend(String),
}

// =============================================================================
// Ports
// =============================================================================

/// Named wildcard resolution.
///
/// Given a wildcard name found in a template, returns the ordered list of
/// candidate replacement strings. Candidates are treated exactly like an
/// inline option list drawn with count 1; each candidate may itself contain
/// variant groups or further wildcard tokens.
///
/// # Implementations
///
/// - `MemoryWildcardCatalog` (fixture map, tests and embedders)
/// - `MockWildcardCatalog` via mockall (testing)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait WildcardCatalog: Send + Sync {
    /// Look up the candidate values for a wildcard name
    fn lookup(&self, name: &str) -> Result<Vec<String>, CatalogError>;
}
