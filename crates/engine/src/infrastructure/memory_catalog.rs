//! In-memory wildcard catalog adapter.
//!
//! A fixture-map catalog for tests and for embedders that assemble wildcard
//! values programmatically instead of loading them from files.

use std::collections::HashMap;

use crate::infrastructure::ports::{CatalogError, WildcardCatalog};

/// HashMap-backed wildcard catalog
///
/// Candidate order is the order values were registered in.
pub struct MemoryWildcardCatalog {
    wildcards: HashMap<String, Vec<String>>,
}

impl MemoryWildcardCatalog {
    pub fn new() -> Self {
        Self {
            wildcards: HashMap::new(),
        }
    }

    /// Register a wildcard, builder-style
    pub fn with_wildcard(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.register(name, values);
        self
    }

    /// Register a wildcard, replacing any previous values for the name
    pub fn register(
        &mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.wildcards
            .insert(name.into(), values.into_iter().map(Into::into).collect());
    }

    /// Registered wildcard names, in no particular order
    pub fn names(&self) -> Vec<&str> {
        self.wildcards.keys().map(String::as_str).collect()
    }
}

impl Default for MemoryWildcardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl WildcardCatalog for MemoryWildcardCatalog {
    fn lookup(&self, name: &str) -> Result<Vec<String>, CatalogError> {
        self.wildcards
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownWildcard(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_preserves_registration_order() {
        let catalog =
            MemoryWildcardCatalog::new().with_wildcard("colors", ["red", "green", "blue"]);
        assert_eq!(catalog.lookup("colors").unwrap(), ["red", "green", "blue"]);
    }

    #[test]
    fn test_lookup_unknown_name() {
        let catalog = MemoryWildcardCatalog::new();
        assert_eq!(
            catalog.lookup("colors"),
            Err(CatalogError::UnknownWildcard("colors".to_string()))
        );
    }

    #[test]
    fn test_register_replaces_values() {
        let mut catalog = MemoryWildcardCatalog::new().with_wildcard("colors", ["red"]);
        catalog.register("colors", ["cyan", "magenta"]);
        assert_eq!(catalog.lookup("colors").unwrap(), ["cyan", "magenta"]);
    }

    #[test]
    fn test_names() {
        let catalog = MemoryWildcardCatalog::new()
            .with_wildcard("colors", ["red"])
            .with_wildcard("animals", ["cat"]);
        let mut names = catalog.names();
        names.sort_unstable();
        assert_eq!(names, ["animals", "colors"]);
    }
}
