//! PromptForge domain layer.
//!
//! Pure template grammar: the combination spec value object and the template
//! scanners. This crate holds no randomness and no I/O; drawing and wildcard
//! resolution live in `promptforge-engine`.

pub mod value_objects;

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    next_variant_group, next_wildcard_token, CombinationParseError, CombinationSpec,
    TemplateScanError, VariantGroup, WildcardToken, DEFAULT_JOINER, DEFAULT_PICK_COUNT,
};
