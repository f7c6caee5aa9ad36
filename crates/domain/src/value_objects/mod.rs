//! Value objects - Immutable objects defined by their attributes

mod combination;
mod template;

pub use combination::{CombinationParseError, CombinationSpec, DEFAULT_JOINER, DEFAULT_PICK_COUNT};
pub use template::{
    next_variant_group, next_wildcard_token, TemplateScanError, VariantGroup, WildcardToken,
};
