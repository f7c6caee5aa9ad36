//! PromptForge Engine library.
//!
//! Expands prompt templates containing variant groups
//! (`{quantity$$joiner$$option|option}`) and wildcard tokens (`__name__`)
//! into concrete prompt strings, with randomness that is either derived from
//! a caller seed or deliberately detached from it.
//!
//! ## Structure
//!
//! - `generator` - The prompt generator: locates, selects, and substitutes
//! - `rng` - The seed policy and the generator's random stream
//! - `settings` - Engine defaults and environment overrides
//! - `infrastructure/` - The wildcard catalog port and its in-memory adapter
//! - `error` - The unified expansion error

pub mod error;
pub mod generator;
pub mod infrastructure;
pub mod rng;
pub mod settings;

pub use error::ExpandError;
pub use generator::RandomPromptGenerator;
pub use infrastructure::memory_catalog::MemoryWildcardCatalog;
pub use infrastructure::ports::{CatalogError, WildcardCatalog};
pub use rng::PromptRng;
pub use settings::{EngineSettings, SettingsError};
