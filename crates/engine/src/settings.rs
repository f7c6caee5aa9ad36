//! Engine settings value object
//!
//! # Architectural Note (Settings Serialization)
//!
//! `EngineSettings` includes serde derives because embedding applications
//! load these values from their own config files; the JSON shape IS the
//! settings contract. Defaults follow the same rule as environment loading:
//! a missing field means "use the documented default".

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error when validating engine settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A setting value violates its documented range
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Process-wide defaults for prompt generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineSettings {
    /// Initialize generator streams from OS entropy instead of the seed
    #[serde(default = "default_unlink_seed_from_prompt")]
    unlink_seed_from_prompt: bool,

    /// Seed used in linked mode when the caller supplies none
    #[serde(default = "default_default_seed")]
    default_seed: u64,

    /// Nesting depth at which expansion aborts instead of recursing further
    #[serde(default = "default_max_expansion_depth")]
    max_expansion_depth: usize,

    /// Largest pick count a single variant group may request
    #[serde(default = "default_max_pick_count")]
    max_pick_count: usize,
}

fn default_unlink_seed_from_prompt() -> bool {
    false
}
fn default_default_seed() -> u64 {
    0
}
fn default_max_expansion_depth() -> usize {
    32
}
fn default_max_pick_count() -> usize {
    1000
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            unlink_seed_from_prompt: false,
            default_seed: 0,
            max_expansion_depth: 32,
            max_pick_count: 1000,
        }
    }
}

impl EngineSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            unlink_seed_from_prompt: env_or(
                "PROMPTFORGE_UNLINK_SEED_FROM_PROMPT",
                defaults.unlink_seed_from_prompt,
            ),
            default_seed: env_or("PROMPTFORGE_DEFAULT_SEED", defaults.default_seed),
            max_expansion_depth: env_or(
                "PROMPTFORGE_MAX_EXPANSION_DEPTH",
                defaults.max_expansion_depth,
            ),
            max_pick_count: env_or("PROMPTFORGE_MAX_PICK_COUNT", defaults.max_pick_count),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_expansion_depth == 0 {
            return Err(SettingsError::Invalid(
                "max_expansion_depth must be greater than 0".into(),
            ));
        }
        if self.max_pick_count == 0 {
            return Err(SettingsError::Invalid(
                "max_pick_count must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    /// Initialize generator streams from OS entropy instead of the seed
    pub fn unlink_seed_from_prompt(&self) -> bool {
        self.unlink_seed_from_prompt
    }

    /// Seed used in linked mode when the caller supplies none
    pub fn default_seed(&self) -> u64 {
        self.default_seed
    }

    /// Nesting depth at which expansion aborts instead of recursing further
    pub fn max_expansion_depth(&self) -> usize {
        self.max_expansion_depth
    }

    /// Largest pick count a single variant group may request
    pub fn max_pick_count(&self) -> usize {
        self.max_pick_count
    }

    // ============================================================================
    // Builder-style setters (consume self)
    // ============================================================================

    /// Set the unlink flag
    pub fn with_unlink_seed_from_prompt(self, unlink_seed_from_prompt: bool) -> Self {
        Self {
            unlink_seed_from_prompt,
            ..self
        }
    }

    /// Set the fallback seed for linked mode
    pub fn with_default_seed(self, default_seed: u64) -> Self {
        Self {
            default_seed,
            ..self
        }
    }

    /// Set the expansion depth bound
    pub fn with_max_expansion_depth(self, max_expansion_depth: usize) -> Self {
        Self {
            max_expansion_depth,
            ..self
        }
    }

    /// Set the per-group pick count bound
    pub fn with_max_pick_count(self, max_pick_count: usize) -> Self {
        Self {
            max_pick_count,
            ..self
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert!(!settings.unlink_seed_from_prompt());
        assert_eq!(settings.default_seed(), 0);
        assert_eq!(settings.max_expansion_depth(), 32);
        assert_eq!(settings.max_pick_count(), 1000);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(EngineSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let settings = EngineSettings::default().with_max_expansion_depth(0);
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_pick_limit() {
        let settings = EngineSettings::default().with_max_pick_count(0);
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_builders() {
        let settings = EngineSettings::default()
            .with_unlink_seed_from_prompt(true)
            .with_default_seed(99)
            .with_max_expansion_depth(8)
            .with_max_pick_count(50);
        assert!(settings.unlink_seed_from_prompt());
        assert_eq!(settings.default_seed(), 99);
        assert_eq!(settings.max_expansion_depth(), 8);
        assert_eq!(settings.max_pick_count(), 50);
    }

    #[test]
    fn test_from_env_overrides() {
        std::env::set_var("PROMPTFORGE_MAX_EXPANSION_DEPTH", "5");
        let settings = EngineSettings::from_env();
        std::env::remove_var("PROMPTFORGE_MAX_EXPANSION_DEPTH");

        assert_eq!(settings.max_expansion_depth(), 5);
        assert!(!settings.unlink_seed_from_prompt());
    }

    #[test]
    fn test_missing_json_fields_take_defaults() {
        let settings: EngineSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = EngineSettings::default()
            .with_unlink_seed_from_prompt(true)
            .with_default_seed(7);
        let json = serde_json::to_string(&settings).unwrap();
        let back: EngineSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
