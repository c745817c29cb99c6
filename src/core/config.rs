//! Engine configuration and table layout constants.
//!
//! The table layout is fixed by the rules of FreeCell. Only the RNG seed and
//! the initial autoplay switch are configurable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of cascades (tableau columns).
pub const CASCADE_COUNT: usize = 8;

/// Number of freecells.
pub const FREECELL_COUNT: usize = 4;

/// Number of foundations.
pub const FOUNDATION_COUNT: usize = 4;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Engine configuration.
///
/// ```
/// use freecell_engine::core::EngineConfig;
///
/// let config = EngineConfig::default().with_seed(7).with_autoplay(false);
/// assert_eq!(config.seed, Some(7));
/// assert!(!config.autoplay);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Master seed for dealing. `None` draws a seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Whether safe autoplay starts enabled.
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
}

fn default_autoplay() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            autoplay: default_autoplay(),
        }
    }
}

impl EngineConfig {
    /// Set a fixed master seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial autoplay switch.
    #[must_use]
    pub fn with_autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = enabled;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert!(config.autoplay);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default().with_seed(99).with_autoplay(false);
        assert_eq!(config.seed, Some(99));
        assert!(!config.autoplay);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{ "seed": 12 }"#).unwrap();
        assert_eq!(config.seed, Some(12));
        assert!(config.autoplay);

        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = EngineConfig::from_json(r#"{ "autoplay": "yes" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = EngineConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }
}
