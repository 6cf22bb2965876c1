//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{DecisionEngine, NumberFormat};

/// Upper bound on fixed decimal places in derivation strings.
pub const MAX_DECIMAL_PLACES: usize = 12;

/// Defaults applied when evaluating decisions
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Optimism coefficient used when the caller supplies none
    #[serde(default = "default_alpha")]
    pub default_alpha: f64,

    /// Fixed decimal places for derivation strings (shortest form if unset)
    #[serde(default)]
    pub decimal_places: Option<usize>,
}

impl AnalysisConfig {
    /// Number format derived from `decimal_places`
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::from_places(self.decimal_places)
    }

    /// Engine configured with this section's number format
    pub fn engine(&self) -> DecisionEngine {
        DecisionEngine::new(self.number_format())
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.default_alpha) {
            return Err(ValidationError::InvalidDefaultAlpha(self.default_alpha));
        }
        if let Some(places) = self.decimal_places {
            if places > MAX_DECIMAL_PLACES {
                return Err(ValidationError::TooManyDecimalPlaces {
                    max: MAX_DECIMAL_PLACES,
                    actual: places,
                });
            }
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_alpha: default_alpha(),
            decimal_places: None,
        }
    }
}

fn default_alpha() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.default_alpha, 0.5);
        assert_eq!(config.decimal_places, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_alpha() {
        let config = AnalysisConfig {
            default_alpha: 1.2,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidDefaultAlpha(1.2))
        );
    }

    #[test]
    fn test_validation_too_many_places() {
        let config = AnalysisConfig {
            decimal_places: Some(20),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_number_format_follows_places() {
        let config = AnalysisConfig {
            decimal_places: Some(3),
            ..Default::default()
        };
        assert_eq!(config.number_format(), NumberFormat::fixed(3));
        assert_eq!(config.engine().format(), NumberFormat::fixed(3));
    }

    #[test]
    fn test_analysis_config_deserialization() {
        let json = r#"{ "default_alpha": 0.8, "decimal_places": 2 }"#;
        let config: AnalysisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_alpha, 0.8);
        assert_eq!(config.decimal_places, Some(2));
    }
}
