//! # Settings Module
//!
//! ## Purpose
//! Numeric tolerances and policy switches of the balancer, loadable from JSON.
//!
//! ## Fields
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `zero_epsilon` | 1e-10 | entries of the null vector below this are numerical noise |
//! | `integer_tolerance` | 0.01 | how close a scaled ratio must be to an integer |
//! | `max_multiplier` | 1000 | upper bound of the integer multiplier search |
//! | `strict` | true | degenerate solutions are errors instead of silent fallbacks |
//! | `log_level` | "warn" | level used by the command line front-end |
//!
//! Missing fields of a JSON file take their default values:
//! ```rust
//! use ChemBalancer::settings::BalancerConfig;
//! let config = BalancerConfig::from_json_str(r#"{ "strict": false }"#).unwrap();
//! assert!(!config.strict);
//! assert_eq!(config.max_multiplier, 1000);
//! ```
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancerConfig {
    pub zero_epsilon: f64,
    pub integer_tolerance: f64,
    pub max_multiplier: u64,
    pub strict: bool,
    pub log_level: String,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            zero_epsilon: 1e-10,
            integer_tolerance: 0.01,
            max_multiplier: 1000,
            strict: true,
            log_level: "warn".to_string(),
        }
    }
}

impl BalancerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// legacy behaviour: all-ones fallback and clamping instead of errors
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: BalancerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zero_epsilon > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "zero_epsilon must be positive, got {}",
                self.zero_epsilon
            )));
        }
        if !(self.integer_tolerance > 0.0 && self.integer_tolerance < 0.5) {
            return Err(ConfigError::Invalid(format!(
                "integer_tolerance must lie in (0, 0.5), got {}",
                self.integer_tolerance
            )));
        }
        if self.max_multiplier == 0 {
            return Err(ConfigError::Invalid(
                "max_multiplier must be at least 1".to_string(),
            ));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = BalancerConfig::new();
        assert_eq!(config.zero_epsilon, 1e-10);
        assert_eq!(config.integer_tolerance, 0.01);
        assert_eq!(config.max_multiplier, 1000);
        assert!(config.strict);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
        assert!(!BalancerConfig::lenient().strict);
    }

    #[test]
    fn test_partial_json() {
        let config = BalancerConfig::from_json_str(r#"{"max_multiplier": 50}"#).unwrap();
        assert_eq!(config.max_multiplier, 50);
        assert!(config.strict);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            BalancerConfig::from_json_str(r#"{"max_multiplier": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BalancerConfig::from_json_str(r#"{"integer_tolerance": 0.7}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BalancerConfig::from_json_str(r#"{"log_level": "loud"}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BalancerConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"strict": false, "log_level": "debug"}}"#).unwrap();
        let config = BalancerConfig::from_json_file(file.path()).unwrap();
        assert!(!config.strict);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);

        assert!(matches!(
            BalancerConfig::from_json_file("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
