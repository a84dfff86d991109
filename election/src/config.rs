//! Election configuration with TOML file support.

use panchayat_utils::LogFormat;
use serde::{Deserialize, Serialize};

use crate::validator::ValidationRules;
use crate::ElectionError;

/// Configuration for an election.
///
/// Can be loaded from a TOML file via [`ElectionConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default, so an
/// empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElectionConfig {
    /// Minimum age for a voter to be accepted into the roll.
    #[serde(default = "default_min_voting_age")]
    pub min_voting_age: u32,

    /// Fields a voter record must carry, checked by the vote validator.
    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_min_voting_age() -> u32 {
    18
}

fn default_required_fields() -> Vec<String> {
    vec!["id".to_string(), "name".to_string(), "age".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ElectionConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ElectionError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ElectionError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ElectionError> {
        toml::from_str(s).map_err(|e| ElectionError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ElectionError> {
        toml::to_string_pretty(self).map_err(|e| ElectionError::Config(e.to_string()))
    }

    /// Rules for [`crate::create_vote_validator`] matching this configuration.
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            min_age: self.min_voting_age,
            required_fields: self.required_fields.clone(),
        }
    }

    /// Install the global tracing subscriber using the configured format and level.
    pub fn init_logging(&self) -> Result<(), ElectionError> {
        panchayat_utils::try_init_logging(self.log_format, &self.log_level)
            .map_err(|e| ElectionError::Config(e.to_string()))
    }
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self {
            min_voting_age: default_min_voting_age(),
            required_fields: default_required_fields(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ElectionConfig::default();
        let toml_str = config.to_toml_string().expect("should serialize");
        let parsed = ElectionConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = ElectionConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.min_voting_age, 18);
        assert_eq!(config.required_fields, vec!["id", "name", "age"]);
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            min_voting_age = 21
            log_format = "json"
        "#;
        let config = ElectionConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.min_voting_age, 21);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "info"); // default
    }

    #[test]
    fn unknown_log_format_is_config_error() {
        let result = ElectionConfig::from_toml_str(r#"log_format = "xml""#);
        assert!(matches!(result, Err(ElectionError::Config(_))));
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = ElectionConfig::from_toml_file("/nonexistent/panchayat.toml");
        assert!(matches!(result, Err(ElectionError::Config(_))));
    }

    #[test]
    fn validation_rules_follow_config() {
        let config = ElectionConfig {
            min_voting_age: 21,
            required_fields: vec!["id".to_string(), "ward".to_string()],
            ..ElectionConfig::default()
        };
        let rules = config.validation_rules();
        assert_eq!(rules.min_age, 21);
        assert_eq!(rules.required_fields, vec!["id", "ward"]);
    }
}
