// config.rs

use std::fmt;

use bevy::prelude::*;
use serde::Deserialize;

use crate::evasion::EvasionParams;
use crate::navigation::NavigationConfig;

const CONFIG_JSON: &str = include_str!("../assets/config.json");

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "Failed to parse config: {}", err),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid config value for {}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Text shown on the prompt and success screens
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PromptConfig {
    pub question: String,
    pub yes_label: String,
    pub no_label: String,
    pub success_message: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            question: "Will you say yes?".into(),
            yes_label: "Yes".into(),
            no_label: "No".into(),
            success_message: "Yay!".into(),
        }
    }
}

/// Loads the embedded config and exposes each section as a resource
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = AppConfig::load_embedded();
        app.insert_resource(config.evasion)
            .insert_resource(config.navigation)
            .insert_resource(config.prompt);
    }
}

/// Everything tunable about the app. Missing sections fall back to defaults.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub evasion: EvasionParams,
    pub navigation: NavigationConfig,
    pub prompt: PromptConfig,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.evasion.validate()?;
        self.navigation.validate()
    }

    /// Load the config baked into the binary, falling back to defaults
    pub fn load_embedded() -> Self {
        match Self::from_json(CONFIG_JSON) {
            Ok(config) => {
                log::info!("Loaded config: {:?}", config.evasion);
                config
            }
            Err(err) => {
                log::warn!("{} - using built-in defaults", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evasion::presets;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = AppConfig::from_json(CONFIG_JSON).expect("embedded config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.navigation.destination, "yay.html");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = AppConfig::from_json(r#"{ "evasion": { "throttle_ms": 33 } }"#).unwrap();
        assert_eq!(config.evasion.throttle_ms, 33);
        assert_eq!(config.evasion.activation_radius, presets::CLASSIC.activation_radius);
        assert_eq!(config.prompt, PromptConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = AppConfig::from_json(r#"{ "evasion": { "max_offset_fraction": 0.0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "max_offset_fraction",
                ..
            }
        ));

        let err = AppConfig::from_json(r#"{ "navigation": { "destination": "  " } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "destination",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = AppConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }
}
