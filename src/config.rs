//! Branding and layout settings shipped with the app.

use serde::Deserialize;
use crate::error::ConfigError;

static APP_CONFIG_JSON: &str = include_str!("../assets/app_config.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand_name: String,
    pub user_display_name: String,
    pub notification_count: u32,
    pub show_side_panel: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "Bug Tracker".to_string(),
            user_display_name: "bazinga".to_string(),
            notification_count: 2,
            show_side_panel: true,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the embedded config, falling back to defaults if it does not parse
    pub fn load() -> Self {
        match Self::from_json(APP_CONFIG_JSON) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default app config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_json(APP_CONFIG_JSON).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_json(r#"{ "user_display_name": "alice" }"#).unwrap();
        assert_eq!(config.user_display_name, "alice");
        assert_eq!(config.brand_name, "Bug Tracker");
        assert_eq!(config.notification_count, 2);
        assert!(config.show_side_panel);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = AppConfig::from_json(r#"{ "notification_count": "two" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
