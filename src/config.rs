//! App Configuration
//!
//! Read once at startup from the embedded `assets/config.json`.

use log::LevelFilter;
use serde::Deserialize;

const CONFIG_JSON: &str = include_str!("../assets/config.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Artificial latency of the mock API; 0 disables it
    pub api_latency_ms: u32,
    /// Layout selected on startup
    pub default_layout: String,
    pub log_level: String,
    pub filter_placeholder: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_latency_ms: 150,
            default_layout: "default".to_string(),
            log_level: "info".to_string(),
            filter_placeholder: "Filter fields...".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the embedded config, falling back to defaults on a bad file
    pub fn load() -> Self {
        Self::from_json(CONFIG_JSON)
    }

    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        match self.log_level.to_ascii_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config: AppConfig = serde_json::from_str(CONFIG_JSON).unwrap();
        assert_eq!(config.default_layout, "default");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"apiLatencyMs": 0}"#);
        assert_eq!(config.api_latency_ms, 0);
        assert_eq!(config.default_layout, "default");
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        assert_eq!(AppConfig::from_json("{not json"), AppConfig::default());
    }

    #[test]
    fn test_log_level_filter() {
        let config = AppConfig { log_level: "DEBUG".into(), ..Default::default() };
        assert_eq!(config.log_level_filter(), LevelFilter::Debug);
        let config = AppConfig { log_level: "verbose".into(), ..Default::default() };
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }
}
