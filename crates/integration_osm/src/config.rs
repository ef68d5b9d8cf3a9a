//! Overpass client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Overpass POI search client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    /// Base URL for the Overpass API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of POI results returned per search
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Maximum number of retries after the initial attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base backoff delay in milliseconds; doubled per retry
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
}

fn default_base_url() -> String {
    "https://overpass-api.de".to_string()
}

const fn default_timeout_secs() -> u64 {
    25
}

const fn default_max_results() -> usize {
    20
}

const fn default_max_retries() -> u32 {
    3
}

const fn default_retry_base_delay_ms() -> u64 {
    1000
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_results: default_max_results(),
            max_retries: default_max_retries(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
        }
    }
}

impl OverpassConfig {
    /// Create a configuration suitable for testing
    ///
    /// Keeps the retry policy but shrinks the backoff so retry tests run
    /// in milliseconds.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            retry_base_delay_ms: 10,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.max_results == 0 {
            return Err("max_results must be greater than 0".to_string());
        }

        if self.retry_base_delay_ms == 0 {
            return Err("retry_base_delay_ms must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = OverpassConfig::default();
        assert_eq!(config.base_url, "https://overpass-api.de");
        assert_eq!(config.timeout_secs, 25);
        assert_eq!(config.max_results, 20);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_base_delay_ms, 1000);
    }

    #[test]
    fn testing_config_shrinks_backoff() {
        let config = OverpassConfig::for_testing();
        assert_eq!(config.retry_base_delay_ms, 10);
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn validation_success() {
        assert!(OverpassConfig::default().validate().is_ok());
    }

    #[test]
    fn validation_empty_base_url() {
        let config = OverpassConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_zero_max_results() {
        let config = OverpassConfig {
            max_results: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn serialization_roundtrip() {
        let config = OverpassConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: OverpassConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
        assert_eq!(deserialized.max_retries, config.max_retries);
    }
}
