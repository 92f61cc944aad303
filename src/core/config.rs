//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

use crate::core::demo::DEFAULT_INBOX_CAPACITY;

/// Default timeout for webhook calls, in seconds
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where accepted demo requests are forwarded as JSON
    /// Example: https://hooks.example.com/demo-requests
    pub demo_webhook_url: Option<String>,

    /// Timeout for the webhook call
    pub demo_webhook_timeout: Duration,

    /// Most demo requests kept in memory before the oldest are dropped
    pub demo_inbox_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let demo_webhook_url = lookup("DEMO_WEBHOOK_URL").filter(|url| !url.trim().is_empty());

        let timeout_secs = lookup("DEMO_WEBHOOK_TIMEOUT_SECS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_WEBHOOK_TIMEOUT_SECS);

        let demo_inbox_capacity = lookup("DEMO_INBOX_CAPACITY")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(DEFAULT_INBOX_CAPACITY);

        Self {
            demo_webhook_url,
            demo_webhook_timeout: Duration::from_secs(timeout_secs),
            demo_inbox_capacity,
        }
    }

    /// Check if webhook forwarding is configured
    pub fn has_demo_webhook(&self) -> bool {
        self.demo_webhook_url.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_webhook_url: None,
            demo_webhook_timeout: Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS),
            demo_inbox_capacity: DEFAULT_INBOX_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_with_no_vars() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert!(config.demo_webhook_url.is_none());
        assert!(!config.has_demo_webhook());
        assert_eq!(config.demo_webhook_timeout, Duration::from_secs(10));
        assert_eq!(config.demo_inbox_capacity, DEFAULT_INBOX_CAPACITY);
    }

    #[test]
    fn test_config_with_webhook() {
        let config = Config::from_lookup(lookup_from(&[
            ("DEMO_WEBHOOK_URL", "https://hooks.example.com/demo"),
            ("DEMO_WEBHOOK_TIMEOUT_SECS", "3"),
        ]));

        assert_eq!(
            config.demo_webhook_url.as_deref(),
            Some("https://hooks.example.com/demo")
        );
        assert!(config.has_demo_webhook());
        assert_eq!(config.demo_webhook_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_webhook_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("DEMO_WEBHOOK_URL", "   ")]));
        assert!(!config.has_demo_webhook());
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        for value in ["abc", "0", "-5", ""] {
            let config =
                Config::from_lookup(lookup_from(&[("DEMO_WEBHOOK_TIMEOUT_SECS", value)]));
            assert_eq!(
                config.demo_webhook_timeout,
                Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS),
                "value {value:?}"
            );
        }
    }

    #[test]
    fn test_inbox_capacity() {
        let config = Config::from_lookup(lookup_from(&[("DEMO_INBOX_CAPACITY", " 250 ")]));
        assert_eq!(config.demo_inbox_capacity, 250);

        for value in ["0", "lots", "-1"] {
            let config = Config::from_lookup(lookup_from(&[("DEMO_INBOX_CAPACITY", value)]));
            assert_eq!(config.demo_inbox_capacity, DEFAULT_INBOX_CAPACITY, "value {value:?}");
        }
    }

    #[test]
    fn test_config_from_env_has_usable_limits() {
        let config = Config::from_env();
        assert!(config.demo_webhook_timeout > Duration::ZERO);
        assert!(config.demo_inbox_capacity > 0);
    }

    #[test]
    fn test_config_default_has_no_webhook() {
        let config = Config::default();
        assert!(!config.has_demo_webhook());
    }
}
