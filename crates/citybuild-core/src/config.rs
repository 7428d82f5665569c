//! Client settings read from the page URL.
//!
//! Values are JSON-encoded query parameters, e.g. `?onboarding=true`. The log
//! filter is also accepted as a bare directive string (`?log=debug`).

use serde::de::DeserializeOwned;

pub const LOG_KEY: &str = "log";
pub const ONBOARDING_KEY: &str = "onboarding";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
    /// Whether onboarding is visible before the host says otherwise.
    pub onboarding: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            onboarding: false,
        }
    }
}

impl ClientConfig {
    /// Builds a config from a key lookup, typically backed by `URLSearchParams`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let log_filter = lookup(LOG_KEY)
            .map(|raw| decode_value::<String>(&raw).unwrap_or(raw))
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        let onboarding = lookup(ONBOARDING_KEY)
            .and_then(|raw| decode_value(&raw))
            .unwrap_or(defaults.onboarding);

        Self {
            log_filter,
            onboarding,
        }
    }
}

fn decode_value<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(
        pairs: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_reads_values() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("log", "debug"),
            ("onboarding", "true"),
        ]));
        assert_eq!(config.log_filter, "debug");
        assert!(config.onboarding);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[("onboarding", "maybe"), ("log", "")]));
        assert!(!config.onboarding);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_directive_with_target_kept_verbatim() {
        // URLSearchParams hands over already-decoded values.
        let config = ClientConfig::from_lookup(lookup_from(&[("log", "citybuild=debug")]));
        assert_eq!(config.log_filter, "citybuild=debug");
    }

    #[test]
    fn test_json_encoded_log_filter() {
        let config = ClientConfig::from_lookup(|key| {
            (key == LOG_KEY).then(|| "\"warn\"".to_string())
        });
        assert_eq!(config.log_filter, "warn");
    }
}
