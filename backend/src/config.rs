//! Runtime settings, read once from the environment at startup.
//!
//! Every setting has a default; unset variables are logged and fall back to
//! it, while a value that is set but cannot be parsed aborts startup.

use log::info;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_STORE_PATH: &str = "tmp/feedback.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where accepted feedback is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Csv(PathBuf),
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    /// Largest accepted JSON body, in bytes.
    pub json_limit: usize,
    pub open_browser: bool,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match try_load::<String>(&lookup, "FEEDBACK_STORE", "csv")?.as_str() {
            "csv" => StoreBackend::Csv(try_load(&lookup, "FEEDBACK_STORE_PATH", DEFAULT_STORE_PATH)?),
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    key: "FEEDBACK_STORE",
                    value: other.to_string(),
                    reason: "expected 'csv' or 'memory'".to_string(),
                })
            }
        };

        Ok(Self {
            host: try_load(&lookup, "FEEDBACK_HOST", "127.0.0.1")?,
            port: try_load(&lookup, "FEEDBACK_PORT", "8080")?,
            store,
            json_limit: try_load(&lookup, "FEEDBACK_JSON_LIMIT", "16384")?,
            open_browser: try_load(&lookup, "FEEDBACK_OPEN_BROWSER", "false")?,
        })
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.store, StoreBackend::Csv(PathBuf::from("tmp/feedback.csv")));
        assert_eq!(config.json_limit, 16 * 1024);
        assert!(!config.open_browser);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("FEEDBACK_HOST", "0.0.0.0"),
            ("FEEDBACK_PORT", " 9000 "),
            ("FEEDBACK_STORE_PATH", "/var/lib/feedback/all.csv"),
            ("FEEDBACK_OPEN_BROWSER", "true"),
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.store,
            StoreBackend::Csv(PathBuf::from("/var/lib/feedback/all.csv"))
        );
        assert!(config.open_browser);
    }

    #[test]
    fn memory_store_can_be_selected() {
        let config = load(&[("FEEDBACK_STORE", "memory")]).unwrap();
        assert_eq!(config.store, StoreBackend::Memory);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = load(&[("FEEDBACK_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid FEEDBACK_PORT value 'eighty'"));

        let err = load(&[("FEEDBACK_STORE", "s3")]).unwrap_err();
        assert!(err.to_string().contains("expected 'csv' or 'memory'"));
    }
}
