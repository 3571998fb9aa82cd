//! Configuration module
//!
//! Loads configuration from environment variables.

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

use crate::aggregate::{WithdrawalPolicy, DEFAULT_MAX_WITHDRAWALS, DEFAULT_WITHDRAWAL_LIMIT};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue("TELLER_LOG_FORMAT")),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-withdrawal limit of new checking accounts
    pub withdrawal_limit: Decimal,

    /// Lifetime withdrawal count of new checking accounts
    pub max_withdrawals: usize,

    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let withdrawal_limit = match lookup("TELLER_WITHDRAWAL_LIMIT") {
            Some(raw) => Decimal::from_str(raw.trim())
                .ok()
                .filter(|limit| *limit > Decimal::ZERO)
                .ok_or(ConfigError::InvalidValue("TELLER_WITHDRAWAL_LIMIT"))?,
            None => DEFAULT_WITHDRAWAL_LIMIT,
        };

        let max_withdrawals = match lookup("TELLER_MAX_WITHDRAWALS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TELLER_MAX_WITHDRAWALS"))?,
            None => DEFAULT_MAX_WITHDRAWALS,
        };

        let log_format = match lookup("TELLER_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::Text,
        };

        Ok(Self {
            withdrawal_limit,
            max_withdrawals,
            log_format,
        })
    }

    /// Policy given to every account opened from the command loop
    pub fn checking_policy(&self) -> WithdrawalPolicy {
        WithdrawalPolicy::checking(self.withdrawal_limit, self.max_withdrawals)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            withdrawal_limit: DEFAULT_WITHDRAWAL_LIMIT,
            max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
            log_format: LogFormat::Text,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.withdrawal_limit, dec!(500));
        assert_eq!(config.max_withdrawals, 3);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.checking_policy(), WithdrawalPolicy::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("TELLER_WITHDRAWAL_LIMIT", "250.50"),
            ("TELLER_MAX_WITHDRAWALS", "5"),
            ("TELLER_LOG_FORMAT", "JSON"),
        ])
        .unwrap();

        assert_eq!(config.checking_policy(), WithdrawalPolicy::checking(dec!(250.50), 5));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(" Text ".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);

        let err = "yaml".parse::<LogFormat>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("TELLER_LOG_FORMAT")));
        assert_eq!(
            err.to_string(),
            "Invalid value for environment variable: TELLER_LOG_FORMAT"
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("TELLER_WITHDRAWAL_LIMIT", "-1")]),
            Err(ConfigError::InvalidValue("TELLER_WITHDRAWAL_LIMIT"))
        ));
        assert!(matches!(
            load(&[("TELLER_MAX_WITHDRAWALS", "three")]),
            Err(ConfigError::InvalidValue("TELLER_MAX_WITHDRAWALS"))
        ));
        assert!(matches!(
            load(&[("TELLER_LOG_FORMAT", "xml")]),
            Err(ConfigError::InvalidValue("TELLER_LOG_FORMAT"))
        ));
    }
}
