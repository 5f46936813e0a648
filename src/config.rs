use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{DEFAULT_ASSETS_DIR, DEFAULT_STARTING_COINS};
use crate::utils::HelplineError;

pub const ENV_STARTING_COINS: &str = "HELPLINE_STARTING_COINS";
pub const ENV_HISTORY_LIMIT: &str = "HELPLINE_HISTORY_LIMIT";
pub const ENV_ASSETS_DIR: &str = "HELPLINE_ASSETS_DIR";

/// Startup settings, read once from `.env` and the process environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub starting_coins: u32,
    /// Maximum history entries kept; `None` keeps everything
    pub history_limit: Option<usize>,
    pub assets_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            starting_coins: DEFAULT_STARTING_COINS,
            history_limit: None,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read settings from the environment
    pub fn from_env() -> Result<Self, HelplineError> {
        match dotenvy::dotenv() {
            Ok(path) => log::info!("[Config] Loaded {}", path.display()),
            Err(e) if e.not_found() => log::debug!("[Config] No .env file, using environment"),
            Err(e) => log::warn!("[Config] Ignoring unreadable .env: {}", e),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HelplineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(coins) = parse_var::<u32>(&lookup, ENV_STARTING_COINS)? {
            config.starting_coins = coins;
        }

        if let Some(limit) = parse_var::<usize>(&lookup, ENV_HISTORY_LIMIT)? {
            if limit == 0 {
                return Err(HelplineError::Config {
                    key: ENV_HISTORY_LIMIT.to_string(),
                    value: limit.to_string(),
                });
            }
            config.history_limit = Some(limit);
        }

        if let Some(dir) = lookup(ENV_ASSETS_DIR).filter(|v| !v.trim().is_empty()) {
            config.assets_dir = PathBuf::from(dir.trim());
        }

        log::info!(
            "[Config] coins={} history_limit={:?} assets={}",
            config.starting_coins,
            config.history_limit,
            config.assets_dir.display()
        );

        Ok(config)
    }
}

/// Parse an optional variable; blank values count as unset
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, HelplineError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| HelplineError::Config {
            key: key.to_string(),
            value: raw,
        }),
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
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.starting_coins, 100);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_STARTING_COINS, " 40 "),
            (ENV_HISTORY_LIMIT, "5"),
            (ENV_ASSETS_DIR, "/opt/helpline/icons"),
        ]))
        .unwrap();
        assert_eq!(config.starting_coins, 40);
        assert_eq!(config.history_limit, Some(5));
        assert_eq!(config.assets_dir, PathBuf::from("/opt/helpline/icons"));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_STARTING_COINS, ""),
            (ENV_ASSETS_DIR, "   "),
        ]))
        .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_coins_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_STARTING_COINS, "-5")])).unwrap_err();
        assert_eq!(
            err,
            HelplineError::Config {
                key: ENV_STARTING_COINS.to_string(),
                value: "-5".to_string(),
            }
        );
    }

    #[test]
    fn test_zero_history_limit_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_HISTORY_LIMIT, "0")])).unwrap_err();
        assert!(matches!(err, HelplineError::Config { ref key, .. } if key == ENV_HISTORY_LIMIT));
    }
}
