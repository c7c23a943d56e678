//! Service Configuration
//!
//! Settings come from environment variables. Parsing goes through a lookup
//! function so tests can supply values without touching the process
//! environment.
//!
//! | Variable               | Default              |
//! |------------------------|----------------------|
//! | `PLANT_DATA_PATH`      | built-in seed plants |
//! | `PLANT_OVERRIDES_PATH` | none                 |
//! | `PORT`                 | 3000                 |
//! | `DEFAULT_ZONE`         | 6                    |
//! | `CACHE_TTL_SECS`       | 300                  |
//! | `CACHE_MAX_ENTRIES`    | 10000                |

use crate::error::ConfigError;
use crate::zone::validate_zone;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub plant_data_path: Option<PathBuf>,
    pub overrides_path: Option<PathBuf>,
    pub port: u16,
    pub default_zone: i32,
    pub cache_ttl: Duration,
    pub cache_max_entries: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            plant_data_path: None,
            overrides_path: None,
            port: 3000,
            default_zone: 6,
            cache_ttl: Duration::from_secs(300),
            cache_max_entries: 10_000,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let path = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        let default_zone = validate_zone(number(&lookup, "DEFAULT_ZONE", defaults.default_zone)?)?;
        let ttl_secs = number(&lookup, "CACHE_TTL_SECS", defaults.cache_ttl.as_secs())?;

        Ok(Self {
            plant_data_path: path("PLANT_DATA_PATH"),
            overrides_path: path("PLANT_OVERRIDES_PATH"),
            port: number(&lookup, "PORT", defaults.port)?,
            default_zone,
            cache_ttl: Duration::from_secs(ttl_secs),
            cache_max_entries: number(&lookup, "CACHE_MAX_ENTRIES", defaults.cache_max_entries)?,
        })
    }
}

fn number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            name,
            value: raw.clone(),
        }),
        None => Ok(default),
    }
}
