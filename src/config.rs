//! Runtime configuration read from the environment.
//!
//! | Variable        | Default                          |
//! |-----------------|----------------------------------|
//! | `DATABASE_URL`  | `sqlite://atorbazar.db?mode=rwc` |
//! | `PORT`          | `3002`                           |
//! | `PAGE_SIZE`     | `10`                             |
//! | `MAX_PAGE_SIZE` | `100`                            |

use std::fmt;

use crate::pagination::{DEFAULT_LIMIT, DEFAULT_MAX_LIMIT, PaginationSettings};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://atorbazar.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub pagination: PaginationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            pagination: PaginationSettings::default(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric variable is set but cannot be
    /// parsed, or when a page size is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let default_limit = parse_page_size(&lookup, "PAGE_SIZE", DEFAULT_LIMIT)?;
        let max_limit = parse_page_size(&lookup, "MAX_PAGE_SIZE", DEFAULT_MAX_LIMIT)?;

        Ok(Self {
            database_url,
            port,
            pagination: PaginationSettings {
                default_limit: default_limit.min(max_limit),
                max_limit,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_page_size<F>(lookup: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let size = parse_var(lookup, key, default)?;
    if size == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: "0".to_string(),
        });
    }
    Ok(size)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that does not parse.
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { key, value } => write!(f, "invalid value for {key}: '{value}'"),
        }
    }
}

impl std::error::Error for ConfigError {}
