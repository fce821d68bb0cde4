use crate::locale::Locale;
use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use std::{env, time::Duration};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://lifemanager.bieda.it";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CACHE_TTL_SECS: u64 = 60;
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_base_url: String,
    pub locale: Locale,
    pub utc_offset: FixedOffset,
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_URL.to_string(),
            locale: Locale::En,
            utc_offset: Utc.fix(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("PORT") {
            config.port = value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "a port number",
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup("HABIT_API_URL") {
            let trimmed = value.trim().trim_end_matches('/');
            if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    name: "HABIT_API_URL",
                    expected: "an http(s) URL",
                    value,
                });
            }
            config.api_base_url = trimmed.to_string();
        }

        if let Some(value) = lookup("APP_LOCALE") {
            config.locale = Locale::parse(&value).ok_or_else(|| ConfigError::Invalid {
                name: "APP_LOCALE",
                expected: "one of en, pl",
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup("APP_TZ_OFFSET_MINUTES") {
            config.utc_offset = value
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|minutes| minutes.abs() <= MAX_OFFSET_MINUTES)
                .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
                .ok_or_else(|| ConfigError::Invalid {
                    name: "APP_TZ_OFFSET_MINUTES",
                    expected: "minutes within +/-840",
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup("HABIT_CACHE_TTL_SECS") {
            let secs = value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "HABIT_CACHE_TTL_SECS",
                expected: "a number of seconds",
                value: value.clone(),
            })?;
            config.cache_ttl = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Today's calendar day in the display offset.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.utc_offset).date_naive()
    }
}
