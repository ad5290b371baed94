// listing/config.rs - Runtime configuration for the listing client
//
// Values come from the environment (optionally a `.env` file) and fall back
// to defaults that match a local development backend.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::listing::error::{ListingError, Result};
use crate::listing::model::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingConfig {
    /// Base URL the endpoint names are appended to
    pub api_url: String,
    pub debounce: Duration,
    pub page_size: u32,
    pub request_timeout: Duration,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ListingConfig {
    /// Load configuration from `LISTING_*` environment variables
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("LISTING_API_URL").unwrap_or(defaults.api_url);
        let debounce_ms = parse_var(&lookup, "LISTING_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS)?;
        let page_size = parse_var(&lookup, "LISTING_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let timeout_secs = parse_var(&lookup, "LISTING_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        if page_size == 0 {
            return Err(ListingError::Config {
                key: "LISTING_PAGE_SIZE".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(Self {
            api_url,
            debounce: Duration::from_millis(debounce_ms),
            page_size,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ListingError::Config {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}
