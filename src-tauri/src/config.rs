use keyring::Entry;
use serde::Serialize;
use tracing::{info, warn};
use url::Url;

use crate::error::PopcornError;

/// Keychain service under which the OMDb API key is stored.
pub const OMDB_KEY_SERVICE: &str = "usepopcorn-omdb-api";
/// Keychain account name shared by all usePopcorn entries.
pub const KEYCHAIN_USER: &str = "usepopcorn";

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
pub const API_KEY_ENV: &str = "OMDB_API_KEY";
pub const BASE_URL_ENV: &str = "OMDB_BASE_URL";

/// Queries shorter than this (in characters, after trimming) never hit the network.
pub const MIN_QUERY_LEN: usize = 3;

/// Runtime configuration, resolved once when the app starts and handed to
/// the services that need it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
    pub min_query_len: usize,
}

impl AppConfig {
    pub fn new(api_key: Option<String>, base_url: &str) -> Result<Self, PopcornError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| PopcornError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;
        Ok(Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url,
            min_query_len: MIN_QUERY_LEN,
        })
    }

    /// Resolve configuration from the environment, falling back to the keychain
    /// for the API key. A missing key is not an error: searches will report it.
    pub fn load() -> Result<Self, PopcornError> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_key = match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => {
                info!("Using OMDb API key from {}", API_KEY_ENV);
                Some(key)
            }
            _ => match read_keychain_key() {
                Ok(key) => key,
                Err(e) => {
                    warn!("Could not read OMDb API key from keychain: {}", e);
                    None
                }
            },
        };

        if api_key.is_none() {
            warn!("No OMDb API key configured; searches will fail until one is set");
        }

        Self::new(api_key, &base_url)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The parts of the configuration the frontend is allowed to see.
    pub fn status(&self) -> ConfigStatus {
        ConfigStatus {
            api_key_set: self.has_api_key(),
            base_url: self.base_url.to_string(),
            min_query_len: self.min_query_len,
        }
    }
}

/// Configuration as reported to the settings page and search box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigStatus {
    pub api_key_set: bool,
    pub base_url: String,
    pub min_query_len: usize,
}

pub fn keychain_entry() -> Result<Entry, PopcornError> {
    Entry::new(OMDB_KEY_SERVICE, KEYCHAIN_USER).map_err(|e| PopcornError::Keychain(e.to_string()))
}

fn read_keychain_key() -> Result<Option<String>, PopcornError> {
    match keychain_entry()?.get_password() {
        Ok(key) => Ok(Some(key)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(PopcornError::Keychain(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parses_base_url() {
        let config = AppConfig::new(Some("abc123".to_string()), DEFAULT_BASE_URL).unwrap();
        assert_eq!(config.base_url.host_str(), Some("www.omdbapi.com"));
        assert_eq!(config.min_query_len, 3);
        assert!(config.has_api_key());
    }

    #[test]
    fn test_blank_api_key_treated_as_missing() {
        let config = AppConfig::new(Some("   ".to_string()), DEFAULT_BASE_URL).unwrap();
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_status_reports_query_threshold() {
        let config = AppConfig::new(None, "http://localhost:8080/").unwrap();
        let status = config.status();
        assert!(!status.api_key_set);
        assert_eq!(status.base_url, "http://localhost:8080/");
        assert_eq!(status.min_query_len, MIN_QUERY_LEN);

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["min_query_len"], 3);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = AppConfig::new(None, "not a url").unwrap_err();
        assert!(err.to_string().contains("Invalid base URL"));
    }
}
