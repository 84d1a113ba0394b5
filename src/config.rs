use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{Result, UserDeskError};

pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users";

const ENDPOINT_ENV: &str = "USERDESK_ENDPOINT";
const API_KEY_ENV: &str = "USERDESK_API_KEY";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| UserDeskError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| UserDeskError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "userdesk")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(UserDeskError::NoConfigDir)
    }

    /// Directory endpoint, env var first, then config file, then the demo service.
    pub fn endpoint(&self) -> Result<Url> {
        let raw = std::env::var(ENDPOINT_ENV)
            .ok()
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Url::parse(&raw).map_err(|source| UserDeskError::InvalidEndpoint { url: raw, source })
    }

    /// Get API key with env var taking precedence over config file
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .or_else(|| self.api_key.clone())
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert!(config.endpoint.is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
endpoint = "http://localhost:8080/api/users"
api_key = "reqres-free-v1"
"#,
        )
        .unwrap();
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:8080/api/users")
        );
        assert_eq!(config.api_key.as_deref(), Some("reqres-free-v1"));
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(Config::parse("endpoint = 42").is_err());
    }

    #[test]
    fn test_invalid_endpoint_is_reported() {
        if std::env::var(ENDPOINT_ENV).is_ok() {
            return;
        }
        let config = Config {
            endpoint: Some("not a url".to_string()),
            api_key: None,
        };
        assert!(matches!(
            config.endpoint(),
            Err(UserDeskError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_default_endpoint() {
        if std::env::var(ENDPOINT_ENV).is_ok() {
            return;
        }
        let url = Config::default().endpoint().unwrap();
        assert_eq!(url.as_str(), DEFAULT_ENDPOINT);
    }
}
