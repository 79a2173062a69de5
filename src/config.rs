use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::SonarrError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for one Sonarr instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SonarrConfig {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "apikey")]
    pub api_key: String,
    /// When `true` (the default), a response status outside the documented
    /// success set becomes a [`SonarrError::UnexpectedStatus`]; when `false`,
    /// the call returns `None` instead.
    #[serde(rename = "errorOnUnexpectedStatus", default = "default_true")]
    pub error_on_unexpected_status: bool,
    #[serde(rename = "timeoutSeconds")]
    pub timeout_secs: Option<u64>,
}

fn default_true() -> bool {
    true
}

impl SonarrConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            error_on_unexpected_status: true,
            timeout_secs: None,
        }
    }

    pub fn from_file(path: &str) -> Result<Self, SonarrError> {
        let content = std::fs::read_to_string(path)?;
        let config: SonarrConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Parse and normalize the configured base URL (trailing slashes removed).
    pub fn parsed_base_url(&self) -> Result<Url, SonarrError> {
        let trimmed = self.base_url.trim_end_matches('/');
        Ok(Url::parse(trimmed)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yaml_with_defaults() {
        let config: SonarrConfig = serde_yaml::from_str(
            "baseUrl: http://localhost:8989\napikey: secret\n",
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8989");
        assert_eq!(config.api_key, "secret");
        assert!(config.error_on_unexpected_status);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let config = SonarrConfig::new("http://localhost:8989/", "secret");
        let url = config.parsed_base_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8989/");
        assert_eq!(url.path(), "/");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = SonarrConfig::new("not a url", "secret");
        assert!(matches!(
            config.parsed_base_url(),
            Err(SonarrError::BaseUrl(_))
        ));
    }
}
