use url::Url;

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";
pub const DEFAULT_COUNTRY: &str = "in";

const API_KEY_VAR: &str = "GNEWS_API_KEY";
const COUNTRY_VAR: &str = "GNEWS_COUNTRY";

/// Process-wide API configuration. Read once at startup and handed to the
/// client read-only; the key lives in the environment, never in code.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub country: String,
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            country: DEFAULT_COUNTRY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads `GNEWS_API_KEY` (required) and `GNEWS_COUNTRY` (optional).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set", API_KEY_VAR)))?;

        let mut config = Self::new(api_key);
        if let Ok(country) = std::env::var(COUNTRY_VAR) {
            if !country.is_empty() {
                config.country = country;
            }
        }
        Ok(config)
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Points the client at a different endpoint; tests use this to talk
    /// to a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid base url {}: {}", base_url, e)))?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }
}
