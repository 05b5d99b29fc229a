//! Upstream API configuration.
//!
//! The base URL and the two API keys come from the environment at process
//! start. `APP_ENV=production` selects the live key, anything else the test key.

use crate::shared::error::LookupError;
use crate::shared::Result;

pub const BASE_URL_VAR: &str = "NEXON_OPEN_API_URL";
pub const LIVE_KEY_VAR: &str = "NEXON_OPEN_API_LIVE_KEY";
pub const TEST_KEY_VAR: &str = "NEXON_OPEN_API_TEST_KEY";
pub const PROFILE_VAR: &str = "APP_ENV";

const DEFAULT_BASE_URL: &str = "https://open.api.nexon.com";
const PRODUCTION_PROFILE: &str = "production";

/// Which credential set the process runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Production,
    Development,
}

impl Profile {
    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(PRODUCTION_PROFILE) => Profile::Production,
            _ => Profile::Development,
        }
    }

    fn key_var(self) -> &'static str {
        match self {
            Profile::Production => LIVE_KEY_VAR,
            Profile::Development => TEST_KEY_VAR,
        }
    }
}

/// Resolved upstream settings
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
}

impl ApiConfig {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self { base_url, api_key }
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let profile = Profile::from_value(get(PROFILE_VAR).as_deref());
        let key_var = profile.key_var();

        let api_key = get(key_var).ok_or_else(|| LookupError::Config {
            message: format!("{} is not set ({:?} profile)", key_var, profile),
            hint: format!(
                "Export {} with your NEXON Open API key, or set {}={} to use {}",
                key_var,
                PROFILE_VAR,
                if profile == Profile::Production { "development" } else { PRODUCTION_PROFILE },
                if profile == Profile::Production { TEST_KEY_VAR } else { LIVE_KEY_VAR },
            ),
        })?;

        let base_url = get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        tracing::debug!(?profile, base_url = %base_url, "loaded API configuration");

        Ok(Self::new(base_url, api_key.trim().to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
