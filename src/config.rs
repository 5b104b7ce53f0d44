//! Client Configuration
//!
//! Backend location and browser storage keys.

/// Backend base URL used when `TASKPAD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// localStorage key holding the access token
pub const TOKEN_STORAGE_KEY: &str = "access";

/// REST API location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build-time configuration (`TASKPAD_API_URL`), falling back to the local dev server
    pub fn from_env() -> Self {
        Self::new(option_env!("TASKPAD_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/tasks/`
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
