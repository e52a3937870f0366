pub const BASE_URL_ENV: &str = "BRIEF_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Where the backend lives. Endpoints are joined under `{base_url}/api/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Reads `BRIEF_API_BASE_URL`, falling back to the local dev backend.
    pub fn from_env() -> Self {
        std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }
}
