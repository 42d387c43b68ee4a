// Runtime configuration for the uploader. Values never change during a run;
// tests and embedders use the `with_*` setters to point the client at a
// local server or lower the size ceiling.

/// Largest file accepted for upload: 100 MiB.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Public GitHub REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "GUP_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploaderConfig {
    pub api_base_url: String,
    pub max_file_size: u64,
    pub user_agent: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            max_file_size: MAX_FILE_SIZE,
            user_agent: format!("gup/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl UploaderConfig {
    /// Defaults, with the base URL taken from `GUP_API_URL` when it is set
    /// and non-empty.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_api_base_url(url),
            _ => config,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
