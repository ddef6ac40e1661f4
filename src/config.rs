//! Runtime configuration.
//!
//! The service address is fixed per build mode and chosen once at startup.
//! `HEALTHDESK_ENV=production` selects the production service; anything
//! else, including an unset variable, selects the local development service.

/// Environment variable holding the build mode.
pub const BUILD_MODE_ENV: &str = "HEALTHDESK_ENV";

/// Service address used in production.
pub const PRODUCTION_BASE_URL: &str = "https://your-api-domain.com";

/// Service address used everywhere else.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000";

/// Which service deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    Production,
    #[default]
    Development,
}

impl BuildMode {
    /// Interpret a raw environment value.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => BuildMode::Production,
            _ => BuildMode::Development,
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            BuildMode::Production => PRODUCTION_BASE_URL,
            BuildMode::Development => DEVELOPMENT_BASE_URL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BuildMode::Production => "production",
            BuildMode::Development => "development",
        }
    }
}

/// Resolved client configuration.
///
/// # Example
///
/// ```
/// use healthdesk::config::{AppConfig, BuildMode};
///
/// let config = AppConfig::new(BuildMode::Development);
/// assert_eq!(config.base_url, "http://localhost:8000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub build_mode: BuildMode,
    /// Base address of the records service, without a trailing slash
    pub base_url: String,
}

impl AppConfig {
    pub fn new(build_mode: BuildMode) -> Self {
        Self {
            build_mode,
            base_url: build_mode.base_url().to_string(),
        }
    }

    /// Read the build mode from `HEALTHDESK_ENV`.
    pub fn from_env() -> Self {
        let value = std::env::var(BUILD_MODE_ENV).ok();
        Self::new(BuildMode::from_env_value(value.as_deref()))
    }

    /// Point the client at another address (tests, local mocks).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(BuildMode::default())
    }
}
