use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Application configuration wrapper.
///
/// Resolution order for the server URL: the `FORUM_API_URL` environment
/// variable, then `config.toml` in the platform config directory, then the
/// built-in default.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        if let Ok(server_url) = std::env::var("FORUM_API_URL") {
            let app = AppConfig::builder()
                .server_url(server_url)
                .build()
                .unwrap_or_default();
            return Self { app };
        }
        let app = Self::config_file_path()
            .and_then(|path| AppConfig::load_from(path).ok())
            .unwrap_or_default();
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default resolution
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    fn config_file_path() -> Option<std::path::PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("vibeforum");
        path.push("config.toml");
        path.exists().then_some(path)
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_builder() {
        let config = Config::with_builder(
            AppConfig::builder().server_url("http://10.0.0.5:8000".to_string()),
        )
        .unwrap();
        assert_eq!(config.server_url(), "http://10.0.0.5:8000");
    }

    #[test]
    fn test_default_server_url_without_overrides() {
        let config = Config::with_builder(AppConfig::builder()).unwrap();
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_api_url() {
        let config = Config::with_builder(AppConfig::builder()).unwrap();
        let url = config.api_url("/token");
        assert_eq!(url, "http://127.0.0.1:8000/token");
    }
}
