//! Application configuration
//!
//! `AppConfig` holds the client-side constants of the search contract.
//! `ServerConfig` is read from the environment by the native server. The
//! listen address belongs to `dioxus::serve` (or to the standalone binary's
//! `--port`).

use once_cell::sync::Lazy;

/// Fixed number of results requested per page
pub const PAGE_SIZE: u32 = 10;

/// Embedding model tag attached to every query
pub const EMBEDDING_MODEL: &str = "multimodal";

/// Relative path of the search endpoint
pub const SEARCH_ENDPOINT: &str = "/api/search";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for API calls. Empty in the browser (same origin).
    pub api_base_url: String,
    pub search_endpoint: String,
    pub page_size: u32,
    pub embedding_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            search_endpoint: SEARCH_ENDPOINT.to_string(),
            page_size: PAGE_SIZE,
            embedding_model: EMBEDDING_MODEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Native clients cannot use relative URLs, so they read
    /// `SEARCH_UI_API_BASE` (default: the local server).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("SEARCH_UI_API_BASE")
            .unwrap_or_else(|_| format!("http://127.0.0.1:{}", DEFAULT_PORT));
        Self {
            api_base_url,
            ..Self::default()
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn search_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.search_endpoint.trim_start_matches('/')
        )
    }
}

/// Global client configuration
pub static APP_CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PORT: u16 = 3001;

/// Native server settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Upstream search service that `/api/search` is forwarded to
    pub backend_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_backend(DEFAULT_BACKEND_URL)
    }
}

impl ServerConfig {
    pub fn with_backend(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `SEARCH_BACKEND_URL`, falling back to the default
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup("SEARCH_BACKEND_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| Self::with_backend(&url))
            .unwrap_or_default()
    }

    pub fn upstream_search_url(&self) -> String {
        format!("{}{}", self.backend_url, SEARCH_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.embedding_model, "multimodal");
        assert_eq!(config.search_url(), "/api/search");
    }

    #[test]
    fn test_search_url_with_base() {
        let config = AppConfig {
            api_base_url: "http://localhost:3001/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.search_url(), "http://localhost:3001/api/search");
    }

    #[test]
    fn test_server_config_from_lookup() {
        let config = ServerConfig::from_lookup(|key| match key {
            "SEARCH_BACKEND_URL" => Some("http://search:9000/".to_string()),
            _ => None,
        });
        assert_eq!(config.backend_url, "http://search:9000");
        assert_eq!(config.upstream_search_url(), "http://search:9000/api/search");
    }

    #[test]
    fn test_server_config_ignores_blank_backend() {
        let config = ServerConfig::from_lookup(|key| match key {
            "SEARCH_BACKEND_URL" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config, ServerConfig::default());
    }
}
