//! Frontend configuration
//!
//! Values are fixed at build time (`WFM_API_BASE_URL`) or derived from the
//! page location, then shared read-only for the lifetime of the app.

use crate::shared::query_cache::CachePolicy;
use chrono::Duration;
use once_cell::sync::OnceCell;

/// Port of the API server when no base URL is configured
const DEFAULT_API_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST API without trailing slash
    pub api_base_url: String,
    /// Staleness and eviction windows of the dashboard report cache
    pub dashboard_cache: CachePolicy,
    /// Rows per page on list screens
    pub page_size: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            dashboard_cache: CachePolicy {
                stale_time: Duration::minutes(5),
                gc_time: Duration::minutes(10),
            },
            page_size: 20,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let api_base_url = match option_env!("WFM_API_BASE_URL") {
            Some(url) => normalize_base_url(url),
            None => location_base_url(),
        };
        Self {
            api_base_url,
            ..Self::default()
        }
    }

    /// Absolute URL of an API path ("/reports/dashboard")
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Process-wide configuration, loaded on first use
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// "{protocol}//{hostname}:3000" of the current page, or "" outside a browser
fn location_base_url() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.dashboard_cache, CachePolicy::default());
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_api_url() {
        let config = AppConfig {
            api_base_url: normalize_base_url(" https://api.example.com/v1/ "),
            ..AppConfig::default()
        };
        assert_eq!(
            config.api_url("/reports/dashboard"),
            "https://api.example.com/v1/reports/dashboard"
        );
    }
}
