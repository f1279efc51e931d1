//! Build-time application configuration.
//!
//! Deployment-specific values (backend base URL, decorative rain mode, icon
//! asset list) are read from compile-time environment variables so every
//! bundle is self-contained; unset values fall back to the development
//! defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::sky::RainMode;

/// Default backend base URL for local development.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Default falling-icon assets served from `/icons/`.
const DEFAULT_ICON_FILES: &str = "shopping-cart-01-svgrepo-com.svg,\
shopping-cart-round-1137-svgrepo-com.svg,delivery-truck.svg,inventory-box.svg,\
warehouse.svg,barcode.svg,business-bag-that-can-be-used-for-svgrepo-com.svg,\
business-suitcase-svgrepo-com.svg";

/// Application configuration resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend API base URL, without a trailing slash.
    pub api_base_url: String,
    /// Which decorative login-page animation to run.
    pub rain_mode: RainMode,
    /// Icon file names for the falling-icon animation.
    pub icon_files: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            rain_mode: RainMode::default(),
            icon_files: parse_icon_list(DEFAULT_ICON_FILES),
        }
    }
}

impl AppConfig {
    /// Resolve the configuration from compile-time environment overrides.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("STOCKFLOW_API_BASE_URL")
                .map_or(defaults.api_base_url, |url| url.trim_end_matches('/').to_owned()),
            rain_mode: option_env!("STOCKFLOW_RAIN_MODE")
                .map_or(defaults.rain_mode, RainMode::parse),
            icon_files: option_env!("STOCKFLOW_ICON_FILES")
                .map_or(defaults.icon_files, parse_icon_list),
        }
    }
}

/// Split a comma-separated icon list, dropping blanks and surrounding space.
#[must_use]
pub fn parse_icon_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
