//! # Endpoint Configuration
//!
//! Where the two base URLs come from.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MERIDIAN_API_URL=https://erp.example.com/api/v1                    │
//! │     MERIDIAN_FORECAST_URL=https://forecast.example.com                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/meridian-erp/endpoints.toml (Linux)                      │
//! │     ~/Library/Application Support/com.meridian.erp/… (macOS)           │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:8080/api/v1 and http://localhost:8000             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # endpoints.toml
//! [backend]
//! url = "http://localhost:8080/api/v1"
//!
//! [forecasting]
//! url = "http://localhost:8000"
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default ERP backend base URL (local dev server).
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Default forecasting sidecar base URL.
pub const DEFAULT_FORECAST_URL: &str = "http://localhost:8000";

/// Config file name under the platform config directory.
const CONFIG_FILE: &str = "endpoints.toml";

/// Resolved endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// ERP backend base URL, including the `/api/v1` prefix.
    pub api_url: String,
    /// Forecasting sidecar base URL.
    pub forecast_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            api_url: DEFAULT_API_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

/// On-disk TOML shape. Both sections optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    backend: EndpointSection,
    #[serde(default)]
    forecasting: EndpointSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct EndpointSection {
    url: Option<String>,
}

impl ApiConfig {
    /// Loads configuration: env vars override the TOML file, which
    /// overrides the built-in defaults. Never fails — a missing or
    /// malformed file just means defaults.
    pub fn load() -> Self {
        let file = Self::config_file_path()
            .and_then(|path| Self::read_file(&path))
            .unwrap_or_default();

        let api_url = std::env::var("MERIDIAN_API_URL")
            .ok()
            .or(file.backend.url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let forecast_url = std::env::var("MERIDIAN_FORECAST_URL")
            .ok()
            .or(file.forecasting.url)
            .unwrap_or_else(|| DEFAULT_FORECAST_URL.to_string());

        let config = ApiConfig { api_url, forecast_url };
        debug!(api_url = %config.api_url, forecast_url = %config.forecast_url, "endpoint config resolved");
        config
    }

    fn config_file_path() -> Option<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "meridian", "erp")?;
        Some(proj_dirs.config_dir().join(CONFIG_FILE))
    }

    fn read_file(path: &Path) -> Option<ConfigFile> {
        let raw = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&raw) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring malformed endpoints.toml");
                None
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080/api/v1");
        assert_eq!(config.forecast_url, "http://localhost:8000");
    }

    #[test]
    fn test_toml_shape_parses() {
        let parsed: ConfigFile = toml::from_str(
            r#"
            [backend]
            url = "https://erp.example.com/api/v1"

            [forecasting]
            url = "https://forecast.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.backend.url.as_deref(), Some("https://erp.example.com/api/v1"));
        assert_eq!(parsed.forecasting.url.as_deref(), Some("https://forecast.example.com"));
    }

    #[test]
    fn test_partial_toml_is_fine() {
        let parsed: ConfigFile = toml::from_str("[backend]\nurl = \"http://10.0.0.5:8080/api/v1\"\n").unwrap();
        assert!(parsed.forecasting.url.is_none());
    }
}
