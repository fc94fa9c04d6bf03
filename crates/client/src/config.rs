//! Client configuration
//!
//! The backend base URL comes from, in priority order: the
//! `HOSTELDESK_API_URL` environment variable, a `hosteldesk.toml` file
//! (working directory first, then the platform config dir), and finally
//! the compiled-in default.

use hosteldesk_core::{DeskError, DeskResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "HOSTELDESK_API_URL";

/// Config file name looked up in the working directory and config dir
pub const CONFIG_FILE: &str = "hosteldesk.toml";

const DEFAULT_BASE_URL: &str = "https://hostel-management-system-3-pbzc.onrender.com/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`crate::ApiClient`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration with the standard lookup order
    pub fn load() -> Self {
        let mut config = Self::discover_file()
            .and_then(|path| match Self::from_file(&path) {
                Ok(c) => Some(c),
                Err(e) => {
                    tracing::warn!("ignoring invalid config file: {e}");
                    None
                }
            })
            .unwrap_or_default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        config.normalize();
        config
    }

    /// Parse a specific TOML config file
    pub fn from_file(path: &Path) -> DeskResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| DeskError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config: ClientConfig =
            toml::from_str(&raw).map_err(|e| DeskError::InvalidConfig(e.to_string()))?;
        config.normalize();
        Ok(config)
    }

    /// First existing config file in the lookup order
    fn discover_file() -> Option<PathBuf> {
        let cwd = PathBuf::from(CONFIG_FILE);
        if cwd.exists() {
            return Some(cwd);
        }
        let shared = dirs::config_dir()?.join("hosteldesk").join(CONFIG_FILE);
        shared.exists().then_some(shared)
    }

    fn normalize(&mut self) {
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        if self.timeout_secs == 0 {
            self.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.base_url.starts_with("https://"));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_from_file_normalizes_trailing_slash() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://localhost:4000/api/\"").unwrap();
        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:4000/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not a string").unwrap();
        let err = ClientConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, DeskError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_timeout_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 0").unwrap();
        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 30);
    }
}
