//! Configuration management for repolist-core

use crate::error::{Error, Result};
use crate::github::USER_AGENT;
use crate::types::{ErrorPolicy, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub settings
    pub github: GitHubConfig,

    /// Render settings
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save configuration to file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Get default config path
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("repolist").join("config.toml"))
    }

    /// Load config from default path or create default
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(Some(&path))
    }

    /// Load from an explicit path if given, else the default path.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// GitHub configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API base URL
    pub api_url: String,

    /// Web base URL used for outbound links
    pub web_url: String,

    /// User-Agent header sent to the API
    pub user_agent: String,

    /// Fetch timeout in seconds (0 = wait forever)
    pub timeout_secs: u64,
}

impl GitHubConfig {
    /// Fetch timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            web_url: "https://github.com".to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: 0,
        }
    }
}

/// Render configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Account used in outbound links (empty = the listed user)
    pub link_owner: String,

    /// Ordering applied before selection
    pub sort: SortOrder,

    /// What to show when the fetch fails
    pub error_policy: ErrorPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.timeout(), None);
        assert_eq!(config.render.sort, SortOrder::Name);
        assert_eq!(config.render.error_policy, ErrorPolicy::KeepLoading);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.github.web_url, config.github.web_url);
        assert!(toml_str.contains(r#"error_policy = "keep-loading""#));
    }

    #[test]
    fn test_partial_config() {
        let parsed: Config = toml::from_str(
            r#"
            [github]
            timeout_secs = 10

            [render]
            link_owner = "Altoros"
            sort = "api"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.github.api_url, "https://api.github.com");
        assert_eq!(parsed.github.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(parsed.render.sort, SortOrder::Api);
        assert_eq!(parsed.render.link_owner, "Altoros");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.render.error_policy = ErrorPolicy::ShowError;
        config.save(&path).unwrap();

        let loaded = Config::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.render.error_policy, ErrorPolicy::ShowError);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.github.web_url, "https://github.com");
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "github = 3").unwrap();

        assert!(matches!(Config::load(&path), Err(Error::Config(_))));
    }
}
