//! # Storefront Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Load Order (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`storefront.toml`, given path or the platform config dir)
//! 3. Environment variables (`STOREFRONT_*`)
//! 4. Validation
//!
//! ## Example Configuration File
//! ```toml
//! [content]
//! public_root = "/srv/storefront/public"
//!
//! [site]
//! base_url = "https://tea.example"
//!
//! [logging]
//! filter = "info,storefront=debug"
//! ```
//!
//! Configuration is read-only after initialization, so it is shared
//! without a lock.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use storefront_content::ContentConfig;
use thiserror::Error;
use tracing::{debug, info};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where the content lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSettings {
    /// Directory holding `content/` and `generated/`.
    #[serde(default = "default_public_root")]
    pub public_root: PathBuf,
}

fn default_public_root() -> PathBuf {
    PathBuf::from("./public")
}

impl Default for ContentSettings {
    fn default() -> Self {
        ContentSettings {
            public_root: default_public_root(),
        }
    }
}

/// Public site settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Absolute base for metadata URLs.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3006".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            base_url: default_base_url(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives; `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,storefront=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub content: ContentSettings,

    #[serde(default)]
    pub site: SiteSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing config file is not an error; an unreadable or invalid
    /// one is.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading storefront config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = &self.site.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(format!(
                "Base URL must start with http:// or https://, got: {}",
                url
            )));
        }

        if self.content.public_root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("public_root must not be empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `STOREFRONT_*` overrides from a variable lookup.
    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = var("STOREFRONT_PUBLIC_ROOT") {
            debug!(public_root = %root, "Overriding public root from environment");
            self.content.public_root = PathBuf::from(root);
        }

        if let Some(url) = var("STOREFRONT_BASE_URL") {
            debug!(base_url = %url, "Overriding base URL from environment");
            self.site.base_url = url;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Content location for the content store.
    pub fn content_config(&self) -> ContentConfig {
        ContentConfig::new(&self.content.public_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("storefront-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.content.public_root, PathBuf::from("./public"));
        assert_eq!(config.site.base_url, "http://localhost:3006");
        assert_eq!(config.logging.filter, "info,storefront=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = StorefrontConfig::default();

        config.site.base_url = "ftp://tea.example".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));

        config.site.base_url = "https://tea.example".to_string();
        assert!(config.validate().is_ok());

        config.content.public_root = PathBuf::new();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_file("[site]\nbase_url = \"https://tea.example\"\n");

        let config = StorefrontConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.site.base_url, "https://tea.example");
        assert_eq!(config.content.public_root, PathBuf::from("./public"));
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let path = temp_file("[site\nbase_url = ");

        let result = StorefrontConfig::from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let path = temp_file("[content]\npublic_root = \"/from/file\"\n");
        let mut config = StorefrontConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        config.apply_overrides(|key| match key {
            "STOREFRONT_PUBLIC_ROOT" => Some("/from/env".to_string()),
            _ => None,
        });

        assert_eq!(config.content.public_root, PathBuf::from("/from/env"));
        assert_eq!(config.site.base_url, "http://localhost:3006");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("absent-{}.toml", uuid::Uuid::new_v4()));
        let config = StorefrontConfig::load(Some(path)).unwrap();
        assert_eq!(config.logging.filter, "info,storefront=debug");
    }

    #[test]
    fn test_content_config() {
        let mut config = StorefrontConfig::default();
        config.content.public_root = PathBuf::from("/srv/public");

        assert_eq!(
            config.content_config().products_path(),
            PathBuf::from("/srv/public/generated/products/products.json")
        );
    }
}
