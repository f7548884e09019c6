//! # Content Store
//!
//! Access to the content directory and repository handles over it.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ContentStore                                    │
//! │                                                                         │
//! │   ContentConfig { public_root, content_dir, products_file }            │
//! │                              │                                          │
//! │                              ▼                                          │
//! │   read_json::<T>(relative) ──► tokio::fs::read_to_string               │
//! │                              └─► json::parse_lenient                    │
//! │                                                                         │
//! │   Repositories (cheap clones of the store):                            │
//! │   ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐  │
//! │   │ site()       │ │ hero()       │ │ sections()   │ │ catalog()    │  │
//! │   │ SiteRepo     │ │ HeroRepo     │ │ SectionRepo  │ │ CatalogRepo  │  │
//! │   └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::error::{ContentError, ContentResult};
use crate::json;
use crate::repository::catalog::CatalogRepository;
use crate::repository::hero::HeroRepository;
use crate::repository::section::SectionRepository;
use crate::repository::site::SiteRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Content location.
///
/// ## Example
/// ```rust
/// use storefront_content::ContentConfig;
///
/// let config = ContentConfig::new("./public");
/// assert!(config.content_path("site.json").ends_with("content/site.json"));
/// ```
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Directory holding `content/` and `generated/`.
    pub public_root: PathBuf,

    /// Editable content, relative to `public_root`.
    /// Default: `content`
    pub content_dir: PathBuf,

    /// Generated product catalog, relative to `public_root`.
    /// Default: `generated/products/products.json`
    pub products_file: PathBuf,
}

impl ContentConfig {
    /// Creates a configuration with the default layout under `public_root`.
    pub fn new(public_root: impl Into<PathBuf>) -> Self {
        ContentConfig {
            public_root: public_root.into(),
            content_dir: PathBuf::from("content"),
            products_file: PathBuf::from("generated/products/products.json"),
        }
    }

    /// Sets the content directory.
    pub fn content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = dir.into();
        self
    }

    /// Sets the catalog file.
    pub fn products_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.products_file = file.into();
        self
    }

    /// Absolute-ish path of a file inside the content directory.
    pub fn content_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.public_root.join(&self.content_dir).join(relative)
    }

    /// Path of the catalog file.
    pub fn products_path(&self) -> PathBuf {
        self.public_root.join(&self.products_file)
    }
}

// =============================================================================
// Content Store
// =============================================================================

/// Main content handle providing repository access.
///
/// Cloning is cheap: the configuration is shared.
#[derive(Debug, Clone)]
pub struct ContentStore {
    config: Arc<ContentConfig>,
}

impl ContentStore {
    /// Creates a store over the given content location.
    ///
    /// Nothing is read until a repository asks for it; missing content is
    /// handled per file.
    pub fn new(config: ContentConfig) -> Self {
        ContentStore {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Reads and parses a JSON file.
    pub async fn read_json<T: DeserializeOwned>(&self, path: &Path) -> ContentResult<T> {
        debug!(path = %path.display(), "Reading content file");

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ContentError::read(path, e))?;

        json::parse_lenient(path, &text)
    }

    /// Reads a JSON file inside the content directory.
    pub async fn read_content<T: DeserializeOwned>(&self, relative: &str) -> ContentResult<T> {
        let path = self.config.content_path(relative);
        self.read_json(&path).await
    }

    // =========================================================================
    // Repository Access
    // =========================================================================

    /// Site, contacts, header and footer content.
    pub fn site(&self) -> SiteRepository {
        SiteRepository::new(self.clone())
    }

    /// Hero banner content.
    pub fn hero(&self) -> HeroRepository {
        HeroRepository::new(self.clone())
    }

    /// Page section content.
    pub fn sections(&self) -> SectionRepository {
        SectionRepository::new(self.clone())
    }

    /// Generated product catalog.
    pub fn catalog(&self) -> CatalogRepository {
        CatalogRepository::new(self.clone())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Temporary content directories for async tests.

    use std::path::{Path, PathBuf};

    use super::{ContentConfig, ContentStore};

    /// A public root under the system temp dir, removed on drop.
    pub struct TempContent {
        root: PathBuf,
    }

    impl TempContent {
        pub fn new() -> Self {
            let root = std::env::temp_dir().join(format!("storefront-content-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&root).unwrap();
            TempContent { root }
        }

        /// Writes a file relative to the public root.
        pub fn write(&self, relative: &str, contents: &str) -> &Self {
            let path = self.root.join(relative);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, contents).unwrap();
            self
        }

        pub fn root(&self) -> &Path {
            &self.root
        }

        pub fn store(&self) -> ContentStore {
            ContentStore::new(ContentConfig::new(&self.root))
        }
    }

    impl Drop for TempContent {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.root);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::TempContent;
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_config_paths() {
        let config = ContentConfig::new("/srv/public");
        assert_eq!(
            config.content_path("hero/hero-2.json"),
            PathBuf::from("/srv/public/content/hero/hero-2.json")
        );
        assert_eq!(
            config.products_path(),
            PathBuf::from("/srv/public/generated/products/products.json")
        );

        let custom = ContentConfig::new("/srv/public")
            .content_dir("cms")
            .products_file("catalog.json");
        assert_eq!(custom.content_path("site.json"), PathBuf::from("/srv/public/cms/site.json"));
        assert_eq!(custom.products_path(), PathBuf::from("/srv/public/catalog.json"));
    }

    #[tokio::test]
    async fn test_read_content_parses_file() {
        let tmp = TempContent::new();
        tmp.write("content/site.json", r#"{"meta":{"title":"Tea"}}"#);

        let value: Value = tmp.store().read_content("site.json").await.unwrap();
        assert_eq!(value["meta"]["title"], "Tea");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_read_error() {
        let tmp = TempContent::new();
        let err = tmp
            .store()
            .read_content::<Value>("nope.json")
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
        assert!(err.path().starts_with(tmp.root()));
    }
}
