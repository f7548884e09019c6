//! # Content State
//!
//! Wraps the content store and the settings page composition needs.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! async fn get_home_page(content: &ContentState) -> Result<HomePagePlan, ApiError> {
//!     compose_home_page(content.inner()).await.map_err(ApiError::from)
//! }
//! ```

use storefront_content::ContentStore;

use super::config::StorefrontConfig;

/// Content store plus the site base URL.
#[derive(Debug, Clone)]
pub struct ContentState {
    store: ContentStore,
    base_url: String,
}

impl ContentState {
    pub fn new(store: ContentStore, base_url: impl Into<String>) -> Self {
        ContentState {
            store,
            base_url: base_url.into(),
        }
    }

    /// Builds the content state from configuration.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        ContentState::new(
            ContentStore::new(config.content_config()),
            config.site.base_url.clone(),
        )
    }

    /// Base for metadata URLs.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a reference to the inner ContentStore.
    pub fn inner(&self) -> &ContentStore {
        &self.store
    }
}
