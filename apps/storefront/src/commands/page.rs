//! # Page Commands
//!
//! Page plans for the renderer.

use storefront_content::{compose_home_page, compose_layout, HomePagePlan, LayoutPlan};
use tracing::debug;

use crate::error::ApiError;
use crate::state::ContentState;

/// Gets the layout plan shared by every page.
///
/// Never fails: missing content falls back to defaults.
pub async fn get_layout(content: &ContentState) -> LayoutPlan {
    debug!("get_layout command");
    compose_layout(content.inner(), content.base_url()).await
}

/// Gets the home page plan.
///
/// ## Errors
/// `CONTENT_UNAVAILABLE` when `site.json` or the hero content is missing.
pub async fn get_home_page(content: &ContentState) -> Result<HomePagePlan, ApiError> {
    debug!("get_home_page command");
    compose_home_page(content.inner())
        .await
        .map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::path::PathBuf;
    use storefront_content::{ContentConfig, ContentStore, HeroVariant};

    struct TempRoot(PathBuf);

    impl TempRoot {
        fn new() -> Self {
            let root = std::env::temp_dir().join(format!("storefront-app-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&root).unwrap();
            TempRoot(root)
        }

        fn write(&self, relative: &str, contents: &str) {
            let path = self.0.join(relative);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, contents).unwrap();
        }

        fn content(&self) -> ContentState {
            ContentState::new(
                ContentStore::new(ContentConfig::new(&self.0)),
                "https://tea.example",
            )
        }
    }

    impl Drop for TempRoot {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[tokio::test]
    async fn test_layout_without_content_uses_defaults() {
        let root = TempRoot::new();
        let layout = get_layout(&root.content()).await;

        assert_eq!(layout.metadata.title, "Default Site Title");
        assert_eq!(layout.metadata.metadata_base, "https://tea.example");
    }

    #[tokio::test]
    async fn test_home_page_without_content_is_error() {
        let root = TempRoot::new();
        let err = get_home_page(&root.content()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ContentUnavailable);
        assert_eq!(err.message, "Content unavailable: site.json");
    }

    #[tokio::test]
    async fn test_home_page() {
        let root = TempRoot::new();
        root.write(
            "content/site.json",
            r#"{"meta":{"title":"Tea"},"layout":{"hero":{"variant":"HeroVariant2"}}}"#,
        );
        root.write("content/hero/hero-2.json", r#"{"title":"Second"}"#);

        let home = get_home_page(&root.content()).await.unwrap();
        assert_eq!(home.hero.variant, HeroVariant::V2);
    }
}
