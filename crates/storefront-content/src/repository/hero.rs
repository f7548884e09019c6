//! # Hero Repository
//!
//! Loads the hero banner for a configured variant key.
//!
//! ```text
//! key "HeroVariant3"
//!   ├─► content/hero/hero-3.json   (found → done)
//!   └─► content/hero/hero.json     (found → done, otherwise Err)
//! ```

use tracing::{debug, warn};

use crate::error::ContentResult;
use crate::model::HeroContent;
use crate::store::ContentStore;
use crate::variant::hero_file_suffix;

const GENERIC_HERO_FILE: &str = "hero/hero.json";

/// Repository for hero content.
#[derive(Debug, Clone)]
pub struct HeroRepository {
    store: ContentStore,
}

impl HeroRepository {
    /// Creates a new HeroRepository.
    pub fn new(store: ContentStore) -> Self {
        HeroRepository { store }
    }

    /// Loads the hero for `variant_key`, falling back to the generic file.
    ///
    /// When the file has no `variant` (or an empty one), the requested key
    /// is filled in.
    pub async fn load(&self, variant_key: &str) -> ContentResult<HeroContent> {
        let specific = format!("hero/hero-{}.json", hero_file_suffix(variant_key));

        let mut hero: HeroContent = match self.store.read_content(&specific).await {
            Ok(hero) => hero,
            Err(e) => {
                warn!(variant = variant_key, error = %e, "Variant hero unavailable, trying generic hero");
                self.store.read_content(GENERIC_HERO_FILE).await?
            }
        };

        if hero.variant.as_deref().map_or(true, str::is_empty) {
            hero.variant = Some(variant_key.to_string());
        }

        debug!(variant = ?hero.variant, "Loaded hero content");
        Ok(hero)
    }
}
