//! # Site Repository
//!
//! `site.json` plus the contacts, header and footer files.
//!
//! ## Fallbacks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load()             Err is returned to the caller                       │
//! │  load_or_default()  Err ──► SiteData::fallback()                        │
//! │  load_contacts()    Err ──► None                                        │
//! │  load_header()      Err ──► None                                        │
//! │  load_footer()      Err ──► None                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, error, warn};

use crate::error::ContentResult;
use crate::model::{Contacts, FooterData, HeaderData, SiteData};
use crate::store::ContentStore;

const SITE_FILE: &str = "site.json";
const CONTACTS_FILE: &str = "contacts/contacts.json";
const HEADER_FILE: &str = "header/header.json";
const FOOTER_FILE: &str = "footer/footer.json";

/// Repository for site-wide content.
#[derive(Debug, Clone)]
pub struct SiteRepository {
    store: ContentStore,
}

impl SiteRepository {
    /// Creates a new SiteRepository.
    pub fn new(store: ContentStore) -> Self {
        SiteRepository { store }
    }

    /// Loads `site.json`.
    pub async fn load(&self) -> ContentResult<SiteData> {
        let site: SiteData = self.store.read_content(SITE_FILE).await?;
        debug!(title = %site.meta.title, "Loaded site content");
        Ok(site)
    }

    /// Loads `site.json`, or the fallback site when it is missing or broken.
    pub async fn load_or_default(&self) -> SiteData {
        match self.load().await {
            Ok(site) => site,
            Err(e) => {
                error!(error = %e, "Site content unavailable, using fallback");
                SiteData::fallback()
            }
        }
    }

    /// Loads `contacts/contacts.json`.
    pub async fn load_contacts(&self) -> Option<Contacts> {
        self.optional(CONTACTS_FILE).await
    }

    /// Loads `header/header.json`.
    pub async fn load_header(&self) -> Option<HeaderData> {
        self.optional(HEADER_FILE).await
    }

    /// Loads `footer/footer.json`.
    pub async fn load_footer(&self) -> Option<FooterData> {
        self.optional(FOOTER_FILE).await
    }

    async fn optional<T: serde::de::DeserializeOwned>(&self, relative: &str) -> Option<T> {
        match self.store.read_content(relative).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(file = relative, error = %e, "Optional content unavailable");
                None
            }
        }
    }
}
