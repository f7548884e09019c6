//! # Section Repository
//!
//! Loads page sections concurrently and orders them for rendering.
//!
//! ## Load & Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  files: [a.json, b.json, c.json]                                        │
//! │            │       │       │        one task per file (JoinSet)         │
//! │            ▼       ▼       ▼                                            │
//! │         slot 0  slot 1  slot 2      results land at the file's index   │
//! │            │       ✗       │        failures are logged and dropped    │
//! │            ▼               ▼                                            │
//! │         stable sort by order (missing → 999)                            │
//! │                                                                         │
//! │  Equal orders keep the order of the file list, whatever order the      │
//! │  reads finished in.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use crate::model::SectionContent;
use crate::store::ContentStore;

/// Repository for page sections.
#[derive(Debug, Clone)]
pub struct SectionRepository {
    store: ContentStore,
}

impl SectionRepository {
    /// Creates a new SectionRepository.
    pub fn new(store: ContentStore) -> Self {
        SectionRepository { store }
    }

    /// Loads `content/sections/<file>` for every file name, skipping the
    /// ones that fail, sorted by `order`.
    pub async fn load_ordered(&self, files: &[&str]) -> Vec<SectionContent> {
        let mut tasks = JoinSet::new();

        for (index, file) in files.iter().enumerate() {
            let store = self.store.clone();
            let relative = format!("sections/{}", file);
            tasks.spawn(async move {
                let result = store.read_content::<SectionContent>(&relative).await;
                (index, relative, result)
            });
        }

        let mut slots: Vec<Option<SectionContent>> = vec![None; files.len()];

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, _, Ok(section))) => slots[index] = Some(section),
                Ok((_, relative, Err(e))) => {
                    warn!(file = %relative, error = %e, "Skipping section");
                }
                Err(e) => error!(error = %e, "Section load task failed"),
            }
        }

        let mut sections: Vec<SectionContent> = slots.into_iter().flatten().collect();
        sort_sections(&mut sections);

        debug!(requested = files.len(), loaded = sections.len(), "Loaded sections");
        sections
    }
}

/// Stable sort by [`SectionContent::sort_order`].
pub fn sort_sections(sections: &mut [SectionContent]) {
    sections.sort_by_key(SectionContent::sort_order);
}
