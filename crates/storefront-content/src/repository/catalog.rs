//! # Catalog Repository
//!
//! Reads the generated product list.
//!
//! Entries are checked one by one: a malformed product is skipped with a
//! warning rather than taking the whole catalog down.

use serde_json::Value;
use storefront_core::validation::validate_candidate;
use tracing::{debug, warn};

use crate::model::CatalogProduct;
use crate::store::ContentStore;

/// Repository for the product catalog.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    store: ContentStore,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(store: ContentStore) -> Self {
        CatalogRepository { store }
    }

    /// Loads every valid product, in catalog order.
    ///
    /// A missing or unparseable catalog yields an empty list.
    pub async fn load_all(&self) -> Vec<CatalogProduct> {
        let path = self.store.config().products_path();

        let entries: Vec<Value> = match self.store.read_json(&path).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Product catalog unavailable, using empty catalog");
                return Vec::new();
            }
        };

        let total = entries.len();
        let products: Vec<CatalogProduct> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| parse_entry(index, entry))
            .collect();

        debug!(total, valid = products.len(), "Loaded product catalog");
        products
    }
}

fn parse_entry(index: usize, entry: Value) -> Option<CatalogProduct> {
    let product: CatalogProduct = match serde_json::from_value(entry) {
        Ok(product) => product,
        Err(e) => {
            warn!(index, error = %e, "Skipping malformed catalog entry");
            return None;
        }
    };

    if let Err(e) = validate_candidate(&product.to_candidate()) {
        warn!(index, id = %product.id, error = %e, "Skipping invalid catalog entry");
        return None;
    }

    Some(product)
}

/// Finds a product by id.
pub fn find_product<'a>(products: &'a [CatalogProduct], id: &str) -> Option<&'a CatalogProduct> {
    products.iter().find(|p| p.id == id)
}
