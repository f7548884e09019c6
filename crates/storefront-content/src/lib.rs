//! # storefront-content: Content Layer for the Storefront
//!
//! This crate reads the JSON content that drives the storefront (site
//! settings, hero banners, page sections, the generated product catalog)
//! and composes it into page plans.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  apps/storefront (bootstrap, add_product_to_cart)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-content (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ ContentStore  │    │ Repositories  │    │   compose    │  │   │
//! │  │   │  (store.rs)   │◄───│ site / hero   │◄───│ LayoutPlan   │  │   │
//! │  │   │ lenient JSON  │    │ sections      │    │ HomePagePlan │  │   │
//! │  │   │ tokio::fs     │    │ catalog       │    │ variants     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  public/content/**.json, public/generated/products/products.json       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Content location and file access
//! - [`json`] - Lenient JSON parsing for hand-edited files
//! - [`model`] - Typed content files
//! - [`repository`] - Loaders with per-file fallbacks
//! - [`variant`] - Component variant selection
//! - [`compose`] - Layout and home page plans
//! - [`error`] - Content error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_content::{compose_home_page, ContentConfig, ContentStore};
//!
//! let store = ContentStore::new(ContentConfig::new("./public"));
//!
//! let layout = storefront_content::compose_layout(&store, "http://localhost:3006").await;
//! let home = compose_home_page(&store).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod compose;
pub mod error;
pub mod json;
pub mod model;
pub mod repository;
pub mod store;
pub mod variant;

// =============================================================================
// Re-exports
// =============================================================================

pub use compose::{
    compose_home_page, compose_layout, footer_categories, hero_key, HeroPlan, HomePagePlan,
    LayoutPlan, PageMetadata, SectionPlan,
};
pub use error::{ContentError, ContentResult};
pub use model::{CatalogProduct, HeroContent, SectionContent, SiteData};
pub use store::{ContentConfig, ContentStore};
pub use variant::{HeaderVariant, HeroVariant, SectionKind};

pub use repository::catalog::{find_product, CatalogRepository};
pub use repository::hero::HeroRepository;
pub use repository::section::SectionRepository;
pub use repository::site::SiteRepository;

// =============================================================================
// Constants
// =============================================================================

/// Sort position of a section without an `order` (or with `order: 0`).
pub const DEFAULT_SECTION_ORDER: i64 = 999;

/// Hero variant used when the site does not choose one.
pub const DEFAULT_HERO_KEY: &str = "HeroVariant1";

/// Products shown by a grid without a (non-zero) `limit`.
pub const DEFAULT_PRODUCT_GRID_LIMIT: usize = 3;

/// Section files of the home page, under `content/sections/`.
pub const HOME_SECTION_FILES: [&str; 5] = [
    "features.json",
    "sales-promotion.json",
    "product-grid-variant1.json",
    "reviews-1.json",
    "faq-section.json",
];
