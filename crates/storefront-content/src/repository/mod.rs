//! # Repository Module
//!
//! Typed loaders over the content directory.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Page composition                                                       │
//! │       │                                                                 │
//! │       │  store.site().load_or_default()                                 │
//! │       ▼                                                                 │
//! │  SiteRepository / HeroRepository / SectionRepository / CatalogRepository│
//! │       │                                                                 │
//! │       │  ContentStore::read_content / read_json                         │
//! │       ▼                                                                 │
//! │  public/content/**.json, public/generated/products/products.json        │
//! │                                                                         │
//! │  Optional content never fails a page: loaders return Option, an empty  │
//! │  list or a fallback value, and log what went wrong.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SiteRepository`](site::SiteRepository) - site, contacts, header, footer
//! - [`HeroRepository`](hero::HeroRepository) - hero banner by variant key
//! - [`SectionRepository`](section::SectionRepository) - ordered page sections
//! - [`CatalogRepository`](catalog::CatalogRepository) - generated product list

pub mod catalog;
pub mod hero;
pub mod section;
pub mod site;
