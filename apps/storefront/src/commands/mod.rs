//! # Commands Module
//!
//! Everything the UI event handlers invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Cart manipulation and drawer visibility
//! └── page.rs     ◄─── Layout and home page plans
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartStore) -> CartResponse
//!
//! // Needs the cart and the loaded catalog
//! fn add_product_to_cart(cart: &CartStore, products: &[CatalogProduct], id: &str)
//!
//! // Only needs content
//! async fn get_home_page(content: &ContentState) -> Result<HomePagePlan, ApiError>
//! ```

pub mod cart;
pub mod page;

pub use cart::CartResponse;
