//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It contains the cart
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI (header, hero, sections)                  │   │
//! │  │   Add-to-cart button ──► Cart icon badge ──► Cart drawer        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (CartStore)                     │   │
//! │  │    add_to_cart, update_cart_item, open_cart_drawer, etc.        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   money   │  │   cart    │  │ validation│                  │   │
//! │  │   │   Money   │  │ CartState │  │   rules   │                  │   │
//! │  │   │           │  │ CartLine  │  │  checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Cart lines, cart state and its transitions
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation for catalog data
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::cart::{CartCandidate, CartState};
//! use storefront_core::money::Money;
//!
//! let tea = CartCandidate::new("A", "Tea", Money::from_cents(1000), "x");
//!
//! let state = CartState::new().add_to_cart(&tea).add_to_cart(&tea);
//!
//! assert_eq!(state.items()[0].quantity(), 2);
//! assert_eq!(state.items()[0].total().cents(), 2000);
//! assert!(state.is_drawer_open());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartCandidate, CartLine, CartState, CartTotals};
pub use error::{CoreError, ValidationError};
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product identifier accepted from the catalog.
pub const MAX_PRODUCT_ID_LEN: usize = 100;

/// Maximum length of a product display name accepted from the catalog.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
