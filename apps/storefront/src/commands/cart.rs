//! # Cart Commands
//!
//! What the UI's cart controls invoke.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────────┐  close_cart_drawer       │
//! │  │  Empty   │───────────────►│ Items, drawer│─────────────────┐        │
//! │  │  cart    │                │ open         │◄────────────────┘        │
//! │  └──────────┘                └──────────────┘  open_cart_drawer        │
//! │       ▲                        │    │                                   │
//! │       │                        │    │ update_cart_item, remove_from_cart│
//! │       └──── clear_cart ────────┘    ▼                                   │
//! │                                 (stays in cart while lines remain)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the snapshot it produced, so the UI never needs a
//! second round trip to redraw.

use serde::Serialize;
use storefront_content::{find_product, CatalogProduct};
use storefront_core::{CartCandidate, CartLine, CartState, CartTotals, CoreError};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CartStore;

/// Cart response including items, drawer flag and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub is_drawer_open: bool,
    pub totals: CartTotals,
}

impl From<&CartState> for CartResponse {
    fn from(state: &CartState) -> Self {
        CartResponse {
            items: state.items().to_vec(),
            is_drawer_open: state.is_drawer_open(),
            totals: CartTotals::from(state),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart.snapshot().as_ref())
}

/// Adds one unit of the product an add-to-cart button carries.
///
/// ## Behavior
/// - Already in cart: quantity increases, the stored price is kept
/// - Not in cart: added with quantity 1
/// - The drawer opens either way
pub fn add_to_cart(cart: &CartStore, candidate: CartCandidate) -> CartResponse {
    debug!(product_id = %candidate.id, "add_to_cart command");
    CartResponse::from(cart.add_to_cart(&candidate).as_ref())
}

/// Adds a catalog product by id.
///
/// ## Errors
/// `NOT_FOUND` when the id is not in `products`.
pub fn add_product_to_cart(
    cart: &CartStore,
    products: &[CatalogProduct],
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_product_to_cart command");

    let product = find_product(products, product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    Ok(CartResponse::from(
        cart.add_to_cart(&product.to_candidate()).as_ref(),
    ))
}

/// Sets the quantity of a line; zero or less removes it.
pub fn update_cart_item(cart: &CartStore, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");
    CartResponse::from(cart.update_quantity(product_id, quantity).as_ref())
}

/// Removes a line from the cart.
pub fn remove_from_cart(cart: &CartStore, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    CartResponse::from(cart.remove_from_cart(product_id).as_ref())
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartStore) -> CartResponse {
    debug!("clear_cart command");
    CartResponse::from(cart.clear_cart().as_ref())
}

/// Shows the cart drawer (cart icon in the header).
pub fn open_cart_drawer(cart: &CartStore) -> CartResponse {
    debug!("open_cart_drawer command");
    CartResponse::from(cart.open_cart_drawer().as_ref())
}

/// Hides the cart drawer.
pub fn close_cart_drawer(cart: &CartStore) -> CartResponse {
    debug!("close_cart_drawer command");
    CartResponse::from(cart.close_cart_drawer().as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;
    use storefront_core::Money;

    fn candidate(id: &str, price_cents: i64) -> CartCandidate {
        CartCandidate::new(id, format!("Tea {}", id), Money::from_cents(price_cents), "/x.webp")
    }

    fn catalog() -> Vec<CatalogProduct> {
        serde_json::from_value(json!([
            {"id": "tea-01", "name": "Jasmine", "price": 4.5, "image": "/jasmine.webp"},
            {"id": "tea-02", "name": "Oolong", "price": 12.0}
        ]))
        .unwrap()
    }

    #[test]
    fn test_add_then_add_again() {
        let cart = CartStore::new();

        add_to_cart(&cart, candidate("A", 1000));
        let response = add_to_cart(&cart, candidate("A", 1000));

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity(), 2);
        assert_eq!(response.items[0].total(), Money::from_cents(2000));
        assert!(response.is_drawer_open);
        assert_eq!(response.totals.total_quantity, 2);
    }

    #[test]
    fn test_add_product_from_catalog() {
        let cart = CartStore::new();
        let products = catalog();

        let response = add_product_to_cart(&cart, &products, "tea-01").unwrap();
        assert_eq!(response.items[0].name(), "Jasmine");
        assert_eq!(response.items[0].price(), Money::from_cents(450));

        let err = add_product_to_cart(&cart, &products, "tea-99").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_update_remove_and_clear() {
        let cart = CartStore::new();
        add_to_cart(&cart, candidate("A", 1000));
        add_to_cart(&cart, candidate("B", 300));

        let response = update_cart_item(&cart, "B", 4);
        assert_eq!(response.totals.subtotal, Money::from_cents(2200));

        let response = update_cart_item(&cart, "B", 0);
        assert_eq!(response.items.len(), 1);

        let response = remove_from_cart(&cart, "A");
        assert!(response.items.is_empty());
        assert!(response.is_drawer_open);

        add_to_cart(&cart, candidate("C", 100));
        let response = clear_cart(&cart);
        assert!(response.items.is_empty());
        assert!(response.is_drawer_open);
    }

    #[test]
    fn test_huge_quantity_keeps_commands_working() {
        let cart = CartStore::new();
        add_to_cart(&cart, candidate("A", 1000));
        update_cart_item(&cart, "A", i64::MAX);

        let response = add_to_cart(&cart, candidate("B", 300));
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.totals.total_quantity, i64::MAX);
        assert_eq!(response.totals.subtotal, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_drawer_commands() {
        let cart = CartStore::new();
        assert!(open_cart_drawer(&cart).is_drawer_open);
        assert!(!close_cart_drawer(&cart).is_drawer_open);
        assert!(!get_cart(&cart).is_drawer_open);
    }

    #[test]
    fn test_response_shape() {
        let cart = CartStore::new();
        let response = add_to_cart(&cart, candidate("A", 1099));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["isDrawerOpen"], true);
        assert_eq!(value["items"][0]["id"], "A");
        assert_eq!(value["items"][0]["total"], 1099);
        assert_eq!(value["totals"]["lineCount"], 1);
        assert_eq!(value["totals"]["subtotal"], 1099);
    }
}
