//! # Cart
//!
//! Cart lines, cart state and the pure transitions between states.
//!
//! ## Value Semantics
//! Every transition takes the current state by reference and returns a
//! brand-new [`CartState`]. Nothing is mutated in place, so a holder of an
//! old snapshot keeps seeing exactly what it saw, and an observer can tell
//! that something changed by comparing snapshot identity.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Transitions                                     │
//! │                                                                         │
//! │  UI Action               Transition              Effect                 │
//! │  ─────────               ──────────              ──────                 │
//! │                                                                         │
//! │  Click "Add to cart" ──► add_to_cart() ───────► qty+1 or new line,      │
//! │                                                  drawer opens           │
//! │                                                                         │
//! │  Quantity stepper ─────► update_quantity() ───► qty = n (n ≤ 0 removes) │
//! │                                                                         │
//! │  Click remove ─────────► remove_from_cart() ──► line dropped            │
//! │                                                                         │
//! │  Click clear ──────────► clear_cart() ────────► items = []              │
//! │                                                                         │
//! │  Cart icon / close ────► open/close_cart_drawer() ► flag only           │
//! │                                                                         │
//! │  Every transition: total = price × quantity for each line it touches   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Cart Candidate
// =============================================================================

/// The product data handed to [`CartState::add_to_cart`].
///
/// Sourced from the catalog by the UI. Quantity and total are not part of
/// a candidate: the cart decides those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartCandidate {
    /// Opaque product identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,

    /// Display asset reference (path or URL).
    pub image: String,
}

impl CartCandidate {
    /// Creates a new candidate.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        CartCandidate {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct product in the cart.
///
/// ## Invariants
/// - `quantity >= 1`
/// - `total == price × quantity`
///
/// Fields are private so `total` can only be written together with
/// `quantity`. The line is `Serialize` only: a line is never rebuilt from
/// untrusted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CartLine {
    id: String,
    name: String,
    price: Money,
    image: String,
    quantity: i64,
    total: Money,
}

impl CartLine {
    /// Creates a line for a candidate with quantity 1.
    ///
    /// ## Price Freezing
    /// The candidate's price is captured here. Later adds of the same id
    /// bump the quantity but keep this price.
    fn from_candidate(candidate: &CartCandidate) -> Self {
        CartLine {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            price: candidate.price,
            image: candidate.image.clone(),
            quantity: 1,
            total: candidate.price,
        }
    }

    /// Returns a copy of this line with a new quantity and recomputed total.
    fn with_quantity(&self, quantity: i64) -> Self {
        CartLine {
            quantity,
            total: self.price.multiply_quantity(quantity),
            ..self.clone()
        }
    }

    /// Product identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name captured when the line was created.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price captured when the line was created.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Display asset reference.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Quantity in cart (always >= 1).
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Line total (`price × quantity`).
    pub fn total(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The full cart state for one session.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product increases quantity)
/// - Items keep insertion order, which is the display order
/// - No stored line has quantity below 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState {
    items: Vec<CartLine>,
    is_drawer_open: bool,
}

impl CartState {
    /// Creates an empty cart with the drawer closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product and opens the drawer.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1, total recomputed from the
    ///   stored price (the candidate's price is ignored)
    /// - Product not in cart: appended with quantity 1
    /// - Drawer: always opened, so adding surfaces the cart preview
    #[must_use]
    pub fn add_to_cart(&self, candidate: &CartCandidate) -> CartState {
        let items = if self.contains(&candidate.id) {
            self.items
                .iter()
                .map(|line| {
                    if line.id == candidate.id {
                        line.with_quantity(line.quantity.saturating_add(1))
                    } else {
                        line.clone()
                    }
                })
                .collect()
        } else {
            let mut items = self.items.clone();
            items.push(CartLine::from_candidate(candidate));
            items
        };

        CartState {
            items,
            is_drawer_open: true,
        }
    }

    /// Removes the line with the given id. Unknown ids are a no-op.
    #[must_use]
    pub fn remove_from_cart(&self, id: &str) -> CartState {
        CartState {
            items: self
                .items
                .iter()
                .filter(|line| line.id != id)
                .cloned()
                .collect(),
            is_drawer_open: self.is_drawer_open,
        }
    }

    /// Sets the quantity of the line with the given id.
    ///
    /// ## Behavior
    /// - Quantity >= 1: set, total recomputed
    /// - Quantity <= 0: the line is removed (a line is never stored with
    ///   quantity 0)
    /// - Unknown id: no-op
    #[must_use]
    pub fn update_quantity(&self, id: &str, quantity: i64) -> CartState {
        if quantity <= 0 {
            return self.remove_from_cart(id);
        }

        CartState {
            items: self
                .items
                .iter()
                .map(|line| {
                    if line.id == id {
                        line.with_quantity(quantity)
                    } else {
                        line.clone()
                    }
                })
                .collect(),
            is_drawer_open: self.is_drawer_open,
        }
    }

    /// Empties the cart. The drawer flag is kept.
    #[must_use]
    pub fn clear_cart(&self) -> CartState {
        CartState {
            items: Vec::new(),
            is_drawer_open: self.is_drawer_open,
        }
    }

    /// Marks the drawer visible. Items are kept.
    #[must_use]
    pub fn open_cart_drawer(&self) -> CartState {
        CartState {
            items: self.items.clone(),
            is_drawer_open: true,
        }
    }

    /// Marks the drawer hidden. Items are kept.
    #[must_use]
    pub fn close_cart_drawer(&self) -> CartState {
        CartState {
            items: self.items.clone(),
            is_drawer_open: false,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Whether the cart preview should be visible.
    pub fn is_drawer_open(&self) -> bool {
        self.is_drawer_open
    }

    /// Finds a line by product id.
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Checks whether a product is in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.line(id).is_some()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across lines (cart icon badge).
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of line totals (order total shown in the drawer).
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|line| line.total).sum()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the badge and the drawer footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
}

impl From<&CartState> for CartTotals {
    fn from(state: &CartState) -> Self {
        CartTotals {
            line_count: state.line_count(),
            total_quantity: state.total_quantity(),
            subtotal: state.subtotal(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> CartCandidate {
        CartCandidate::new("A", "Tea", Money::from_cents(1000), "x")
    }

    fn candidate(id: &str, price_cents: i64) -> CartCandidate {
        CartCandidate::new(id, format!("Product {}", id), Money::from_cents(price_cents), "img")
    }

    fn assert_totals_consistent(state: &CartState) {
        for line in state.items() {
            assert!(line.quantity() >= 1, "line {} has quantity {}", line.id(), line.quantity());
            assert_eq!(line.total(), line.price() * line.quantity());
        }
    }

    #[test]
    fn test_new_cart_is_empty_and_closed() {
        let state = CartState::new();
        assert!(state.is_empty());
        assert!(!state.is_drawer_open());
        assert!(state.subtotal().is_zero());
    }

    #[test]
    fn test_distinct_adds_create_one_line_each() {
        let ids = ["a", "b", "c", "d"];
        let state = ids
            .iter()
            .fold(CartState::new(), |s, id| s.add_to_cart(&candidate(id, 100)));

        assert_eq!(state.line_count(), ids.len());
        let order: Vec<&str> = state.items().iter().map(CartLine::id).collect();
        assert_eq!(order, ids);
        assert_totals_consistent(&state);
    }

    #[test]
    fn test_repeat_add_uses_first_price() {
        let state = CartState::new()
            .add_to_cart(&candidate("a", 1000))
            .add_to_cart(&candidate("a", 9999));

        assert_eq!(state.line_count(), 1);
        let line = state.line("a").unwrap();
        assert_eq!(line.quantity(), 2);
        assert_eq!(line.price().cents(), 1000);
        assert_eq!(line.total().cents(), 2000);
    }

    #[test]
    fn test_add_always_opens_drawer() {
        let state = CartState::new()
            .add_to_cart(&tea())
            .close_cart_drawer()
            .add_to_cart(&tea());
        assert!(state.is_drawer_open());
    }

    #[test]
    fn test_remove_then_add_starts_fresh() {
        let state = CartState::new()
            .add_to_cart(&tea())
            .add_to_cart(&tea())
            .update_quantity("A", 7)
            .remove_from_cart("A")
            .add_to_cart(&tea());

        let line = state.line("A").unwrap();
        assert_eq!(line.quantity(), 1);
        assert_eq!(line.total().cents(), 1000);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let before = CartState::new().add_to_cart(&tea()).close_cart_drawer();
        let after = before.remove_from_cart("missing");
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_keeps_drawer_flag() {
        let open = CartState::new().add_to_cart(&tea());
        assert!(open.remove_from_cart("A").is_drawer_open());

        let closed = open.close_cart_drawer();
        assert!(!closed.remove_from_cart("A").is_drawer_open());
    }

    #[test]
    fn test_update_quantity_sets_exact_total() {
        let base = CartState::new().add_to_cart(&candidate("a", 333));
        for n in [1, 2, 5, 17, 999] {
            let state = base.update_quantity("a", n);
            let line = state.line("a").unwrap();
            assert_eq!(line.quantity(), n);
            assert_eq!(line.total().cents(), 333 * n);
        }
    }

    #[test]
    fn test_update_quantity_unknown_is_noop() {
        let before = CartState::new().add_to_cart(&tea());
        assert_eq!(before.update_quantity("missing", 4), before);
    }

    #[test]
    fn test_update_quantity_non_positive_removes_line() {
        let base = CartState::new()
            .add_to_cart(&candidate("a", 100))
            .add_to_cart(&candidate("b", 200));

        let zeroed = base.update_quantity("a", 0);
        assert!(!zeroed.contains("a"));
        assert!(zeroed.contains("b"));

        let negative = base.update_quantity("b", -3);
        assert!(!negative.contains("b"));
        assert_totals_consistent(&negative);
    }

    #[test]
    fn test_update_quantity_keeps_other_lines_and_order() {
        let state = CartState::new()
            .add_to_cart(&candidate("a", 100))
            .add_to_cart(&candidate("b", 200))
            .add_to_cart(&candidate("c", 300))
            .update_quantity("b", 4);

        let order: Vec<&str> = state.items().iter().map(CartLine::id).collect();
        assert_eq!(order, ["a", "b", "c"]);
        assert_eq!(state.line("a").unwrap().quantity(), 1);
        assert_eq!(state.line("b").unwrap().total().cents(), 800);
    }

    #[test]
    fn test_clear_keeps_drawer_flag() {
        let open = CartState::new().add_to_cart(&tea());
        let cleared = open.clear_cart();
        assert!(cleared.is_empty());
        assert!(cleared.is_drawer_open());

        let closed = open.close_cart_drawer().clear_cart();
        assert!(closed.is_empty());
        assert!(!closed.is_drawer_open());
    }

    #[test]
    fn test_drawer_toggles_keep_items() {
        let state = CartState::new().add_to_cart(&tea()).add_to_cart(&candidate("b", 5));
        let closed = state.close_cart_drawer();
        assert_eq!(closed.items(), state.items());
        assert!(!closed.is_drawer_open());

        let reopened = closed.open_cart_drawer();
        assert_eq!(reopened.items(), state.items());
        assert!(reopened.is_drawer_open());
    }

    #[test]
    fn test_transitions_leave_original_untouched() {
        let original = CartState::new().add_to_cart(&tea());
        let _ = original.add_to_cart(&tea());
        let _ = original.update_quantity("A", 9);
        let _ = original.clear_cart();

        assert_eq!(original.line("A").unwrap().quantity(), 1);
    }

    #[test]
    fn test_scenario_walkthrough() {
        let state = CartState::new().add_to_cart(&tea());
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.items()[0].quantity(), 1);
        assert_eq!(state.items()[0].total().cents(), 1000);
        assert!(state.is_drawer_open());

        let state = state.add_to_cart(&tea());
        assert_eq!(state.items()[0].quantity(), 2);
        assert_eq!(state.items()[0].total().cents(), 2000);
        assert!(state.is_drawer_open());

        let state = state.update_quantity("A", 5);
        assert_eq!(state.items()[0].total().cents(), 5000);

        let state = state.remove_from_cart("A");
        assert!(state.is_empty());
    }

    #[test]
    fn test_totals_summary() {
        let state = CartState::new()
            .add_to_cart(&candidate("a", 250))
            .add_to_cart(&candidate("a", 250))
            .add_to_cart(&candidate("b", 1000));

        let totals = CartTotals::from(&state);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal.cents(), 1500);
    }

    #[test]
    fn test_huge_quantities_saturate_totals() {
        let state = CartState::new()
            .add_to_cart(&tea())
            .update_quantity("A", i64::MAX)
            .add_to_cart(&candidate("b", 500));

        let line = state.line("A").unwrap();
        assert_eq!(line.quantity(), i64::MAX);
        assert_eq!(line.total().cents(), i64::MAX);

        let totals = CartTotals::from(&state);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, i64::MAX);
        assert_eq!(totals.subtotal.cents(), i64::MAX);
    }

    #[test]
    fn test_serialized_shape() {
        let state = CartState::new().add_to_cart(&tea());
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "items": [{
                    "id": "A",
                    "name": "Tea",
                    "price": 1000,
                    "image": "x",
                    "quantity": 1,
                    "total": 1000
                }],
                "isDrawerOpen": true
            })
        );
    }
}
