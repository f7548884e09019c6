//! # Cart Store
//!
//! The session's single shared cart.
//!
//! ## Snapshot Publishing
//! The cart is never mutated in place. Every operation runs a pure
//! transition from `storefront_core::cart` on the current snapshot and
//! publishes the result as a new `Arc<CartState>` through a
//! `tokio::sync::watch` channel.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action             Command                 Transition               │
//! │  ─────────             ───────                 ──────────               │
//! │                                                                         │
//! │  Add to cart ─────────► add_to_cart() ───────► state.add_to_cart(c)    │
//! │  Change quantity ─────► update_cart_item() ──► state.update_quantity() │
//! │  Remove ──────────────► remove_from_cart() ──► state.remove_from_cart()│
//! │  Clear ───────────────► clear_cart() ────────► state.clear_cart()      │
//! │  Cart icon / close ───► open/close drawer ───► state.*_cart_drawer()   │
//! │                                                                         │
//! │           current: Arc<CartState> ──transition──► next: Arc<CartState>  │
//! │                                                        │                │
//! │                              watch::Sender::send_modify│                │
//! │                                                        ▼                │
//! │  Badge / drawer receivers ◄──────────── changed(), borrow()             │
//! │                                                                         │
//! │  Observers detect a change with Arc::ptr_eq on two snapshots.          │
//! │  Writers are serialized by the channel's lock; readers never see a     │
//! │  half-applied state.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use storefront_core::{CartCandidate, CartLine, CartState, CartTotals, Money};
use tokio::sync::watch;
use tracing::info;
use uuid::Uuid;

/// Shared cart state for one storefront session.
///
/// Cloning is cheap and every clone publishes to the same channel.
#[derive(Debug, Clone)]
pub struct CartStore {
    tx: Arc<watch::Sender<Arc<CartState>>>,
    session_id: Uuid,
    started_at: DateTime<Utc>,
}

impl CartStore {
    /// Creates an empty cart for a new session.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(CartState::new()));
        let store = CartStore {
            tx: Arc::new(tx),
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
        };

        info!(session_id = %store.session_id, "Cart session started");
        store
    }

    /// Session identifier.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// When the session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<CartState> {
        self.tx.borrow().clone()
    }

    /// A receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<CartState>> {
        self.tx.subscribe()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of a product and opens the drawer.
    pub fn add_to_cart(&self, candidate: &CartCandidate) -> Arc<CartState> {
        let next = self.apply(|state| state.add_to_cart(candidate));
        info!(
            session_id = %self.session_id,
            product_id = %candidate.id,
            quantity = next.line(&candidate.id).map(CartLine::quantity).unwrap_or_default(),
            "Added to cart"
        );
        next
    }

    /// Removes a line; absent ids are a no-op.
    pub fn remove_from_cart(&self, id: &str) -> Arc<CartState> {
        let next = self.apply(|state| state.remove_from_cart(id));
        info!(
            session_id = %self.session_id,
            product_id = %id,
            lines = next.line_count(),
            "Removed from cart"
        );
        next
    }

    /// Sets a line's quantity; zero or less removes the line.
    pub fn update_quantity(&self, id: &str, quantity: i64) -> Arc<CartState> {
        let next = self.apply(|state| state.update_quantity(id, quantity));
        info!(
            session_id = %self.session_id,
            product_id = %id,
            quantity,
            "Updated cart quantity"
        );
        next
    }

    /// Empties the cart, keeping the drawer as it is.
    pub fn clear_cart(&self) -> Arc<CartState> {
        let next = self.apply(CartState::clear_cart);
        info!(session_id = %self.session_id, "Cleared cart");
        next
    }

    pub fn open_cart_drawer(&self) -> Arc<CartState> {
        let next = self.apply(CartState::open_cart_drawer);
        info!(session_id = %self.session_id, "Opened cart drawer");
        next
    }

    pub fn close_cart_drawer(&self) -> Arc<CartState> {
        let next = self.apply(CartState::close_cart_drawer);
        info!(session_id = %self.session_id, "Closed cart drawer");
        next
    }

    /// Runs a transition on the current snapshot and publishes the result.
    ///
    /// Returns the snapshot this call published, even if another writer
    /// publishes right after.
    fn apply<F>(&self, transition: F) -> Arc<CartState>
    where
        F: FnOnce(&CartState) -> CartState,
    {
        let mut published = Arc::default();
        self.tx.send_modify(|current| {
            *current = Arc::new(transition(current.as_ref()));
            published = Arc::clone(current);
        });
        published
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// A copy of the line for `id`, if present.
    pub fn line(&self, id: &str) -> Option<CartLine> {
        self.snapshot().line(id).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.snapshot().line_count()
    }

    /// Sum of quantities, shown on the cart badge.
    pub fn total_quantity(&self) -> i64 {
        self.snapshot().total_quantity()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Money {
        self.snapshot().subtotal()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self.snapshot().as_ref())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, price_cents: i64) -> CartCandidate {
        CartCandidate::new(id, format!("Tea {}", id), Money::from_cents(price_cents), "x")
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = CartStore::new();
        assert!(store.is_empty());
        assert!(!store.snapshot().is_drawer_open());
        assert!(store.started_at() <= Utc::now());
    }

    #[test]
    fn test_every_mutation_publishes_new_snapshot() {
        let store = CartStore::new();
        let before = store.snapshot();

        let after_add = store.add_to_cart(&candidate("A", 1000));
        assert!(!Arc::ptr_eq(&before, &after_add));
        assert!(Arc::ptr_eq(&after_add, &store.snapshot()));

        // no-op transitions still publish a fresh snapshot
        let after_remove = store.remove_from_cart("missing");
        assert!(!Arc::ptr_eq(&after_add, &after_remove));
        assert_eq!(after_add.as_ref(), after_remove.as_ref());
    }

    #[test]
    fn test_old_snapshots_are_unchanged() {
        let store = CartStore::new();
        let first = store.add_to_cart(&candidate("A", 1000));
        store.add_to_cart(&candidate("A", 1000));

        assert_eq!(first.line("A").unwrap().quantity(), 1);
        assert_eq!(store.line("A").unwrap().quantity(), 2);
    }

    #[test]
    fn test_queries() {
        let store = CartStore::new();
        store.add_to_cart(&candidate("A", 1000));
        store.add_to_cart(&candidate("B", 250));
        store.update_quantity("B", 3);

        assert_eq!(store.line_count(), 2);
        assert_eq!(store.total_quantity(), 4);
        assert_eq!(store.subtotal(), Money::from_cents(1750));

        let totals = store.totals();
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, 4);
    }

    #[test]
    fn test_drawer_and_clear() {
        let store = CartStore::new();
        store.add_to_cart(&candidate("A", 1000));
        assert!(store.snapshot().is_drawer_open());

        let cleared = store.clear_cart();
        assert!(cleared.is_empty());
        assert!(cleared.is_drawer_open());

        assert!(!store.close_cart_drawer().is_drawer_open());
        assert!(store.open_cart_drawer().is_drawer_open());
    }

    #[test]
    fn test_clones_share_the_cart() {
        let store = CartStore::new();
        let other = store.clone();
        other.add_to_cart(&candidate("A", 1000));

        assert_eq!(store.line_count(), 1);
        assert_eq!(store.session_id(), other.session_id());
    }

    #[tokio::test]
    async fn test_subscribers_are_notified() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.add_to_cart(&candidate("A", 1000));
        rx.changed().await.unwrap();
        let seen = rx.borrow_and_update().clone();

        assert!(Arc::ptr_eq(&seen, &store.snapshot()));
        assert_eq!(seen.total_quantity(), 1);
    }
}
