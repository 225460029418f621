//! # Design Session
//!
//! One customer's design-in-progress: the configuration store and the
//! accessories cart, plus everything derived from them.
//!
//! ## Ownership Diagram
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DesignSession                                    │
//! │                                                                         │
//! │   owns ──► ConfigStore ──► Arc<ShelfConfig> snapshots                   │
//! │   owns ──► Cart        ──► accessory items                              │
//! │                                                                         │
//! │   derives (never stores):                                               │
//! │   ├── pricing()          price(config)                                  │
//! │   ├── estimated_total()  (pricing.total + cart total) × margin          │
//! │   └── export()           DesignDocument from one coherent read          │
//! │                                                                         │
//! │   Collaborators hold THIS handle, not the parts, so the header          │
//! │   quote, the cart badge, and the export can never disagree about        │
//! │   which snapshot they were computed from.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A threaded host wraps the whole session in its own lock; the session
//! itself is plain owned state and stays synchronous.

use std::sync::Arc;

use crate::cart::Cart;
use crate::document::DesignDocument;
use crate::money::{MarginRate, Money};
use crate::pricing::{price, Pricing};
use crate::store::ConfigStore;
use crate::types::ShelfConfig;
use crate::MARGIN_BPS;

// =============================================================================
// Design Session
// =============================================================================

/// A design session: one store, one cart, one customer.
#[derive(Debug, Clone, Default)]
pub struct DesignSession {
    store: ConfigStore,
    cart: Cart,
}

impl DesignSession {
    /// Creates a fresh session: factory-default configuration, empty cart.
    pub fn new() -> Self {
        DesignSession {
            store: ConfigStore::new(),
            cart: Cart::new(),
        }
    }

    // =========================================================================
    // Component Access
    // =========================================================================

    /// The configuration store (read surface).
    #[inline]
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// The configuration store (mutation surface).
    #[inline]
    pub fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    /// The accessories cart (read surface).
    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The accessories cart (mutation surface).
    #[inline]
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// The current configuration snapshot.
    #[inline]
    pub fn config(&self) -> Arc<ShelfConfig> {
        self.store.config()
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    /// Prices the current configuration snapshot.
    pub fn pricing(&self) -> Pricing {
        price(&self.store.config())
    }

    /// The commercial margin applied to estimated quotes.
    pub fn margin_rate(&self) -> MarginRate {
        MarginRate::from_bps(MARGIN_BPS)
    }

    /// The header quote: structural total plus accessories, marked up by
    /// the commercial margin.
    ///
    /// The margin lives only here; the `Pricing` breakdown and the cart
    /// total stay net, so the itemized lines always sum to their own
    /// totals.
    pub fn estimated_total(&self) -> Money {
        (self.pricing().total + self.cart.total_price()).with_margin(self.margin_rate())
    }

    /// Assembles the export document from one coherent read.
    pub fn export(&self) -> DesignDocument {
        DesignDocument::assemble(self.pricing(), &self.cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn test_product(id: i64, precio_cents: i64) -> Product {
        Product {
            id,
            created_at: None,
            codigo: format!("ACC-{:03}", id),
            categoria: "Accesorios".to_string(),
            descripcion: format!("Accesorio {}", id),
            medidas_mm: "100x100".to_string(),
            precio_cents,
            image_url: None,
        }
    }

    /// Grows the default single module to three open levels (the
    /// documented pricing scenario).
    fn three_level_session() -> DesignSession {
        let mut session = DesignSession::new();
        let module_id = session.config().modules[0].id.clone();
        assert!(session.store_mut().add_level(&module_id));
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = DesignSession::new();

        assert!(session.cart().is_empty());
        assert_eq!(session.store().version(), 0);
        assert_eq!(session.config().modules.len(), 1);
    }

    #[test]
    fn test_estimated_total_on_documented_scenario() {
        // 1 module, depth 600, 3 open levels → structural 14100;
        // empty cart; ×1.3 → 18330.
        let session = three_level_session();

        assert_eq!(session.pricing().total.cents(), 14_100);
        assert_eq!(session.estimated_total().cents(), 18_330);
    }

    #[test]
    fn test_estimated_total_includes_cart() {
        let mut session = three_level_session();
        session.cart_mut().add(&test_product(1, 450));
        session.cart_mut().update_quantity(1, 4); // €18.00

        // (14100 + 1800) × 1.3 = 20670
        assert_eq!(session.estimated_total().cents(), 20_670);
    }

    #[test]
    fn test_margin_rate_is_thirty_percent() {
        let session = DesignSession::new();
        assert_eq!(session.margin_rate().bps(), 3000);
    }

    #[test]
    fn test_export_matches_live_values() {
        let mut session = three_level_session();
        session.cart_mut().add(&test_product(2, 1250));

        let document = session.export();

        assert_eq!(document.pricing, session.pricing());
        assert_eq!(document.total_cart_price, session.cart().total_price());
        assert_eq!(document.cart_items, session.cart().items);
        assert_eq!(
            document.estimated_total(session.margin_rate()),
            session.estimated_total()
        );
    }

    #[test]
    fn test_design_reset_keeps_cart() {
        // "Start over" throws away the shelving, not the picked extras.
        let mut session = DesignSession::new();
        session.cart_mut().add(&test_product(1, 450));

        assert!(session.store_mut().reset());

        assert_eq!(session.cart().item_count(), 1);
    }
}
