//! # Accessories Cart
//!
//! The extras a customer picks from the catalog alongside the shelving
//! itself: anchors, rail protectors, pallet stops, signage.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Catalog Action           Cart Operation           Items Change         │
//! │  ──────────────           ──────────────           ────────────         │
//! │                                                                         │
//! │  Click product ──────────► add() ────────────────► merge by product.id  │
//! │                                                     (new entry or +1)   │
//! │  Change quantity ────────► update_quantity() ────► qty set, 0 removes   │
//! │  Click remove ───────────► remove() ─────────────► entry dropped        │
//! │  Click clear ────────────► clear() ──────────────► items emptied        │
//! │                                                                         │
//! │  Same surface contract as the store: bool = "did anything change",      │
//! │  bad input (negative qty, unknown id) is a silent no-op.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike a checkout cart there is no price freezing here: the quote is an
//! estimate, and the catalog record travels whole into the export document
//! so the back office sees exactly what was picked.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;
use crate::MAX_CART_QUANTITY;

// =============================================================================
// Cart Item
// =============================================================================

/// One catalog product in the cart, with its quantity.
///
/// Carries the full `Product` record (not just the id) so the export
/// document is self-contained for the back office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// The catalog record, passed through untouched.
    pub product: Product,

    /// Units of this product. Always `1..=MAX_CART_QUANTITY`.
    pub quantity: i64,
}

impl CartItem {
    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The accessories cart.
///
/// ## Invariants
/// - Items are unique by `product.id` (adding the same product again
///   increases its quantity)
/// - Quantities stay within `1..=MAX_CART_QUANTITY`; a quantity of 0
///   removes the entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Items in pick order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in the cart: quantity increases by one (capped at
    ///   `MAX_CART_QUANTITY`; at the cap this is a no-op)
    /// - Otherwise: a new entry with quantity 1
    pub fn add(&mut self, product: &Product) -> bool {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            if item.quantity >= MAX_CART_QUANTITY {
                return false;
            }
            item.quantity += 1;
            return true;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        true
    }

    /// Sets the quantity of a product already in the cart.
    ///
    /// ## Behavior
    /// - Quantity 0: removes the entry
    /// - Negative or above `MAX_CART_QUANTITY`: no-op
    /// - Product not in the cart: no-op
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }
        if quantity < 0 || quantity > MAX_CART_QUANTITY {
            return false;
        }

        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Removes a product's entry from the cart.
    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.items.len() != before
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }

    /// Calculates the cart total (Σ unit price × quantity).
    pub fn total_price(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Returns the number of unique products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all entries.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
