//! # Design Document
//!
//! The self-contained export of one design session: the structural price
//! breakdown, the accessories cart, and its total, frozen together at
//! one instant.
//!
//! ## Document Shape (JSON)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  shelf-design.json                                                      │
//! │                                                                         │
//! │  {                                                                      │
//! │    "pricing":        { uprights, beams, supports, shelves, total },     │
//! │    "totalCartPrice": 1800,                                              │
//! │    "cartItems":      [ { product, quantity }, ... ],                    │
//! │    "exportedAt":     "2026-08-23T10:15:30Z"                             │
//! │  }                                                                      │
//! │                                                                         │
//! │  All monetary fields are integer cents. Keys are camelCase because      │
//! │  the TypeScript viewer reads the same file back.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coherence
//! The three payload fields are assembled from a single read of the
//! session, so the cart total always matches the cart items next to it. On
//! import the same relationship is re-checked, so a truncated or
//! hand-edited file is rejected instead of resurfacing as a wrong quote.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartItem};
use crate::error::DocumentError;
use crate::money::{MarginRate, Money};
use crate::pricing::Pricing;

/// File name the viewer downloads designs under.
pub const DEFAULT_FILE_NAME: &str = "shelf-design.json";

// =============================================================================
// Design Document
// =============================================================================

/// A frozen, self-contained export of one design session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DesignDocument {
    /// Structural price breakdown at export time.
    pub pricing: Pricing,

    /// Accessories total at export time.
    pub total_cart_price: Money,

    /// Accessories with their full catalog records.
    pub cart_items: Vec<CartItem>,

    /// When the document was assembled.
    #[ts(as = "String")]
    pub exported_at: DateTime<Utc>,
}

impl DesignDocument {
    /// Assembles a document from one coherent read of the session data.
    ///
    /// The cart total is derived from the items right here, not passed in
    /// separately, so the triple cannot be torn.
    pub fn assemble(pricing: Pricing, cart: &Cart) -> Self {
        DesignDocument {
            pricing,
            total_cart_price: cart.total_price(),
            cart_items: cart.items.clone(),
            exported_at: Utc::now(),
        }
    }

    /// The estimated quote this document represents: structural total plus
    /// accessories, with the commercial margin applied.
    pub fn estimated_total(&self, rate: MarginRate) -> Money {
        (self.pricing.total + self.total_cart_price).with_margin(rate)
    }

    /// Serializes to pretty-printed JSON (the download format).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a document from JSON and verifies its internal consistency.
    ///
    /// ## Checks
    /// - `pricing.total` must equal the sum of its four components
    /// - `totalCartPrice` must equal the sum of the item line totals
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: DesignDocument = serde_json::from_str(json)?;

        let computed = document.pricing.computed_total();
        if document.pricing.total != computed {
            return Err(DocumentError::Inconsistent {
                field: "pricing.total".to_string(),
                expected: computed.cents(),
                found: document.pricing.total.cents(),
            });
        }

        let cart_total: Money = document.cart_items.iter().map(|i| i.line_total()).sum();
        if document.total_cart_price != cart_total {
            return Err(DocumentError::Inconsistent {
                field: "totalCartPrice".to_string(),
                expected: cart_total.cents(),
                found: document.total_cart_price.cents(),
            });
        }

        Ok(document)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
