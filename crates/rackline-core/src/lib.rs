//! # rackline-core: Pure Business Logic for the Rackline Configurator
//!
//! This crate is the **heart** of Rackline. It contains the shelving
//! configuration model, its mutation rules, and the pricing engine as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Rackline Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                   Viewer Frontend (TypeScript)                  │    │
//! │  │     3D View ──► Dimension Panel ──► Catalog ──► Header Quote    │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ typed contracts (ts-rs bindings)       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                  ★ rackline-core (THIS CRATE) ★                 │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │   store   │  │  pricing  │  │   cart    │  │ document  │    │    │
//! │  │   │ShelfConfig│  │  price()  │  │   Cart    │  │  export/  │    │    │
//! │  │   │ mutations │  │ breakdown │  │  extras   │  │  import   │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │        NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS       │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                        apps/quoter (CLI)                        │    │
//! │  │         builds designs, prints quotes, writes documents         │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ShelfConfig, ShelfModule, ShelfLevel, Material, Product)
//! - [`limits`] - The manufacturing envelope (dimension bounds, level bounds)
//! - [`store`] - The sanctioned mutation surface over the configuration tree
//! - [`pricing`] - Pure pricing engine (price table + breakdown)
//! - [`cart`] - Accessories cart with merge-on-add semantics
//! - [`session`] - One-stop handle: store + cart + derived quote
//! - [`document`] - Self-contained design export/import
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Strict validators for operator-typed input
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same tree = same price
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Mutations**: Store operations clamp or no-op, never panic or error
//!
//! ## Example Usage
//!
//! ```rust
//! use rackline_core::session::DesignSession;
//!
//! let mut session = DesignSession::new();
//! let module_id = session.config().modules[0].id.clone();
//!
//! // Grow the default bay to three levels and price it.
//! session.store_mut().add_level(&module_id);
//! assert_eq!(session.pricing().total.cents(), 14_100); // €141.00
//!
//! // The header quote carries the commercial margin.
//! assert_eq!(session.estimated_total().cents(), 18_330); // €183.30
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod document;
pub mod error;
pub mod limits;
pub mod money;
pub mod pricing;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rackline_core::Money` instead of
// `use rackline_core::money::Money`

pub use cart::{Cart, CartItem};
pub use document::DesignDocument;
pub use error::{DocumentError, ValidationError};
pub use money::{MarginRate, Money};
pub use pricing::{price, Pricing};
pub use session::DesignSession;
pub use store::{ConfigStore, GlobalDimensionsUpdate, LevelUpdate, ModuleUpdate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single accessory in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Nobody orders a thousand pallet stops through a showroom configurator.
pub const MAX_CART_QUANTITY: i64 = 999;

/// Commercial margin on estimated quotes, in basis points (3000 = 30%)
///
/// ## Business Reason
/// The structural price table is net catalog cost; the showroom quotes
/// with a flat 30% markup covering delivery, assembly, and commission.
/// The margin applies only to the header estimate; the itemized
/// breakdown stays net so its lines always sum to their own total.
pub const MARGIN_BPS: u32 = 3000;
