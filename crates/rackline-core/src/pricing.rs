//! # Pricing Engine
//!
//! Derives the line-itemized price of a configuration.
//!
//! ## Purity Contract
//! `price()` is a pure function of the tree plus the static tables below:
//! no state, no caching, no side effects. It is cheap enough to rerun
//! after every mutation, so the breakdown shown next to the 3D view is
//! always derived from the current snapshot and can never go stale.
//!
//! ## Worked Example
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  One module, depth 600 mm, 3 open levels                                │
//! │                                                                         │
//! │  Uprights   2 posts × €50.00                     = €100.00              │
//! │  Beams      3 levels × 2 × €10.00/m × 0.6 m      =  €36.00              │
//! │  Supports   (3 levels − 2 minimum) × €5.00       =   €5.00              │
//! │  Shelves    3 × €0.00 (open)                     =   €0.00              │
//! │  ─────────────────────────────────────────────────────────              │
//! │  Total                                           = €141.00              │
//! │                                                                         │
//! │  Every line is exact integer cents: with this price table the           │
//! │  division by 1000 mm/m can never truncate.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::limits::MIN_LEVELS;
use crate::money::Money;
use crate::types::ShelfConfig;

// =============================================================================
// Price Table
// =============================================================================

/// Price of one upright frame post (bastidor), in cents.
///
/// ## Business Reason
/// Each module is framed by its own pair of posts. Adjacent bays do not
/// share posts in this product line, so a row of n modules has 2n posts.
pub const UPRIGHT_CENTS: i64 = 5000;

/// Price of beam (larguero) stock per meter, in cents.
///
/// Beams span the row depth, one pair (front + back) per level.
pub const BEAM_PER_METER_CENTS: i64 = 1000;

/// Price of one reinforcement strut (puntal), in cents.
///
/// Struts are added per level beyond the structural minimum: a module at
/// `MIN_LEVELS` is rigid on its own and needs none.
pub const SUPPORT_CENTS: i64 = 500;

// =============================================================================
// Pricing Breakdown
// =============================================================================

/// The line-itemized price of a configuration.
///
/// Field names match the viewer's `Pricing` interface. A `Pricing` is
/// derived state, rebuilt whole by [`price`] after every change and never
/// patched in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pricing {
    /// Upright frame posts (bastidores).
    pub uprights: Money,

    /// Horizontal beams (largueros).
    pub beams: Money,

    /// Reinforcement struts (puntales).
    pub supports: Money,

    /// Shelf surface material bonuses (baldas).
    pub shelves: Money,

    /// Sum of the four components.
    pub total: Money,
}

impl Pricing {
    /// Re-adds the four components.
    ///
    /// For engine output this always equals `total`; document import uses
    /// it to catch hand-edited files where the two disagree.
    pub fn computed_total(&self) -> Money {
        self.uprights + self.beams + self.supports + self.shelves
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Prices a configuration.
///
/// ## Formula (per module, summed across the row)
/// 1. **Uprights**: 2 posts × `UPRIGHT_CENTS`
/// 2. **Beams**: per level, a front/back pair spanning the global depth:
///    `2 × BEAM_PER_METER_CENTS × depth_mm / 1000`
/// 3. **Supports**: `SUPPORT_CENTS × (levels − MIN_LEVELS)`
/// 4. **Shelves**: the material bonus of each level (`None` = 0)
///
/// ## Example
/// ```rust
/// use rackline_core::pricing::price;
/// use rackline_core::types::ShelfConfig;
///
/// // Factory default: 1 module, 2 open levels, depth 600.
/// let breakdown = price(&ShelfConfig::new());
/// assert_eq!(breakdown.uprights.cents(), 10_000);
/// assert_eq!(breakdown.beams.cents(), 2_400);
/// assert_eq!(breakdown.supports.cents(), 0);
/// assert_eq!(breakdown.total.cents(), 12_400);
/// ```
pub fn price(config: &ShelfConfig) -> Pricing {
    let mut uprights = Money::zero();
    let mut beams = Money::zero();
    let mut supports = Money::zero();
    let mut shelves = Money::zero();

    let beam_pair = Money::from_cents(2 * BEAM_PER_METER_CENTS * config.depth as i64 / 1000);

    for module in &config.modules {
        uprights += Money::from_cents(UPRIGHT_CENTS) * 2;
        beams += beam_pair * module.levels.len() as i64;

        let extra_levels = module.levels.len().saturating_sub(MIN_LEVELS) as i64;
        supports += Money::from_cents(SUPPORT_CENTS) * extra_levels;

        shelves += module.levels.iter().map(|l| l.material.bonus()).sum();
    }

    Pricing {
        uprights,
        beams,
        supports,
        shelves,
        total: uprights + beams + supports + shelves,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
