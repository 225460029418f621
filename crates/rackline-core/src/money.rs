//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A quote that sums hundreds of beam/shelf line items in floats          │
//! │  drifts by cents, and a customer will notice a drifting quote.          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price in the tables is an i64 cent amount. With the            │
//! │    published price table the whole breakdown is exact: no               │
//! │    intermediate value is ever rounded.                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rackline_core::money::Money;
//!
//! // Create from cents (the only constructor)
//! let upright = Money::from_cents(5000); // €50.00
//!
//! // Arithmetic operations
//! let pair = upright * 2;                       // €100.00
//! let total = pair + Money::from_cents(1500);   // €115.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(49.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for EUR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for discounts/corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Price table (uprights/beams/supports) ──► Pricing breakdown            │
/// │                                                                         │
/// │  Product.precio_cents ──► CartItem line total ──► cart total            │
/// │                                                                         │
/// │  Pricing.total + cart total ──► estimated quote (margin applied)        │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rackline_core::money::Money;
    ///
    /// let beam_meter = Money::from_cents(1000); // €10.00 per meter
    /// assert_eq!(beam_meter.cents(), 1000);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The price tables, calculations, and export document all use cents.
    /// Only the UI converts to a localized currency string for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    ///
    /// ## Example
    /// ```rust
    /// use rackline_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.euros(), 10);
    /// ```
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use rackline_core::money::Money;
    ///
    /// let anchor = Money::from_cents(450); // €4.50 per anchor bolt
    /// let line_total = anchor.multiply_quantity(4);
    /// assert_eq!(line_total.cents(), 1800); // €18.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a commercial margin and returns the marked-up amount.
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(cents × (10000 + bps) + 5000) / 10000`.
    /// i128 widening prevents overflow on large quotes.
    ///
    /// ## Example
    /// ```rust
    /// use rackline_core::money::{MarginRate, Money};
    ///
    /// let net = Money::from_cents(14100);          // €141.00 breakdown total
    /// let quoted = net.with_margin(MarginRate::from_bps(3000)); // +30%
    /// assert_eq!(quoted.cents(), 18330);           // €183.30
    /// ```
    pub fn with_margin(&self, rate: MarginRate) -> Money {
        let marked = (self.0 as i128 * (10_000 + rate.bps() as i128) + 5_000) / 10_000;
        Money::from_cents(marked as i64)
    }
}

// =============================================================================
// Margin Rate
// =============================================================================

/// Commercial margin rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 3000 bps = 30% (the showroom markup on estimated quotes)
///
/// The margin applies only to the derived quote estimate, never to the
/// canonical `Pricing` breakdown, which stays a net structural cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MarginRate(u32);

impl MarginRate {
    /// Creates a margin rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        MarginRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero margin (quotes at net cost).
    #[inline]
    pub const fn zero() -> Self {
        MarginRate(0)
    }
}

impl Default for MarginRate {
    fn default() -> Self {
        MarginRate::zero()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and the CLI quote table. The configurator
/// frontend formats currency itself to handle the es-ES locale.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.euros().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation of Money iterators (line-item folds).
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
