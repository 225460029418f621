//! # Validation Module
//!
//! Strict input validation for operator-typed values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Enforcement Surfaces                           │
//! │                                                                         │
//! │  Surface 1: Store mutations (store.rs)                                  │
//! │  ├── Sliders and drag handles feed them continuous values               │
//! │  ├── Out-of-range input is CLAMPED, invalid depth is DROPPED            │
//! │  └── Never errors; rejection is observable as `false` (unchanged)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Surface 2: THIS MODULE                                                 │
//! │  ├── CLI flags and typed form fields pass through here first            │
//! │  ├── A typo should fail loudly, not be silently corrected               │
//! │  └── Returns typed ValidationError with bounds in the message           │
//! │                                                                         │
//! │  Both read the same constants in limits.rs, so they cannot disagree     │
//! │  about what "valid" means.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rackline_core::validation::{validate_width_mm, validate_depth_mm};
//!
//! assert!(validate_width_mm(1800).is_ok());
//! assert!(validate_width_mm(100).is_err());   // store would clamp; we reject
//! assert!(validate_depth_mm(600).is_ok());
//! assert!(validate_depth_mm(700).is_err());   // not a manufactured depth
//! ```

use crate::error::ValidationError;
use crate::limits::{
    ALLOWED_DEPTHS_MM, MAX_HEIGHT_MM, MAX_LEVELS, MAX_WIDTH_MM, MIN_HEIGHT_MM, MIN_LEVELS,
    MIN_WIDTH_MM,
};
use crate::MAX_CART_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Dimension Validators
// =============================================================================

/// Validates a module width in millimeters.
///
/// ## Rules
/// - Must be between MIN_WIDTH_MM (1100) and MAX_WIDTH_MM (2200)
///
/// ## Example
/// ```rust
/// use rackline_core::validation::validate_width_mm;
///
/// assert!(validate_width_mm(1800).is_ok());
/// assert!(validate_width_mm(1100).is_ok());
/// assert!(validate_width_mm(5000).is_err());
/// ```
pub fn validate_width_mm(width_mm: u32) -> ValidationResult<()> {
    if width_mm < MIN_WIDTH_MM || width_mm > MAX_WIDTH_MM {
        return Err(ValidationError::OutOfRange {
            field: "width".to_string(),
            min: MIN_WIDTH_MM as i64,
            max: MAX_WIDTH_MM as i64,
        });
    }

    Ok(())
}

/// Validates a global row height in millimeters.
///
/// ## Rules
/// - Must be between MIN_HEIGHT_MM (1000) and MAX_HEIGHT_MM (5000)
pub fn validate_height_mm(height_mm: u32) -> ValidationResult<()> {
    if height_mm < MIN_HEIGHT_MM || height_mm > MAX_HEIGHT_MM {
        return Err(ValidationError::OutOfRange {
            field: "height".to_string(),
            min: MIN_HEIGHT_MM as i64,
            max: MAX_HEIGHT_MM as i64,
        });
    }

    Ok(())
}

/// Validates a global row depth in millimeters.
///
/// ## Rules
/// - Must be one of the manufactured frame depths (400, 500, 600, 800,
///   1000, 1200); depth is a discrete catalog choice, not a range
pub fn validate_depth_mm(depth_mm: u32) -> ValidationResult<()> {
    if !ALLOWED_DEPTHS_MM.contains(&depth_mm) {
        return Err(ValidationError::NotAllowed {
            field: "depth".to_string(),
            allowed: ALLOWED_DEPTHS_MM.iter().map(|d| d.to_string()).collect(),
        });
    }

    Ok(())
}

// =============================================================================
// Count Validators
// =============================================================================

/// Validates a per-module level count.
///
/// ## Rules
/// - Must be between MIN_LEVELS (2) and MAX_LEVELS (8)
pub fn validate_level_count(count: usize) -> ValidationResult<()> {
    if count < MIN_LEVELS || count > MAX_LEVELS {
        return Err(ValidationError::OutOfRange {
            field: "levels".to_string(),
            min: MIN_LEVELS as i64,
            max: MAX_LEVELS as i64,
        });
    }

    Ok(())
}

/// Validates a module count for a new design.
///
/// ## Rules
/// - Must be positive (a row with zero bays is not a design)
pub fn validate_module_count(count: usize) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::MustBePositive {
            field: "modules".to_string(),
        });
    }

    Ok(())
}

/// Validates a cart quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_CART_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Quoter: --extras ACC-001=5                                             │
/// │                                                                         │
/// │  Operator enters quantity: 5                                            │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"                │
/// │       │                                                                 │
/// │       ├── qty > 999? → Error: "quantity must be between 1 and 999"      │
/// │       │                                                                 │
/// │       └── OK → Proceed with cart.add                                    │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_CART_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_CART_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
