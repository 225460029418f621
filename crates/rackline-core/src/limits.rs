//! # Dimensional Limits
//!
//! The manufacturing envelope every configuration must stay inside.
//!
//! ## The Envelope
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Shelving Module (bay)                            │
//! │                                                                         │
//! │        width: 1100-2200 mm                                              │
//! │       ◄──────────────────►                                              │
//! │      ║══════════════════║  ▲                                            │
//! │      ║                  ║  │                                            │
//! │      ║══════════════════║  │ height: 1000-5000 mm (global, shared       │
//! │      ║                  ║  │         by every module in the row)        │
//! │      ║══════════════════║  │                                            │
//! │      ║                  ║  ▼                                            │
//! │      ╚══════════════════╝                                               │
//! │       depth: one of {400, 500, 600, 800, 1000, 1200} mm (global)        │
//! │                                                                         │
//! │       levels per module: 2-8                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Enforcement Modes
//! - The store **clamps** dimensions into range and **drops** invalid depths
//!   (slider input; correcting silently is the friendly behavior).
//! - `validation.rs` **rejects** with a typed error (typed CLI input: a
//!   typo should fail loudly, not be quietly corrected).
//!
//! Both modes read the same constants below, so the two surfaces can never
//! disagree about what "valid" means.

// =============================================================================
// Module Width (per module)
// =============================================================================

/// Minimum module width in millimeters.
///
/// ## Business Reason
/// Narrower bays cannot fit the standard beam end connectors.
pub const MIN_WIDTH_MM: u32 = 1100;

/// Maximum module width in millimeters.
///
/// ## Business Reason
/// Beyond 2200 mm the beams need an intermediate post, which this product
/// line does not offer. Wider installations are modeled as more modules.
pub const MAX_WIDTH_MM: u32 = 2200;

/// Factory width for a newly added module, in millimeters.
pub const DEFAULT_WIDTH_MM: u32 = 1800;

// =============================================================================
// Row Height (global)
// =============================================================================

/// Minimum row height in millimeters.
pub const MIN_HEIGHT_MM: u32 = 1000;

/// Maximum row height in millimeters.
///
/// ## Business Reason
/// 5 m is the tallest upright the catalog carries. Anything taller is a
/// custom engineering order outside the configurator.
pub const MAX_HEIGHT_MM: u32 = 5000;

/// Factory row height, in millimeters.
pub const DEFAULT_HEIGHT_MM: u32 = 2000;

// =============================================================================
// Row Depth (global)
// =============================================================================

/// The depths (in millimeters) the upright frames are manufactured in.
///
/// Depth is not a continuous range: frames are welded at fixed depths, so
/// any other value is rejected rather than clamped (there is no sensible
/// "nearest" correction to e.g. 700, so the store keeps the prior depth).
pub const ALLOWED_DEPTHS_MM: [u32; 6] = [400, 500, 600, 800, 1000, 1200];

/// Factory row depth, in millimeters.
pub const DEFAULT_DEPTH_MM: u32 = 600;

// =============================================================================
// Levels (per module)
// =============================================================================

/// Minimum levels per module.
///
/// ## Business Reason
/// A module needs a top and a bottom beam pair to be structurally rigid.
/// One level alone is a ladder, not a rack.
pub const MIN_LEVELS: usize = 2;

/// Maximum levels per module.
pub const MAX_LEVELS: usize = 8;

/// Vertical spacing for a freshly added level, in millimeters.
///
/// New levels land this far above the current highest level (clamped to
/// the row height). The user drags them to the final elevation afterwards.
pub const DEFAULT_LEVEL_SPACING_MM: u32 = 500;

// =============================================================================
// Clamp Helpers
// =============================================================================

/// Clamps a module width into the manufacturable range.
///
/// ## Example
/// ```rust
/// use rackline_core::limits::clamp_width;
///
/// assert_eq!(clamp_width(5000), 2200);
/// assert_eq!(clamp_width(100), 1100);
/// assert_eq!(clamp_width(1800), 1800);
/// ```
#[inline]
pub fn clamp_width(width_mm: u32) -> u32 {
    width_mm.clamp(MIN_WIDTH_MM, MAX_WIDTH_MM)
}

/// Clamps a row height into the manufacturable range.
#[inline]
pub fn clamp_height(height_mm: u32) -> u32 {
    height_mm.clamp(MIN_HEIGHT_MM, MAX_HEIGHT_MM)
}

/// Checks whether a depth is one of the manufactured frame depths.
#[inline]
pub fn is_allowed_depth(depth_mm: u32) -> bool {
    ALLOWED_DEPTHS_MM.contains(&depth_mm)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(MIN_WIDTH_MM - 1), MIN_WIDTH_MM);
        assert_eq!(clamp_width(MAX_WIDTH_MM + 1), MAX_WIDTH_MM);
        assert_eq!(clamp_width(1500), 1500);
        assert_eq!(clamp_width(0), MIN_WIDTH_MM);
    }

    #[test]
    fn test_clamp_height() {
        assert_eq!(clamp_height(999), 1000);
        assert_eq!(clamp_height(6000), 5000);
        assert_eq!(clamp_height(2000), 2000);
    }

    #[test]
    fn test_allowed_depths() {
        for depth in ALLOWED_DEPTHS_MM {
            assert!(is_allowed_depth(depth));
        }
        assert!(!is_allowed_depth(700));
        assert!(!is_allowed_depth(0));
        assert!(!is_allowed_depth(1300));
    }

    #[test]
    fn test_defaults_are_within_bounds() {
        assert_eq!(clamp_width(DEFAULT_WIDTH_MM), DEFAULT_WIDTH_MM);
        assert_eq!(clamp_height(DEFAULT_HEIGHT_MM), DEFAULT_HEIGHT_MM);
        assert!(is_allowed_depth(DEFAULT_DEPTH_MM));
    }
}
