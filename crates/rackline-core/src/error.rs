//! # Error Types
//!
//! Domain-specific error types for rackline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rackline-core errors (this file)                                       │
//! │  ├── ValidationError  - Strict input validation failures                │
//! │  └── DocumentError    - Design document import failures                 │
//! │                                                                         │
//! │  Store mutations NEVER error. Out-of-range input is clamped or          │
//! │  silently dropped and the operation reports `false` (unchanged).        │
//! │  These types exist only at the genuinely fallible boundaries:           │
//! │  parsing operator-typed input and parsing untrusted JSON.               │
//! │                                                                         │
//! │  Flow: CLI text ──► ValidationError ──► operator message                │
//! │        JSON file ──► DocumentError  ──► operator message                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, bounds, values)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator-typed input doesn't meet requirements.
/// Used by the strict validators in `validation.rs` before values reach
/// the clamping store surface, so a mistyped flag fails loudly instead of
/// being quietly corrected.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Document Error
// =============================================================================

/// Design document import errors.
///
/// A saved design document is untrusted text: it may be truncated, edited
/// by hand, or produced by an older build. Import parses it and then
/// cross-checks the embedded totals against the embedded line items, so a
/// tampered file cannot smuggle a wrong price into a re-opened quote.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The JSON could not be parsed into a design document.
    #[error("invalid design document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A stored total disagrees with the line items it claims to summarize.
    #[error("inconsistent design document: {field} is {found} cents, expected {expected}")]
    Inconsistent {
        field: String,
        expected: i64,
        found: i64,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "material".to_string(),
        };
        assert_eq!(err.to_string(), "material is required");

        let err = ValidationError::OutOfRange {
            field: "width".to_string(),
            min: 1100,
            max: 2200,
        };
        assert_eq!(err.to_string(), "width must be between 1100 and 2200");
    }

    #[test]
    fn test_not_allowed_lists_choices() {
        let err = ValidationError::NotAllowed {
            field: "depth".to_string(),
            allowed: vec!["400".to_string(), "500".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "depth must be one of: [\"400\", \"500\"]"
        );
    }

    #[test]
    fn test_document_error_wraps_serde_json() {
        let parse_err = serde_json::from_str::<i64>("not json").unwrap_err();
        let err: DocumentError = parse_err.into();
        assert!(matches!(err, DocumentError::Parse(_)));
        assert!(err.to_string().starts_with("invalid design document:"));
    }

    #[test]
    fn test_inconsistent_message() {
        let err = DocumentError::Inconsistent {
            field: "totalCartPrice".to_string(),
            expected: 1800,
            found: 1700,
        };
        assert_eq!(
            err.to_string(),
            "inconsistent design document: totalCartPrice is 1700 cents, expected 1800"
        );
    }
}
