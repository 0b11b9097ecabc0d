//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError   - store lookups, config loading, malformed commands       │
//! │  FieldError  - one per-field form message, collected (never raised)    │
//! │                                                                         │
//! │  Flow:                                                                  │
//! │    form submit ──► validator ──► ValidationErrors { field → FieldError }│
//! │    update(id)  ──► store     ──► CoreError::ProductNotFound             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, field, value)
//! 3. `FieldError`'s Display text is exactly what the form shows

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core catalog errors.
///
/// None of these are fatal. The catalog facade turns `ProductNotFound` into a
/// no-op signal, since it only happens when the UI holds a stale id.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No record has this id (deleted, or never existed).
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The TOML configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A command payload from the shell could not be decoded.
    #[error("Invalid command payload: {0}")]
    InvalidCommand(#[from] serde_json::Error),
}

// =============================================================================
// Field Error
// =============================================================================

/// A validation failure on a single form field.
///
/// The Display text is the user-facing message rendered next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Product name is required")]
    NameRequired,

    #[error("Price is required")]
    PriceRequired,

    /// Unparseable or negative. Zero is allowed.
    #[error("Price must be a valid positive number")]
    PriceInvalid,

    #[error("Category is required")]
    CategoryRequired,

    /// Present but not a non-negative integer.
    #[error("Stock must be a valid non-negative number")]
    StockInvalid,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(42);
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = CoreError::InvalidConfig("page_size must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: page_size must be greater than 0"
        );
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::NameRequired.to_string(), "Product name is required");
        assert_eq!(FieldError::PriceRequired.to_string(), "Price is required");
        assert_eq!(
            FieldError::PriceInvalid.to_string(),
            "Price must be a valid positive number"
        );
        assert_eq!(FieldError::CategoryRequired.to_string(), "Category is required");
        assert_eq!(
            FieldError::StockInvalid.to_string(),
            "Stock must be a valid non-negative number"
        );
    }

    #[test]
    fn test_json_error_converts_to_core_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::InvalidCommand(_)));
    }
}
