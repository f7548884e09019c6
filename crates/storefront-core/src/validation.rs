//! # Validation Module
//!
//! Boundary validation for catalog data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Content loading (storefront-content)                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: catalog entries checked, bad ones skipped            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart transitions (cart.rs)                                   │
//! │  └── Trust their input: no checks, no errors                           │
//! │                                                                         │
//! │  A product that reaches the add-to-cart button already passed layer 1  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::cart::CartCandidate;
//! use storefront_core::money::Money;
//! use storefront_core::validation::validate_candidate;
//!
//! let tea = CartCandidate::new("tea-01", "Jasmine Tea", Money::from_cents(450), "/tea.webp");
//! assert!(validate_candidate(&tea).is_ok());
//! ```

use crate::cart::CartCandidate;
use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_PRODUCT_ID_LEN, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product identifier.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_PRODUCT_ID_LEN`] characters
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_id;
///
/// assert!(validate_product_id("tea-01").is_ok());
/// assert!(validate_product_id("   ").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    validate_text("id", id, MAX_PRODUCT_ID_LEN)
}

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_PRODUCT_NAME_LEN`] characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_PRODUCT_NAME_LEN)
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    // Character count, not bytes: catalog names are often non-Latin
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Zero is allowed (free samples)
/// - Negative is rejected
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates everything a cart candidate carries.
///
/// The image reference is not checked: a missing image renders a
/// placeholder, it does not make the product unsellable.
pub fn validate_candidate(candidate: &CartCandidate) -> ValidationResult<()> {
    validate_product_id(&candidate.id)?;
    validate_product_name(&candidate.name)?;
    validate_price(candidate.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("tea-01").is_ok());
        assert!(validate_product_id("42").is_ok());
        assert!(matches!(
            validate_product_id(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_id(&"x".repeat(MAX_PRODUCT_ID_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_product_name_counts_characters() {
        assert!(validate_product_name("ชาสมุนไพรแท้").is_ok());
        // 200 Thai characters are well over 200 bytes but still valid
        assert!(validate_product_name(&"ช".repeat(MAX_PRODUCT_NAME_LEN)).is_ok());
        assert!(validate_product_name(&"ช".repeat(MAX_PRODUCT_NAME_LEN + 1)).is_err());
        assert!(validate_product_name("  ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_candidate() {
        let ok = CartCandidate::new("a", "Tea", Money::from_cents(100), "");
        assert!(validate_candidate(&ok).is_ok());

        let bad_price = CartCandidate::new("a", "Tea", Money::from_cents(-100), "");
        assert!(validate_candidate(&bad_price).is_err());

        let no_name = CartCandidate::new("a", "", Money::from_cents(100), "");
        assert!(validate_candidate(&no_name).is_err());
    }
}
