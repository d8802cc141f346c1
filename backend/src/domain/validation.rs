//! Declarative constraint checks shared by the entity modules.
//!
//! Each helper takes the human-facing field name so messages stay uniform
//! across entities ("Name is required", "Cost cannot be negative", ...).

use crate::domain::DomainError;

/// Require a non-blank string once trimmed of whitespace.
pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_request(format!("{field} is required")));
    }
    Ok(())
}

/// Require a non-negative floating-point value.
pub fn require_non_negative(field: &'static str, value: f64) -> Result<(), DomainError> {
    if value < 0.0 {
        return Err(DomainError::invalid_request(format!(
            "{field} cannot be negative"
        )));
    }
    Ok(())
}

/// Require a non-negative integer value.
pub fn require_non_negative_int(field: &'static str, value: i32) -> Result<(), DomainError> {
    if value < 0 {
        return Err(DomainError::invalid_request(format!(
            "{field} cannot be negative"
        )));
    }
    Ok(())
}

/// Require a minimum length once trimmed.
pub fn require_min_len(
    field: &'static str,
    value: &str,
    min: usize,
) -> Result<(), DomainError> {
    if value.trim().len() < min {
        return Err(DomainError::invalid_request(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected_with_the_field_name() {
        let err = require_non_blank("Name", "   ").expect_err("blank must fail");
        assert_eq!(err.message(), "Name is required");
        assert!(require_non_blank("Name", "Ada").is_ok());
    }

    #[test]
    fn negative_values_are_rejected() {
        let err = require_non_negative("Cost", -1.0).expect_err("negative must fail");
        assert_eq!(err.message(), "Cost cannot be negative");
        assert!(require_non_negative("Cost", 0.0).is_ok());
        assert!(require_non_negative_int("Threshold", 0).is_ok());
        assert!(require_non_negative_int("Threshold", -3).is_err());
    }

    #[test]
    fn minimum_length_is_enforced() {
        let err = require_min_len("Password", "short", 6).expect_err("too short");
        assert_eq!(err.message(), "Password must be at least 6 characters");
        assert!(require_min_len("Password", "longer", 6).is_ok());
        assert!(require_min_len("Password", "      ", 6).is_err());
    }
}
