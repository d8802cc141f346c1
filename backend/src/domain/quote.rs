//! Quotes offered to customers for a solar installation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::validation::require_non_negative;
use crate::domain::DomainError;

/// A quote record. `customer_id` must reference an existing customer; the
/// handler verifies the reference before the quote is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub system_size: f64,
    pub cost: f64,
    pub subsidy_applied: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a quote.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuote {
    pub customer_id: Uuid,
    pub system_size: f64,
    pub cost: f64,
    pub subsidy_applied: f64,
}

impl NewQuote {
    /// Check the creation constraints.
    pub fn validated(
        customer_id: Uuid,
        system_size: f64,
        cost: f64,
        subsidy_applied: f64,
    ) -> Result<Self, DomainError> {
        require_non_negative("System size", system_size)?;
        require_non_negative("Cost", cost)?;
        require_non_negative("Subsidy applied", subsidy_applied)?;
        Ok(Self {
            customer_id,
            system_size,
            cost,
            subsidy_applied,
        })
    }
}

/// Partial update for a quote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuotePatch {
    pub customer_id: Option<Uuid>,
    pub system_size: Option<f64>,
    pub cost: Option<f64>,
    pub subsidy_applied: Option<f64>,
}

impl QuotePatch {
    /// Check the constraints on whichever fields are present.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(size) = self.system_size {
            require_non_negative("System size", size)?;
        }
        if let Some(cost) = self.cost {
            require_non_negative("Cost", cost)?;
        }
        if let Some(subsidy) = self.subsidy_applied {
            require_non_negative("Subsidy applied", subsidy)?;
        }
        Ok(())
    }

    /// True when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_none()
            && self.system_size.is_none()
            && self.cost.is_none()
            && self.subsidy_applied.is_none()
    }

    /// Merge the provided fields onto an existing record.
    pub fn apply(&self, quote: &mut Quote) {
        if let Some(customer_id) = self.customer_id {
            quote.customer_id = customer_id;
        }
        if let Some(size) = self.system_size {
            quote.system_size = size;
        }
        if let Some(cost) = self.cost {
            quote.cost = cost;
        }
        if let Some(subsidy) = self.subsidy_applied {
            quote.subsidy_applied = subsidy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_rejects_negative_cost() {
        let err = NewQuote::validated(Uuid::new_v4(), 5.0, -100.0, 0.0).expect_err("negative cost");
        assert_eq!(err.message(), "Cost cannot be negative");
    }

    #[test]
    fn patch_validates_present_fields_only() {
        let patch = QuotePatch {
            subsidy_applied: Some(-1.0),
            ..QuotePatch::default()
        };
        assert!(patch.validate().is_err());
        assert!(QuotePatch::default().validate().is_ok());
        assert!(QuotePatch::default().is_empty());
    }
}
