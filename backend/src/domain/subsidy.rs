//! Government or utility subsidies a customer may claim.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::validation::{require_non_blank, require_non_negative};
use crate::domain::DomainError;

/// A subsidy programme. `eligibility_criteria` is free text, e.g.
/// "Residential, energyNeeds > 500".
#[derive(Debug, Clone, PartialEq)]
pub struct Subsidy {
    pub id: Uuid,
    pub name: String,
    pub eligibility_criteria: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a subsidy.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubsidy {
    pub name: String,
    pub eligibility_criteria: String,
    pub amount: f64,
}

impl NewSubsidy {
    /// Check the creation constraints and trim the name.
    pub fn validated(
        name: String,
        eligibility_criteria: String,
        amount: f64,
    ) -> Result<Self, DomainError> {
        require_non_blank("Subsidy name", &name)?;
        require_non_blank("Eligibility criteria", &eligibility_criteria)?;
        require_non_negative("Amount", amount)?;
        Ok(Self {
            name: name.trim().to_owned(),
            eligibility_criteria,
            amount,
        })
    }
}

/// Partial update for a subsidy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubsidyPatch {
    pub name: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub amount: Option<f64>,
}

impl SubsidyPatch {
    /// Check the constraints on whichever fields are present.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            require_non_blank("Subsidy name", name)?;
        }
        if let Some(criteria) = &self.eligibility_criteria {
            require_non_blank("Eligibility criteria", criteria)?;
        }
        if let Some(amount) = self.amount {
            require_non_negative("Amount", amount)?;
        }
        Ok(())
    }

    /// True when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.eligibility_criteria.is_none() && self.amount.is_none()
    }

    /// Merge the provided fields onto an existing record.
    pub fn apply(&self, subsidy: &mut Subsidy) {
        if let Some(name) = &self.name {
            subsidy.name = name.trim().to_owned();
        }
        if let Some(criteria) = &self.eligibility_criteria {
            subsidy.eligibility_criteria = criteria.clone();
        }
        if let Some(amount) = self.amount {
            subsidy.amount = amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_requires_all_fields() {
        let err = NewSubsidy::validated("".into(), "criteria".into(), 10.0).expect_err("no name");
        assert_eq!(err.message(), "Subsidy name is required");
        let err =
            NewSubsidy::validated("PV grant".into(), " ".into(), 10.0).expect_err("no criteria");
        assert_eq!(err.message(), "Eligibility criteria is required");
        let err =
            NewSubsidy::validated("PV grant".into(), "criteria".into(), -1.0).expect_err("amount");
        assert_eq!(err.message(), "Amount cannot be negative");
    }
}
