//! Customer records for the CRM.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::validation::{require_non_blank, require_non_negative};
use crate::domain::DomainError;

/// Whether a customer is a household or a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    #[default]
    Residential,
    Commercial,
}

/// A customer record.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub energy_needs: f64,
    pub customer_type: CustomerType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a customer. Name and contact are stored
/// trimmed, matching the store-side normalisation of the dashboard forms.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub contact: String,
    pub energy_needs: f64,
    pub customer_type: CustomerType,
}

impl NewCustomer {
    /// Check the creation constraints and normalise the text fields.
    pub fn validated(
        name: String,
        contact: String,
        energy_needs: f64,
        customer_type: CustomerType,
    ) -> Result<Self, DomainError> {
        require_non_blank("Name", &name)?;
        require_non_blank("Contact", &contact)?;
        require_non_negative("Energy needs", energy_needs)?;
        Ok(Self {
            name: name.trim().to_owned(),
            contact: contact.trim().to_owned(),
            energy_needs,
            customer_type,
        })
    }
}

/// Partial update: absent fields leave the record untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub energy_needs: Option<f64>,
    pub customer_type: Option<CustomerType>,
}

impl CustomerPatch {
    /// Check the constraints on whichever fields are present.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            require_non_blank("Name", name)?;
        }
        if let Some(contact) = &self.contact {
            require_non_blank("Contact", contact)?;
        }
        if let Some(needs) = self.energy_needs {
            require_non_negative("Energy needs", needs)?;
        }
        Ok(())
    }

    /// True when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.contact.is_none()
            && self.energy_needs.is_none()
            && self.customer_type.is_none()
    }

    /// Merge the provided fields onto an existing record.
    pub fn apply(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.trim().to_owned();
        }
        if let Some(contact) = &self.contact {
            customer.contact = contact.trim().to_owned();
        }
        if let Some(needs) = self.energy_needs {
            customer.energy_needs = needs;
        }
        if let Some(kind) = self.customer_type {
            customer.customer_type = kind;
        }
    }
}
