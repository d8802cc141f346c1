//! Installation projects tracked per customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::DomainError;

/// Project lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Pending,
    Ongoing,
    Completed,
}

impl ProjectStatus {
    /// Pending and ongoing projects count as active on the dashboard.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Ongoing)
    }
}

/// An installation project with an ordered list of milestone descriptions.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: ProjectStatus,
    pub milestones: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a project.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub customer_id: Uuid,
    pub status: ProjectStatus,
    pub milestones: Vec<String>,
}

impl NewProject {
    /// Build a creation payload; status defaults to pending upstream.
    pub fn validated(
        customer_id: Uuid,
        status: ProjectStatus,
        milestones: Vec<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            customer_id,
            status,
            milestones,
        })
    }
}

/// Partial update for a project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub customer_id: Option<Uuid>,
    pub status: Option<ProjectStatus>,
    pub milestones: Option<Vec<String>>,
}

impl ProjectPatch {
    /// True when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_none() && self.status.is_none() && self.milestones.is_none()
    }

    /// Merge the provided fields onto an existing record. Milestones are
    /// replaced wholesale, preserving the submitted order.
    pub fn apply(&self, project: &mut Project) {
        if let Some(customer_id) = self.customer_id {
            project.customer_id = customer_id;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(milestones) = &self.milestones {
            project.milestones = milestones.clone();
        }
    }
}
