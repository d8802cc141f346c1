//! Inventory of panels, inverters, and other stock items.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::validation::{require_non_blank, require_non_negative_int};
use crate::domain::DomainError;

/// Default alert threshold when none is supplied.
pub const DEFAULT_THRESHOLD: i32 = 10;

/// A stock item with its reorder threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: Uuid,
    pub item_name: String,
    pub stock_level: i32,
    pub threshold: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Low stock means the current level is below this item's own threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock_level < self.threshold
    }
}

/// Validated input for creating an inventory item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInventoryItem {
    pub item_name: String,
    pub stock_level: i32,
    pub threshold: i32,
}

impl NewInventoryItem {
    /// Check the creation constraints and trim the item name.
    pub fn validated(
        item_name: String,
        stock_level: i32,
        threshold: i32,
    ) -> Result<Self, DomainError> {
        require_non_blank("Item name", &item_name)?;
        require_non_negative_int("Stock level", stock_level)?;
        require_non_negative_int("Threshold", threshold)?;
        Ok(Self {
            item_name: item_name.trim().to_owned(),
            stock_level,
            threshold,
        })
    }
}

/// Partial update for an inventory item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryPatch {
    pub item_name: Option<String>,
    pub stock_level: Option<i32>,
    pub threshold: Option<i32>,
}

impl InventoryPatch {
    /// Check the constraints on whichever fields are present.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.item_name {
            require_non_blank("Item name", name)?;
        }
        if let Some(level) = self.stock_level {
            require_non_negative_int("Stock level", level)?;
        }
        if let Some(threshold) = self.threshold {
            require_non_negative_int("Threshold", threshold)?;
        }
        Ok(())
    }

    /// True when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.item_name.is_none() && self.stock_level.is_none() && self.threshold.is_none()
    }

    /// Merge the provided fields onto an existing record.
    pub fn apply(&self, item: &mut InventoryItem) {
        if let Some(name) = &self.item_name {
            item.item_name = name.trim().to_owned();
        }
        if let Some(level) = self.stock_level {
            item.stock_level = level;
        }
        if let Some(threshold) = self.threshold {
            item.threshold = threshold;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn item(stock_level: i32, threshold: i32) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            item_name: "Panel 400W".into(),
            stock_level,
            threshold,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    #[case(5, 10, true)]
    #[case(15, 10, false)]
    #[case(10, 10, false)]
    fn low_stock_compares_against_own_threshold(
        #[case] stock_level: i32,
        #[case] threshold: i32,
        #[case] low: bool,
    ) {
        assert_eq!(item(stock_level, threshold).is_low_stock(), low);
    }

    #[test]
    fn creation_rejects_negative_stock() {
        let err = NewInventoryItem::validated("Panel".into(), -1, DEFAULT_THRESHOLD)
            .expect_err("negative stock");
        assert_eq!(err.message(), "Stock level cannot be negative");
    }
}
