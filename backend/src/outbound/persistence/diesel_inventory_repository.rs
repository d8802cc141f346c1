//! PostgreSQL-backed `InventoryRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{InventoryRepository, RepositoryError};
use crate::domain::{InventoryItem, InventoryPatch, NewInventoryItem};

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::{InventoryChangeset, InventoryRow, NewInventoryRow};
use super::pool::DbPool;
use super::schema::inventory_items;

#[derive(Clone)]
pub struct DieselInventoryRepository {
    pool: DbPool,
}

impl DieselInventoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepository for DieselInventoryRepository {
    async fn list(&self) -> Result<Vec<InventoryItem>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = inventory_items::table
            .select(InventoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(InventoryItem::from).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<InventoryItem>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = inventory_items::table
            .find(id)
            .select(InventoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(InventoryItem::from))
    }

    async fn insert(&self, new: NewInventoryItem) -> Result<InventoryItem, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(inventory_items::table)
            .values(NewInventoryRow::from(new))
            .returning(InventoryRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(InventoryItem::from(row))
    }

    async fn update(
        &self,
        id: Uuid,
        patch: InventoryPatch,
    ) -> Result<Option<InventoryItem>, RepositoryError> {
        if patch.is_empty() {
            return self.find(id).await;
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(inventory_items::table.find(id))
            .set(InventoryChangeset::from(patch))
            .returning(InventoryRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(InventoryItem::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(inventory_items::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
