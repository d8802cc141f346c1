//! PostgreSQL-backed `SubsidyRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{RepositoryError, SubsidyRepository};
use crate::domain::{NewSubsidy, Subsidy, SubsidyPatch};

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::{NewSubsidyRow, SubsidyChangeset, SubsidyRow};
use super::pool::DbPool;
use super::schema::subsidies;

#[derive(Clone)]
pub struct DieselSubsidyRepository {
    pool: DbPool,
}

impl DieselSubsidyRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubsidyRepository for DieselSubsidyRepository {
    async fn list(&self) -> Result<Vec<Subsidy>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = subsidies::table
            .select(SubsidyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Subsidy::from).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Subsidy>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = subsidies::table
            .find(id)
            .select(SubsidyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Subsidy::from))
    }

    async fn insert(&self, new: NewSubsidy) -> Result<Subsidy, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(subsidies::table)
            .values(NewSubsidyRow::from(new))
            .returning(SubsidyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(Subsidy::from(row))
    }

    async fn update(
        &self,
        id: Uuid,
        patch: SubsidyPatch,
    ) -> Result<Option<Subsidy>, RepositoryError> {
        if patch.is_empty() {
            return self.find(id).await;
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(subsidies::table.find(id))
            .set(SubsidyChangeset::from(patch))
            .returning(SubsidyRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Subsidy::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(subsidies::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
