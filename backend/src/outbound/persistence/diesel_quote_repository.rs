//! PostgreSQL-backed `QuoteRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{QuoteRepository, RepositoryError};
use crate::domain::{NewQuote, Quote, QuotePatch};

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::{NewQuoteRow, QuoteChangeset, QuoteRow};
use super::pool::DbPool;
use super::schema::quotes;

#[derive(Clone)]
pub struct DieselQuoteRepository {
    pool: DbPool,
}

impl DieselQuoteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteRepository for DieselQuoteRepository {
    async fn list(&self) -> Result<Vec<Quote>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = quotes::table
            .select(QuoteRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Quote::from).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Quote>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = quotes::table
            .find(id)
            .select(QuoteRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Quote::from))
    }

    async fn insert(&self, new: NewQuote) -> Result<Quote, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(quotes::table)
            .values(NewQuoteRow::from(new))
            .returning(QuoteRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(Quote::from(row))
    }

    async fn update(&self, id: Uuid, patch: QuotePatch) -> Result<Option<Quote>, RepositoryError> {
        if patch.is_empty() {
            return self.find(id).await;
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(quotes::table.find(id))
            .set(QuoteChangeset::from(patch))
            .returning(QuoteRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Quote::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(quotes::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
