//! PostgreSQL-backed `CustomerRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{CustomerRepository, RepositoryError};
use crate::domain::{Customer, CustomerPatch, NewCustomer};

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::{CustomerChangeset, CustomerRow, NewCustomerRow};
use super::pool::DbPool;
use super::schema::customers;

#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for DieselCustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = customers::table
            .select(CustomerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Customer>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = customers::table
            .find(id)
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Customer::from))
    }

    async fn insert(&self, new: NewCustomer) -> Result<Customer, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(customers::table)
            .values(NewCustomerRow::from(new))
            .returning(CustomerRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(Customer::from(row))
    }

    async fn update(
        &self,
        id: Uuid,
        patch: CustomerPatch,
    ) -> Result<Option<Customer>, RepositoryError> {
        // An all-None changeset is a Diesel error, so an empty patch reads
        // the current row instead.
        if patch.is_empty() {
            return self.find(id).await;
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(customers::table.find(id))
            .set(CustomerChangeset::from(patch))
            .returning(CustomerRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Customer::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(customers::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
