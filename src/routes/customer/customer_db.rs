use super::customer_error::CustomerError;
use crate::db::PgPool;
use crate::db_models::{Customer, CustomerChangeset};
use crate::schema::customers::dsl::*;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

pub async fn list_all(pool: &PgPool) -> Result<Vec<Customer>, CustomerError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| CustomerError::DbConnectionError(err.to_string()))?;
    customers
        .order(created_at.desc())
        .select(Customer::as_select())
        .load(&mut conn)
        .await
        .map_err(|err| CustomerError::QueryError(err.to_string()))
}

pub async fn get_by_id(pool: &PgPool, target_id: Uuid) -> Result<Option<Customer>, CustomerError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| CustomerError::DbConnectionError(err.to_string()))?;
    customers
        .find(target_id)
        .select(Customer::as_select())
        .first(&mut conn)
        .await
        .optional()
        .map_err(|err| CustomerError::QueryError(err.to_string()))
}

pub async fn insert(pool: &PgPool, record: &Customer) -> Result<(), CustomerError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| CustomerError::DbConnectionError(err.to_string()))?;
    diesel::insert_into(customers)
        .values(record)
        .execute(&mut conn)
        .await
        .map_err(|err| CustomerError::QueryError(err.to_string()))?;
    Ok(())
}

pub async fn update(
    pool: &PgPool,
    target_id: Uuid,
    changeset: CustomerChangeset,
) -> Result<Option<Customer>, CustomerError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| CustomerError::DbConnectionError(err.to_string()))?;
    diesel::update(customers.find(target_id))
        .set(changeset)
        .returning(Customer::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(|err| CustomerError::QueryError(err.to_string()))
}

pub async fn delete(pool: &PgPool, target_id: Uuid) -> Result<Option<Customer>, CustomerError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| CustomerError::DbConnectionError(err.to_string()))?;
    diesel::delete(customers.find(target_id))
        .returning(Customer::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(|err| CustomerError::QueryError(err.to_string()))
}
