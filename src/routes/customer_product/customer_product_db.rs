use super::customer_product_error::CustomerProductError;
use crate::db::PgPool;
use crate::db_models::{CustomerProduct, CustomerProductChangeset, CustomerProductRow};
use crate::schema::customer_products::dsl as cp;
use crate::schema::{customers, inventory};
use chrono::{Months, NaiveDate, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

/// Service rollover rule: last service today, next service three calendar
/// months out, whatever the record held before.
pub fn service_rollover(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today + Months::new(3))
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<CustomerProductRow>, CustomerProductError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| CustomerProductError::DbConnectionError(err.to_string()))?;
    cp::customer_products
        .inner_join(customers::table)
        .left_join(inventory::table)
        .order(cp::updated_at.desc())
        .select((
            cp::ownership_id,
            cp::customer_id,
            cp::product_id,
            cp::serial_number,
            cp::installation_date,
            cp::last_service_date,
            cp::next_service_date,
            cp::remarks,
            cp::created_at,
            cp::updated_at,
            customers::name,
            inventory::product_name.nullable(),
        ))
        .load(&mut conn)
        .await
        .map_err(|err| CustomerProductError::QueryError(err.to_string()))
}

pub async fn list_by_customer(
    pool: &PgPool,
    target_customer_id: Uuid,
) -> Result<Vec<CustomerProductRow>, CustomerProductError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| CustomerProductError::DbConnectionError(err.to_string()))?;
    cp::customer_products
        .inner_join(customers::table)
        .left_join(inventory::table)
        .filter(cp::customer_id.eq(target_customer_id))
        .order(cp::updated_at.desc())
        .select((
            cp::ownership_id,
            cp::customer_id,
            cp::product_id,
            cp::serial_number,
            cp::installation_date,
            cp::last_service_date,
            cp::next_service_date,
            cp::remarks,
            cp::created_at,
            cp::updated_at,
            customers::name,
            inventory::product_name.nullable(),
        ))
        .load(&mut conn)
        .await
        .map_err(|err| CustomerProductError::QueryError(err.to_string()))
}

pub async fn insert(pool: &PgPool, record: &CustomerProduct) -> Result<(), CustomerProductError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| CustomerProductError::DbConnectionError(err.to_string()))?;
    diesel::insert_into(cp::customer_products)
        .values(record)
        .execute(&mut conn)
        .await
        .map_err(|err| CustomerProductError::QueryError(err.to_string()))?;
    Ok(())
}

pub async fn update(
    pool: &PgPool,
    target_id: Uuid,
    changeset: CustomerProductChangeset,
) -> Result<bool, CustomerProductError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| CustomerProductError::DbConnectionError(err.to_string()))?;
    let affected = diesel::update(cp::customer_products.find(target_id))
        .set(changeset)
        .execute(&mut conn)
        .await
        .map_err(|err| CustomerProductError::QueryError(err.to_string()))?;
    Ok(affected > 0)
}

pub async fn delete(pool: &PgPool, target_id: Uuid) -> Result<bool, CustomerProductError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| CustomerProductError::DbConnectionError(err.to_string()))?;
    let affected = diesel::delete(cp::customer_products.find(target_id))
        .execute(&mut conn)
        .await
        .map_err(|err| CustomerProductError::QueryError(err.to_string()))?;
    Ok(affected > 0)
}

pub async fn mark_as_serviced(
    pool: &PgPool,
    target_id: Uuid,
) -> Result<bool, CustomerProductError> {
    let (last_service, next_service) = service_rollover(Utc::now().date_naive());
    let mut conn = pool
        .get()
        .await
        .map_err(|err| CustomerProductError::DbConnectionError(err.to_string()))?;
    let affected = diesel::update(cp::customer_products.find(target_id))
        .set((
            cp::last_service_date.eq(last_service),
            cp::next_service_date.eq(next_service),
            cp::updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)
        .await
        .map_err(|err| CustomerProductError::QueryError(err.to_string()))?;
    Ok(affected > 0)
}
