use super::inventory_error::InventoryError;
use crate::db::PgPool;
use crate::db_models::{InventoryItem, InventoryItemChangeset};
use crate::schema::inventory::dsl::*;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

pub async fn list_all(pool: &PgPool) -> Result<Vec<InventoryItem>, InventoryError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| InventoryError::DbConnectionError(err.to_string()))?;
    inventory
        .order(created_at.desc())
        .select(InventoryItem::as_select())
        .load(&mut conn)
        .await
        .map_err(|err| InventoryError::QueryError(err.to_string()))
}

pub async fn insert(pool: &PgPool, record: &InventoryItem) -> Result<(), InventoryError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| InventoryError::DbConnectionError(err.to_string()))?;
    diesel::insert_into(inventory)
        .values(record)
        .execute(&mut conn)
        .await
        .map_err(|err| InventoryError::QueryError(err.to_string()))?;
    Ok(())
}

/// Returns false when no row matched the id.
pub async fn update(
    pool: &PgPool,
    target_id: Uuid,
    changeset: InventoryItemChangeset,
) -> Result<bool, InventoryError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| InventoryError::DbConnectionError(err.to_string()))?;
    let affected = diesel::update(inventory.find(target_id))
        .set(changeset)
        .execute(&mut conn)
        .await
        .map_err(|err| InventoryError::QueryError(err.to_string()))?;
    Ok(affected > 0)
}

pub async fn delete(pool: &PgPool, target_id: Uuid) -> Result<bool, InventoryError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| InventoryError::DbConnectionError(err.to_string()))?;
    let affected = diesel::delete(inventory.find(target_id))
        .execute(&mut conn)
        .await
        .map_err(|err| InventoryError::QueryError(err.to_string()))?;
    Ok(affected > 0)
}
