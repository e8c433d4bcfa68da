use super::employee_error::EmployeeError;
use crate::db::PgPool;
use crate::db_models::{Employee, EmployeeChangeset};
use crate::schema::employees::dsl::*;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

pub async fn list_all(pool: &PgPool) -> Result<Vec<Employee>, EmployeeError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| EmployeeError::DbConnectionError(err.to_string()))?;
    employees
        .order(created_at.desc())
        .select(Employee::as_select())
        .load(&mut conn)
        .await
        .map_err(|err| EmployeeError::QueryError(err.to_string()))
}

pub async fn insert(pool: &PgPool, record: &Employee) -> Result<(), EmployeeError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| EmployeeError::DbConnectionError(err.to_string()))?;
    diesel::insert_into(employees)
        .values(record)
        .execute(&mut conn)
        .await
        .map_err(|err| EmployeeError::QueryError(err.to_string()))?;
    Ok(())
}

pub async fn update(
    pool: &PgPool,
    target_id: Uuid,
    changeset: EmployeeChangeset,
) -> Result<Option<Employee>, EmployeeError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| EmployeeError::DbConnectionError(err.to_string()))?;
    diesel::update(employees.find(target_id))
        .set(changeset)
        .returning(Employee::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(|err| EmployeeError::QueryError(err.to_string()))
}

pub async fn delete(pool: &PgPool, target_id: Uuid) -> Result<bool, EmployeeError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| EmployeeError::DbConnectionError(err.to_string()))?;
    let affected = diesel::delete(employees.find(target_id))
        .execute(&mut conn)
        .await
        .map_err(|err| EmployeeError::QueryError(err.to_string()))?;
    Ok(affected > 0)
}
