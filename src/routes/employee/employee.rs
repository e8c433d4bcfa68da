use super::employee_db;
use super::employee_error::EmployeeError;
use crate::db::PgPool;
use crate::db_models::{Employee, EmployeeChangeset, IdProofType};
use crate::validations::fields::{MobileNumber, PersonName, RequiredText};
use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct EmployeeBody {
    name: String,
    mobile: String,
    address: String,
    id_proof_type: IdProofType,
    id_proof_number: String,
    branch_name: Option<String>,
    designation: Option<String>,
    joining_date: Option<NaiveDate>,
    updated_by: Option<String>,
}
impl EmployeeBody {
    pub fn validate(
        self,
    ) -> Result<(PersonName, MobileNumber, RequiredText, RequiredText), String> {
        let employee_name = PersonName::parse(self.name)?;
        let employee_mobile = MobileNumber::parse(self.mobile)?;
        let employee_address = RequiredText::parse(self.address, "address")?;
        let proof_number = RequiredText::parse(self.id_proof_number, "id_proof_number")?;
        Ok((employee_name, employee_mobile, employee_address, proof_number))
    }
}

/******************************************/
// Listing all Employees Route
/******************************************/
/**
 * @route   GET /api/employees
 */
#[instrument(name = "List all employees", skip(pool))]
pub async fn list_employees(pool: web::Data<PgPool>) -> Result<HttpResponse, EmployeeError> {
    let records = employee_db::list_all(&pool).await?;
    Ok(HttpResponse::Ok().json(records))
}

/******************************************/
// Adding Employee Route
/******************************************/
/**
 * @route   POST /api/employees
 */
#[instrument(name = "Add employee", skip(req_employee, pool), fields(name = %req_employee.name))]
pub async fn create_employee(
    pool: web::Data<PgPool>,
    req_employee: web::Json<EmployeeBody>,
) -> Result<HttpResponse, EmployeeError> {
    let employee_data = req_employee.into_inner();
    let id_proof_type = employee_data.id_proof_type.clone();
    let branch_name = employee_data.branch_name.clone();
    let designation = employee_data.designation.clone();
    let joining_date = employee_data.joining_date;
    let updated_by = employee_data.updated_by.clone();
    let (validated_name, validated_mobile, validated_address, validated_proof_number) =
        employee_data
            .validate()
            .map_err(EmployeeError::ValidationError)?;

    let now = Utc::now().naive_utc();
    let record = Employee {
        employee_id: Uuid::new_v4(),
        name: validated_name.as_ref().to_string(),
        mobile: validated_mobile.as_ref().to_string(),
        address: validated_address.as_ref().to_string(),
        id_proof_type,
        id_proof_number: validated_proof_number.as_ref().to_string(),
        branch_name,
        designation,
        joining_date,
        updated_by,
        created_at: now,
        updated_at: now,
    };
    employee_db::insert(&pool, &record).await?;
    Ok(HttpResponse::Created().json(record))
}

/******************************************/
// Updating Employee Route
/******************************************/
/**
 * @route   PUT /api/employees/:id
 */
#[instrument(name = "Update employee", skip(req_employee, pool), fields(name = %req_employee.name))]
pub async fn update_employee(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
    req_employee: web::Json<EmployeeBody>,
) -> Result<HttpResponse, EmployeeError> {
    let employee_data = req_employee.into_inner();
    let id_proof_type = employee_data.id_proof_type.clone();
    let branch_name = employee_data.branch_name.clone();
    let designation = employee_data.designation.clone();
    let joining_date = employee_data.joining_date;
    let updated_by = employee_data.updated_by.clone();
    let (validated_name, validated_mobile, validated_address, validated_proof_number) =
        employee_data
            .validate()
            .map_err(EmployeeError::ValidationError)?;

    let changeset = EmployeeChangeset {
        name: validated_name.as_ref().to_string(),
        mobile: validated_mobile.as_ref().to_string(),
        address: validated_address.as_ref().to_string(),
        id_proof_type,
        id_proof_number: validated_proof_number.as_ref().to_string(),
        branch_name,
        designation,
        joining_date,
        updated_by,
        updated_at: Utc::now().naive_utc(),
    };
    let updated = employee_db::update(&pool, id.into_inner(), changeset)
        .await?
        .ok_or_else(|| EmployeeError::NotFound("Employee not found".to_string()))?;
    Ok(HttpResponse::Ok().json(updated))
}

/******************************************/
// Deleting Employee Route
/******************************************/
/**
 * @route   DELETE /api/employees/:id
 */
#[instrument(name = "Delete employee", skip(pool))]
pub async fn delete_employee(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, EmployeeError> {
    let deleted = employee_db::delete(&pool, id.into_inner()).await?;
    if !deleted {
        return Err(EmployeeError::NotFound("Employee not found".to_string()));
    }
    Ok(HttpResponse::NoContent().finish())
}
