use super::customer_db;
use super::customer_error::CustomerError;
use crate::db::PgPool;
use crate::db_models::{Customer, CustomerChangeset};
use crate::validations::fields::{MobileNumber, PersonName, RequiredText};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CustomerBody {
    name: String,
    primary_mobile: String,
    secondary_mobile: Option<String>,
    address: String,
    map_location: Option<String>,
}
impl CustomerBody {
    pub fn validate(self) -> Result<(PersonName, MobileNumber, RequiredText), String> {
        let customer_name = PersonName::parse(self.name)?;
        let mobile = MobileNumber::parse(self.primary_mobile)?;
        let customer_address = RequiredText::parse(self.address, "address")?;
        Ok((customer_name, mobile, customer_address))
    }
}

/******************************************/
// Listing all Customers Route
/******************************************/
/**
 * @route   GET /api/customers
 */
#[instrument(name = "List all customers", skip(pool))]
pub async fn list_customers(pool: web::Data<PgPool>) -> Result<HttpResponse, CustomerError> {
    let records = customer_db::list_all(&pool).await?;
    Ok(HttpResponse::Ok().json(records))
}

/******************************************/
// Fetching One Customer Route
/******************************************/
/**
 * @route   GET /api/customers/:id
 */
#[instrument(name = "Get customer", skip(pool))]
pub async fn get_customer(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, CustomerError> {
    let record = customer_db::get_by_id(&pool, id.into_inner())
        .await?
        .ok_or_else(|| CustomerError::NotFound("Customer not found".to_string()))?;
    Ok(HttpResponse::Ok().json(record))
}

/******************************************/
// Registering Customer Route
/******************************************/
/**
 * @route   POST /api/customers
 */
#[instrument(name = "Create a new customer", skip(req_customer, pool), fields(name = %req_customer.name))]
pub async fn create_customer(
    pool: web::Data<PgPool>,
    req_customer: web::Json<CustomerBody>,
) -> Result<HttpResponse, CustomerError> {
    let customer_data = req_customer.into_inner();
    let secondary_mobile = customer_data.secondary_mobile.clone();
    let map_location = customer_data.map_location.clone();
    let (validated_name, validated_mobile, validated_address) = customer_data
        .validate()
        .map_err(CustomerError::ValidationError)?;

    // Identifier minted here so the caller learns it without a round trip
    let now = Utc::now().naive_utc();
    let record = Customer {
        customer_id: Uuid::new_v4(),
        name: validated_name.as_ref().to_string(),
        primary_mobile: validated_mobile.as_ref().to_string(),
        secondary_mobile,
        address: validated_address.as_ref().to_string(),
        map_location,
        created_at: now,
        updated_at: now,
    };
    customer_db::insert(&pool, &record).await?;
    Ok(HttpResponse::Created().json(record))
}

/******************************************/
// Updating Customer Route
/******************************************/
/**
 * @route   PUT /api/customers/:id
 */
#[instrument(name = "Update customer", skip(req_customer, pool), fields(name = %req_customer.name))]
pub async fn update_customer(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
    req_customer: web::Json<CustomerBody>,
) -> Result<HttpResponse, CustomerError> {
    let customer_data = req_customer.into_inner();
    let secondary_mobile = customer_data.secondary_mobile.clone();
    let map_location = customer_data.map_location.clone();
    let (validated_name, validated_mobile, validated_address) = customer_data
        .validate()
        .map_err(CustomerError::ValidationError)?;

    let changeset = CustomerChangeset {
        name: validated_name.as_ref().to_string(),
        primary_mobile: validated_mobile.as_ref().to_string(),
        secondary_mobile,
        address: validated_address.as_ref().to_string(),
        map_location,
        updated_at: Utc::now().naive_utc(),
    };
    let updated = customer_db::update(&pool, id.into_inner(), changeset)
        .await?
        .ok_or_else(|| CustomerError::NotFound("Customer not found".to_string()))?;
    Ok(HttpResponse::Ok().json(updated))
}

/******************************************/
// Deleting Customer Route
/******************************************/
/**
 * @route   DELETE /api/customers/:id
 */
#[instrument(name = "Delete customer", skip(pool))]
pub async fn delete_customer(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, CustomerError> {
    let deleted = customer_db::delete(&pool, id.into_inner())
        .await?
        .ok_or_else(|| CustomerError::NotFound("Customer not found".to_string()))?;
    Ok(HttpResponse::Ok().json(json!({"message": "Customer deleted", "deleted": deleted})))
}
