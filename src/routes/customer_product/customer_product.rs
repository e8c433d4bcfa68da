use super::customer_product_db;
use super::customer_product_error::CustomerProductError;
use crate::db::PgPool;
use crate::db_models::{CustomerProduct, CustomerProductChangeset};
use crate::validations::fields::RequiredText;
use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateCustomerProductBody {
    customer_id: Uuid,
    product_id: Option<Uuid>,
    serial_number: String,
    installation_date: Option<NaiveDate>,
    last_service_date: Option<NaiveDate>,
    next_service_date: Option<NaiveDate>,
    remarks: Option<String>,
}
impl CreateCustomerProductBody {
    pub fn validate(self) -> Result<RequiredText, String> {
        RequiredText::parse(self.serial_number, "serial_number")
    }
}

#[derive(Deserialize)]
pub struct UpdateCustomerProductBody {
    product_id: Option<Uuid>,
    serial_number: String,
    installation_date: Option<NaiveDate>,
    last_service_date: Option<NaiveDate>,
    next_service_date: Option<NaiveDate>,
    remarks: Option<String>,
}
impl UpdateCustomerProductBody {
    pub fn validate(self) -> Result<RequiredText, String> {
        RequiredText::parse(self.serial_number, "serial_number")
    }
}

/******************************************/
// Listing all Ownership Records Route
/******************************************/
/**
 * @route   GET /api/customer-products
 */
#[instrument(name = "List all customer products", skip(pool))]
pub async fn list_customer_products(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, CustomerProductError> {
    let records = customer_product_db::list_all(&pool).await?;
    Ok(HttpResponse::Ok().json(records))
}

/******************************************/
// Listing Ownership Records of a Customer
/******************************************/
/**
 * @route   GET /api/customer-products/:customer_id
 */
#[instrument(name = "List customer products by customer", skip(pool))]
pub async fn list_by_customer(
    pool: web::Data<PgPool>,
    customer_id: web::Path<Uuid>,
) -> Result<HttpResponse, CustomerProductError> {
    let records = customer_product_db::list_by_customer(&pool, customer_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/******************************************/
// Adding Ownership Record Route
/******************************************/
/**
 * @route   POST /api/customer-products
 */
#[instrument(name = "Add customer product", skip(req_record, pool), fields(serial_number = %req_record.serial_number))]
pub async fn create_customer_product(
    pool: web::Data<PgPool>,
    req_record: web::Json<CreateCustomerProductBody>,
) -> Result<HttpResponse, CustomerProductError> {
    let record_data = req_record.into_inner();
    let customer_id = record_data.customer_id;
    let product_id = record_data.product_id;
    let installation_date = record_data.installation_date;
    let last_service_date = record_data.last_service_date;
    let next_service_date = record_data.next_service_date;
    let remarks = record_data.remarks.clone();
    let validated_serial = record_data
        .validate()
        .map_err(CustomerProductError::ValidationError)?;

    let now = Utc::now().naive_utc();
    let record = CustomerProduct {
        ownership_id: Uuid::new_v4(),
        customer_id,
        product_id,
        serial_number: validated_serial.as_ref().to_string(),
        installation_date,
        last_service_date,
        next_service_date,
        remarks,
        created_at: now,
        updated_at: now,
    };
    customer_product_db::insert(&pool, &record).await?;
    Ok(HttpResponse::Created().json(json!({"message": "Customer product added successfully"})))
}

/******************************************/
// Updating Ownership Record Route
/******************************************/
/**
 * @route   PUT /api/customer-products/:id
 */
#[instrument(name = "Update customer product", skip(req_record, pool), fields(serial_number = %req_record.serial_number))]
pub async fn update_customer_product(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
    req_record: web::Json<UpdateCustomerProductBody>,
) -> Result<HttpResponse, CustomerProductError> {
    let record_data = req_record.into_inner();
    let product_id = record_data.product_id;
    let installation_date = record_data.installation_date;
    let last_service_date = record_data.last_service_date;
    let next_service_date = record_data.next_service_date;
    let remarks = record_data.remarks.clone();
    let validated_serial = record_data
        .validate()
        .map_err(CustomerProductError::ValidationError)?;

    let changeset = CustomerProductChangeset {
        product_id,
        serial_number: validated_serial.as_ref().to_string(),
        installation_date,
        last_service_date,
        next_service_date,
        remarks,
        updated_at: Utc::now().naive_utc(),
    };
    let updated = customer_product_db::update(&pool, id.into_inner(), changeset).await?;
    if !updated {
        return Err(CustomerProductError::NotFound(
            "Customer product not found".to_string(),
        ));
    }
    Ok(HttpResponse::Ok().json(json!({"message": "Customer product updated successfully"})))
}

/******************************************/
// Deleting Ownership Record Route
/******************************************/
/**
 * @route   DELETE /api/customer-products/:id
 */
#[instrument(name = "Delete customer product", skip(pool))]
pub async fn delete_customer_product(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, CustomerProductError> {
    let deleted = customer_product_db::delete(&pool, id.into_inner()).await?;
    if !deleted {
        return Err(CustomerProductError::NotFound(
            "Customer product not found".to_string(),
        ));
    }
    Ok(HttpResponse::Ok().json(json!({"message": "Customer product deleted successfully"})))
}

/******************************************/
// Service Rollover Route
/******************************************/
/**
 * @route   POST /api/customer-products/mark-serviced/:id
 */
#[instrument(name = "Mark customer product as serviced", skip(pool))]
pub async fn mark_as_serviced(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, CustomerProductError> {
    let updated = customer_product_db::mark_as_serviced(&pool, id.into_inner()).await?;
    if !updated {
        return Err(CustomerProductError::NotFound(
            "Customer product not found".to_string(),
        ));
    }
    Ok(HttpResponse::Ok().json(json!({"message": "Product marked as serviced"})))
}
