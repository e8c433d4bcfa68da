use super::inventory_db;
use super::inventory_error::InventoryError;
use crate::db::PgPool;
use crate::db_models::{InventoryItem, InventoryItemChangeset, ProductMake, ProductType};
use crate::validations::fields::RequiredText;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct InventoryBody {
    product_name: String,
    quantity: i32,
    purchase_price: f64,
    sale_price: f64,
    description: Option<String>,
    updated_by: Option<String>,
    product_type: ProductType,
    product_make: ProductMake,
}
impl InventoryBody {
    pub fn validate(self) -> Result<RequiredText, String> {
        RequiredText::parse(self.product_name, "product_name")
    }
}

/******************************************/
// Listing all Inventory Items Route
/******************************************/
/**
 * @route   GET /api/inventory
 */
#[instrument(name = "List all inventory items", skip(pool))]
pub async fn list_inventory(pool: web::Data<PgPool>) -> Result<HttpResponse, InventoryError> {
    let records = inventory_db::list_all(&pool).await?;
    Ok(HttpResponse::Ok().json(records))
}

/******************************************/
// Adding Inventory Item Route
/******************************************/
/**
 * @route   POST /api/inventory
 */
#[instrument(name = "Add inventory item", skip(req_item, pool), fields(product_name = %req_item.product_name))]
pub async fn create_inventory_item(
    pool: web::Data<PgPool>,
    req_item: web::Json<InventoryBody>,
) -> Result<HttpResponse, InventoryError> {
    let item_data = req_item.into_inner();
    let quantity = item_data.quantity;
    let purchase_price = item_data.purchase_price;
    let sale_price = item_data.sale_price;
    let description = item_data.description.clone();
    let updated_by = item_data.updated_by.clone();
    let product_type = item_data.product_type.clone();
    let product_make = item_data.product_make.clone();
    let validated_name = item_data
        .validate()
        .map_err(InventoryError::ValidationError)?;

    let now = Utc::now().naive_utc();
    let record = InventoryItem {
        product_id: Uuid::new_v4(),
        product_name: validated_name.as_ref().to_string(),
        quantity,
        purchase_price,
        sale_price,
        description,
        updated_by,
        product_type,
        product_make,
        created_at: now,
        updated_at: now,
    };
    inventory_db::insert(&pool, &record).await?;
    Ok(HttpResponse::Created().json(json!({"message": "Item added successfully"})))
}

/******************************************/
// Updating Inventory Item Route
/******************************************/
/**
 * @route   PUT /api/inventory/:id
 */
#[instrument(name = "Update inventory item", skip(req_item, pool), fields(product_name = %req_item.product_name))]
pub async fn update_inventory_item(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
    req_item: web::Json<InventoryBody>,
) -> Result<HttpResponse, InventoryError> {
    let item_data = req_item.into_inner();
    let quantity = item_data.quantity;
    let purchase_price = item_data.purchase_price;
    let sale_price = item_data.sale_price;
    let description = item_data.description.clone();
    let updated_by = item_data.updated_by.clone();
    let product_type = item_data.product_type.clone();
    let product_make = item_data.product_make.clone();
    let validated_name = item_data
        .validate()
        .map_err(InventoryError::ValidationError)?;

    let changeset = InventoryItemChangeset {
        product_name: validated_name.as_ref().to_string(),
        quantity,
        purchase_price,
        sale_price,
        description,
        updated_by,
        product_type,
        product_make,
        updated_at: Utc::now().naive_utc(),
    };
    let updated = inventory_db::update(&pool, id.into_inner(), changeset).await?;
    if !updated {
        return Err(InventoryError::NotFound("Item not found".to_string()));
    }
    Ok(HttpResponse::Ok().json(json!({"message": "Item updated successfully"})))
}

/******************************************/
// Deleting Inventory Item Route
/******************************************/
/**
 * @route   DELETE /api/inventory/:id
 */
#[instrument(name = "Delete inventory item", skip(pool))]
pub async fn delete_inventory_item(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, InventoryError> {
    let deleted = inventory_db::delete(&pool, id.into_inner()).await?;
    if !deleted {
        return Err(InventoryError::NotFound("Item not found".to_string()));
    }
    Ok(HttpResponse::Ok().json(json!({"message": "Item deleted successfully"})))
}
