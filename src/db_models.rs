use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::{customer_products, customers, employees, inventory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, diesel_derive_enum::DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::ProductType"]
#[DbValueStyle = "PascalCase"]
pub enum ProductType {
    Machine,
    Spare,
    Others,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, diesel_derive_enum::DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::ProductMake"]
#[DbValueStyle = "PascalCase"]
pub enum ProductMake {
    Kent,
    #[db_rename = "Aqua Squard"]
    #[serde(rename = "Aqua Squard")]
    AquaSquard,
    Aquafina,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, diesel_derive_enum::DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::IdProofType"]
#[DbValueStyle = "PascalCase"]
pub enum IdProofType {
    Aadhaar,
    #[db_rename = "PAN"]
    #[serde(rename = "PAN")]
    Pan,
    #[db_rename = "Driving License"]
    #[serde(rename = "Driving License")]
    DrivingLicense,
    #[db_rename = "Voter ID"]
    #[serde(rename = "Voter ID")]
    VoterId,
}

#[derive(Debug, Clone, Serialize, Queryable, Selectable, Insertable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Customer {
    pub customer_id: Uuid,
    pub name: String,
    pub primary_mobile: String,
    pub secondary_mobile: Option<String>,
    pub address: String,
    pub map_location: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Full-overwrite update: omitted optional fields become NULL
#[derive(Debug, AsChangeset)]
#[diesel(table_name = customers)]
#[diesel(treat_none_as_null = true)]
pub struct CustomerChangeset {
    pub name: String,
    pub primary_mobile: String,
    pub secondary_mobile: Option<String>,
    pub address: String,
    pub map_location: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Queryable, Selectable, Insertable)]
#[diesel(table_name = inventory)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InventoryItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub description: Option<String>,
    pub updated_by: Option<String>,
    pub product_type: ProductType,
    pub product_make: ProductMake,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = inventory)]
#[diesel(treat_none_as_null = true)]
pub struct InventoryItemChangeset {
    pub product_name: String,
    pub quantity: i32,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub description: Option<String>,
    pub updated_by: Option<String>,
    pub product_type: ProductType,
    pub product_make: ProductMake,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Queryable, Selectable, Insertable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Employee {
    pub employee_id: Uuid,
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub id_proof_type: IdProofType,
    pub id_proof_number: String,
    pub branch_name: Option<String>,
    pub designation: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub updated_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = employees)]
#[diesel(treat_none_as_null = true)]
pub struct EmployeeChangeset {
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub id_proof_type: IdProofType,
    pub id_proof_number: String,
    pub branch_name: Option<String>,
    pub designation: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub updated_by: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Queryable, Selectable, Insertable)]
#[diesel(table_name = customer_products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerProduct {
    pub ownership_id: Uuid,
    pub customer_id: Uuid,
    pub product_id: Option<Uuid>,
    pub serial_number: String,
    pub installation_date: Option<NaiveDate>,
    pub last_service_date: Option<NaiveDate>,
    pub next_service_date: Option<NaiveDate>,
    pub remarks: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// customer_id is fixed for the lifetime of an ownership record
#[derive(Debug, AsChangeset)]
#[diesel(table_name = customer_products)]
#[diesel(treat_none_as_null = true)]
pub struct CustomerProductChangeset {
    pub product_id: Option<Uuid>,
    pub serial_number: String,
    pub installation_date: Option<NaiveDate>,
    pub last_service_date: Option<NaiveDate>,
    pub next_service_date: Option<NaiveDate>,
    pub remarks: Option<String>,
    pub updated_at: NaiveDateTime,
}

/// Ownership row as listed by the API: the record plus the display-only
/// names pulled in by joining customers and inventory. `product_name` is
/// None when the referenced inventory item no longer exists.
#[derive(Debug, Clone, Serialize, Queryable)]
pub struct CustomerProductRow {
    pub ownership_id: Uuid,
    pub customer_id: Uuid,
    pub product_id: Option<Uuid>,
    pub serial_number: String,
    pub installation_date: Option<NaiveDate>,
    pub last_service_date: Option<NaiveDate>,
    pub next_service_date: Option<NaiveDate>,
    pub remarks: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub customer_name: String,
    pub product_name: Option<String>,
}
