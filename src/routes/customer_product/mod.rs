pub mod customer_product;
pub mod customer_product_db;
pub mod customer_product_error;
