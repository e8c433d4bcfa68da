use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Query Error: {0}")]
    QueryError(String),

    #[error("Database Connection Error: {0}")]
    DbConnectionError(String),
}

impl ResponseError for InventoryError {
    fn error_response(&self) -> HttpResponse {
        match self {
            InventoryError::ValidationError(_) => HttpResponse::BadRequest().body(self.to_string()),
            InventoryError::NotFound(_) => HttpResponse::NotFound().body(self.to_string()),
            InventoryError::QueryError(_) | InventoryError::DbConnectionError(_) => {
                tracing::error!("{}", self);
                HttpResponse::InternalServerError().body("Internal Server Error".to_string())
            }
        }
    }
}
