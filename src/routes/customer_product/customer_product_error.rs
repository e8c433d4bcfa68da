use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomerProductError {
    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Query Error: {0}")]
    QueryError(String),

    #[error("Database Connection Error: {0}")]
    DbConnectionError(String),
}

impl ResponseError for CustomerProductError {
    fn error_response(&self) -> HttpResponse {
        match self {
            CustomerProductError::ValidationError(_) => {
                HttpResponse::BadRequest().body(self.to_string())
            }
            CustomerProductError::NotFound(_) => HttpResponse::NotFound().body(self.to_string()),
            CustomerProductError::QueryError(_) | CustomerProductError::DbConnectionError(_) => {
                tracing::error!("{}", self);
                HttpResponse::InternalServerError().body("Internal Server Error".to_string())
            }
        }
    }
}
