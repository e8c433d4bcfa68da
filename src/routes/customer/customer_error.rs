use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Query Error: {0}")]
    QueryError(String),

    #[error("Database Connection Error: {0}")]
    DbConnectionError(String),
}

impl ResponseError for CustomerError {
    fn error_response(&self) -> HttpResponse {
        match self {
            CustomerError::ValidationError(_) => HttpResponse::BadRequest().body(self.to_string()),
            CustomerError::NotFound(_) => HttpResponse::NotFound().body(self.to_string()),
            CustomerError::QueryError(_) | CustomerError::DbConnectionError(_) => {
                // Fault detail goes to the log, never back to the caller
                tracing::error!("{}", self);
                HttpResponse::InternalServerError().body("Internal Server Error".to_string())
            }
        }
    }
}
