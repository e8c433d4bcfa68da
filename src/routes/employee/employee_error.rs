use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Query Error: {0}")]
    QueryError(String),

    #[error("Database Connection Error: {0}")]
    DbConnectionError(String),
}

impl ResponseError for EmployeeError {
    fn error_response(&self) -> HttpResponse {
        match self {
            EmployeeError::ValidationError(_) => HttpResponse::BadRequest().body(self.to_string()),
            EmployeeError::NotFound(_) => HttpResponse::NotFound().body(self.to_string()),
            EmployeeError::QueryError(_) | EmployeeError::DbConnectionError(_) => {
                tracing::error!("{}", self);
                HttpResponse::InternalServerError().body("Internal Server Error".to_string())
            }
        }
    }
}
