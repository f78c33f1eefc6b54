use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(Uuid),

    #[error("New product is missing mandatory field(s) : [{}]", .0.join(","))]
    MissingMandatoryFields(Vec<&'static str>),

    /// Range violations, one message per field
    #[error("{}", .0.join("\n"))]
    ConstraintViolations(Vec<String>),

    #[error("Product with code {0} already exists")]
    DuplicateCode(String),

    #[error("Can't update code: it already belongs to another product")]
    CodeAlreadyTaken,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Internal(format!("Database error: {}", err))
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
            invalid => AppError::BadRequest(invalid.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
