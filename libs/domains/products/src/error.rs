use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

pub const CREATE_VALIDATION_MESSAGE: &str = "Name, Type, and Price must be valid";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    /// Malformed list parameters ("Invalid page number", ...)
    #[error("Invalid input: {0}")]
    InvalidQuery(String),

    #[error("Invalid product: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Image upload failed: {0}")]
    Upload(String),

    #[error("Invalid image format: {0}")]
    InvalidImage(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Unable to save image: {0}")]
    Storage(#[from] std::io::Error),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::InvalidQuery(msg) => AppError::BadRequest(msg),
            ProductError::Validation(errors) => {
                AppError::validation(CREATE_VALIDATION_MESSAGE, errors)
            }
            ProductError::Upload(reason) => {
                tracing::info!("Rejected upload: {}", reason);
                AppError::BadRequest("Image upload failed".to_string())
            }
            ProductError::InvalidImage(filename) => {
                tracing::info!(filename = %filename, "Rejected image extension");
                AppError::BadRequest("Invalid image format".to_string())
            }
            ProductError::Database(e) => AppError::Database(e),
            ProductError::Storage(e) => {
                tracing::error!("Unable to save image: {:?}", e);
                AppError::InternalServerError("Unable to save image".to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: ProductError) -> StatusCode {
        AppError::from(err).status()
    }

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(
            status_of(ProductError::InvalidQuery("Invalid page number".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ProductError::Validation(ValidationErrors::new())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ProductError::InvalidImage("virus.exe".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ProductError::Upload("missing file".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(status_of(ProductError::NotFound(7)), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_failures_map_to_500() {
        let io = std::io::Error::other("disk full");
        assert_eq!(status_of(ProductError::Storage(io)), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            status_of(ProductError::Database(DbErr::Custom("boom".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
