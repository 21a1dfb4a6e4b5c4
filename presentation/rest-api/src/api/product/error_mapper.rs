use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ApiErrorResponse, ErrorResponse, INTERNAL_ERROR_MESSAGE, IntoErrorResponse};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> ApiErrorResponse {
        let (status, message) = match self {
            ProductError::Validation(errors) => {
                return ApiErrorResponse::Validation(Json(errors.into()));
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND),
            // Store details stay in the logs
            ProductError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        ApiErrorResponse::Message(status, Json(ErrorResponse::new(message)))
    }
}
