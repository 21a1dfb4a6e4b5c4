use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::shared::validation::ValidationErrors;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Single-message error body: `{ "error": "..." }`
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// One failed validation rule
#[derive(Object, Debug)]
pub struct FieldErrorResponse {
    /// Offending field, e.g. `price` or `pageSize`
    pub field: String,
    /// Human readable message
    pub msg: String,
}

/// Error list body: `{ "errors": [{ "field", "msg" }] }`
#[derive(Object, Debug)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldErrorResponse>,
}

impl ValidationErrorResponse {
    /// A request body that could not be decoded at all
    pub fn malformed_body(err: &poem::Error) -> Self {
        Self {
            errors: vec![FieldErrorResponse {
                field: "body".to_string(),
                msg: err.to_string(),
            }],
        }
    }
}

impl From<ValidationErrors> for ValidationErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            errors: errors
                .into_iter()
                .map(|e| FieldErrorResponse {
                    field: e.field,
                    msg: e.message,
                })
                .collect(),
        }
    }
}

/// A domain failure in one of the two body shapes the API answers with.
pub enum ApiErrorResponse {
    /// 400 with every failed rule
    Validation(Json<ValidationErrorResponse>),
    /// Any other status with a single message
    Message(StatusCode, Json<ErrorResponse>),
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> ApiErrorResponse;
}
