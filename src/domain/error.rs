use actix_web::{
    HttpResponse, ResponseError,
    error::JsonPayloadError,
    http::{StatusCode, header::ContentType},
};

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationError;

use crate::domain::remote::RemoteError;

pub type AppResult<T> = core::result::Result<T, AppError>;

/// Fixed message returned for every unexpected failure. The cause is logged
/// and deliberately not surfaced to the caller.
pub static UNEXPECTED: &str = "Something went wrong";

/// Application error, split by who refused the request. `Unexpected` carries
/// the underlying detail for logs only; its wire body never changes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Input refused locally, before any remote call was issued.
    #[error("{0}")]
    Validation(String),
    /// The remote service processed the request and rejected it.
    #[error("{0}")]
    Rejected(String),
    /// Transport failure, undecodable response, malformed request body.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

/// Wire shape of every error response: `{"error": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(examples("User already registered"))]
    pub error: String,
}

impl ErrorBody {
    pub fn example_400() -> ErrorBody {
        ErrorBody {
            error: "User already registered".to_string(),
        }
    }

    pub fn example_500() -> ErrorBody {
        ErrorBody {
            error: UNEXPECTED.to_string(),
        }
    }
}

impl AppError {
    fn public_message(&self) -> String {
        match self {
            AppError::Validation(message) | AppError::Rejected(message) => message.clone(),
            AppError::Unexpected(_) => UNEXPECTED.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected(_) => StatusCode::BAD_REQUEST,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Unexpected(detail) = self {
            tracing::error!(%detail, "request failed unexpectedly");
        }

        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(ErrorBody {
                error: self.public_message(),
            })
    }
}

impl From<RemoteError> for AppError {
    fn from(error: RemoteError) -> Self {
        match error {
            RemoteError::Rejected(message) => AppError::Rejected(message),
            RemoteError::Transport(detail) => AppError::Unexpected(detail),
        }
    }
}

// A body that fails to deserialize counts as unexpected: the cause stays in
// the logs and the caller sees the fixed 500 message.
impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        AppError::Unexpected(error.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error.to_string())
    }
}
