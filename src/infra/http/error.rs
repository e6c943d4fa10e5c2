use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::cafes::CafeError;
use crate::application::error::ErrorReport;

/// Body for 400-class failures, keyed exactly as legacy clients expect:
/// `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Body for unknown-id failures. The capitalized, spaced key is part of
/// the wire contract.
#[derive(Debug, Serialize)]
pub struct NotFoundBody {
    #[serde(rename = "Not Found")]
    pub not_found: String,
}

pub const CAFE_NOT_FOUND_MESSAGE: &str =
    "Sorry a cafe with that id was not found in the database.";

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    /// 400 with the `{"error": ...}` body.
    Validation { message: String },
    /// 404 with the `{"Not Found": ...}` body.
    NotFound,
    /// 500 with a generic body; the detail only reaches the log report.
    Internal { detail: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (mut response, detail) = match self {
            ApiError::Validation { message } => {
                let body = ApiErrorBody {
                    error: message.clone(),
                };
                ((status, Json(body)).into_response(), message)
            }
            ApiError::NotFound => {
                let body = NotFoundBody {
                    not_found: CAFE_NOT_FOUND_MESSAGE.to_string(),
                };
                (
                    (status, Json(body)).into_response(),
                    CAFE_NOT_FOUND_MESSAGE.to_string(),
                )
            }
            ApiError::Internal { detail } => {
                let body = ApiErrorBody {
                    error: INTERNAL_ERROR_MESSAGE.to_string(),
                };
                ((status, Json(body)).into_response(), detail)
            }
        };
        // Attach a structured report so shared logging middleware can emit rich diagnostics.
        ErrorReport::from_message("infra::http::api", status, detail).attach(&mut response);
        response
    }
}

pub fn cafe_error_to_api(err: CafeError) -> ApiError {
    match err {
        CafeError::DuplicateName { name } => {
            ApiError::validation(format!("A cafe named \"{name}\" already exists."))
        }
        CafeError::NotFound { .. } => ApiError::NotFound,
        CafeError::Repo(err) => ApiError::internal(err.to_string()),
    }
}
