use crate::messages::{self, Locale};
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

/// Uniform JSON envelope returned by every mutating operation and by every
/// failure path. `errors` carries business-rule failures, `fieldErrors`
/// carries required-field and format failures; absent lists are omitted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[schema(example = 200)]
    pub status: u16,
    #[schema(example = "Employee saved successfully")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<String>>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
            errors: None,
            field_errors: None,
        }
    }
}

/// Domain failure taxonomy. Note the unusual contract carried over from the
/// API this service implements: a not-found condition renders as HTTP 200
/// with a message envelope, not as 404.
#[derive(Debug, Display)]
pub enum ApiError {
    /// Entity absent. Rendered as 200 with a localized message.
    #[display(fmt = "{}", _0)]
    NotFound(String),

    /// One or more field/business-rule violations. Rendered as 400 with
    /// the full itemized list.
    #[display(fmt = "{}", message)]
    Validation {
        message: String,
        errors: Vec<String>,
        field_errors: Vec<String>,
    },

    /// Unclassified failure. Rendered as 500 with a generic localized
    /// message; the underlying cause is logged, never surfaced.
    #[display(fmt = "{}", _0)]
    Internal(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        error!(error = %e, "Database error");
        ApiError::Internal(messages::get("error_internal", Locale::default()))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::OK,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            ApiError::NotFound(message) => ApiResponse::ok(message.clone()),
            ApiError::Validation {
                message,
                errors,
                field_errors,
            } => ApiResponse {
                status: status.as_u16(),
                message: message.clone(),
                errors: if errors.is_empty() {
                    None
                } else {
                    Some(errors.clone())
                },
                field_errors: if field_errors.is_empty() {
                    None
                } else {
                    Some(field_errors.clone())
                },
            },
            ApiError::Internal(message) => ApiResponse {
                status: status.as_u16(),
                message: message.clone(),
                errors: None,
                field_errors: None,
            },
        };
        HttpResponse::build(status).json(body)
    }
}

/// Maps unreadable/malformed JSON bodies into the same 400 envelope the
/// validator produces, instead of actix's plain-text default.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let locale = Locale::from_header(
        req.headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
    );
    warn!(error = %err, "Rejecting unreadable request body");
    ApiError::Validation {
        message: messages::get("error_invalid_request_body", locale),
        errors: Vec::new(),
        field_errors: Vec::new(),
    }
    .into()
}
