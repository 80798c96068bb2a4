//! HTTP error envelope and mapping from domain errors.
//!
//! Keeps the domain free of transport concerns: [`BoardError`] values are
//! translated into Actix responses here. Expected failures keep their
//! domain message; unexpected ones are masked behind a generic "unknown
//! error" and only the logs carry the detail.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{BoardError, ErrorCode};
use crate::middleware::trace::TraceId;

/// Result alias used by every HTTP handler.
pub type ApiResult<T> = Result<T, ApiError>;

/// Standard error envelope returned by the HTTP adapter.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable failure category, shared with the RPC adapter.
    #[schema(example = "no_such_ad")]
    pub code: ErrorCode,
    /// Human-readable description.
    #[schema(example = "no ad with id 7")]
    pub message: String,
    /// Trace identifier correlating the response with server logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Structured supplements, e.g. the offending field for validation
    /// failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    /// Build an envelope, capturing any ambient trace identifier.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Attach structured details to the envelope.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match &err {
            BoardError::Internal { message } => {
                error!(detail = %message, "masking internal failure");
                Self::new(ErrorCode::Unknown, "unknown error")
            }
            BoardError::InvalidAd { source, .. } => Self::new(err.code(), err.to_string())
                .with_details(json!({ "field": source.field() })),
            _ => Self::new(err.code(), err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::NoSuchUser | ErrorCode::NoSuchAd => StatusCode::NOT_FOUND,
            ErrorCode::InvalidAd => StatusCode::BAD_REQUEST,
            ErrorCode::PermissionDenied => StatusCode::FORBIDDEN,
            ErrorCode::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}
