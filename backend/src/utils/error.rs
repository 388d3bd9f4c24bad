use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_i18n::t;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::i18n::current_locale;

/// API Error with rich context and automatic error trait implementations
///
/// Each variant maps to a stable numeric code and an HTTP status; the
/// message shown to clients is localised in the locale of the request.
#[derive(Error, Debug)]
pub enum ApiError {
    // Resource errors 3xxx
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Page not found: {path}")]
    PageNotFound { path: String },

    // Validation errors 4xxx
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported locale: {0}")]
    InvalidLocale(String),

    // System errors 5xxx
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    // Generic wrapper for other errors - auto-convert from anyhow::Error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// Helper to create internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    /// Helper to create invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Helper to create unsupported locale error
    pub fn invalid_locale(code: impl Into<String>) -> Self {
        Self::InvalidLocale(code.into())
    }

    /// Helper to create validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Helper to create not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::ResourceNotFound(message.into())
    }

    /// Helper to create page not found error
    pub fn page_not_found(path: impl Into<String>) -> Self {
        Self::PageNotFound { path: path.into() }
    }

    pub fn error_code(&self) -> i32 {
        match self {
            // Resource errors 3xxx
            Self::ResourceNotFound(_) => 3000,
            Self::PageNotFound { .. } => 3001,

            // Validation errors 4xxx
            Self::ValidationError(_) => 4001,
            Self::InvalidInput(_) => 4002,
            Self::InvalidLocale(_) => 4003,

            // System errors 5xxx
            Self::InternalError(_) => 5001,
            Self::Other(_) => 5001,
            Self::Template(_) => 5002,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.error_code() {
            3000..=3999 => StatusCode::NOT_FOUND,
            4001..=4999 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get localized error message based on the current request locale
    pub fn localized_message(&self) -> String {
        let locale = current_locale().code();
        match self {
            Self::ResourceNotFound(name) => {
                t!("resource.not_found", locale = locale, name = name).to_string()
            },
            Self::PageNotFound { path } => {
                t!("resource.page_not_found", locale = locale, path = path).to_string()
            },
            Self::ValidationError(details) => {
                t!("validation.failed", locale = locale, details = details).to_string()
            },
            Self::InvalidInput(msg) => {
                t!("validation.invalid_input", locale = locale, details = msg).to_string()
            },
            Self::InvalidLocale(code) => {
                t!("locale.unsupported", locale = locale, code = code).to_string()
            },
            Self::InternalError(msg) => {
                t!("internal.error", locale = locale, message = msg).to_string()
            },
            Self::Template(err) => {
                t!("internal.error", locale = locale, message = err.to_string()).to_string()
            },
            Self::Other(err) => {
                t!("internal.error", locale = locale, message = err.to_string()).to_string()
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        let response = ApiErrorResponse {
            code: self.error_code(),
            message: self.localized_message(),
            details: None,
        };

        (status, Json(response)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::validation_error(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
