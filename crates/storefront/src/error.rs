//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-class errors to
//! Sentry before responding to the client. Route handlers that can fail
//! return `Result<T, AppError>`.
//!
//! Precondition violations (an out-of-domain locale id, category, color, or
//! sort key) become `BadRequest` and propagate loudly; they are never
//! silently replaced with a default. Label lookup misses and empty filter
//! results are handled locally by the locale and catalog layers and never
//! reach this type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::view::SelectionParseError;
use crate::locale::LocaleParseError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A caller supplied a value outside a statically known set.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SelectionParseError> for AppError {
    fn from(err: SelectionParseError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<LocaleParseError> for AppError {
    fn from(err: LocaleParseError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            Self::BadRequest(_) => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("unknown sort key: price-descending".to_string());
        assert_eq!(
            err.to_string(),
            "Bad request: unknown sort key: price-descending"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_parse_errors_map_to_bad_request() {
        let err: AppError = SelectionParseError::SortKey("bogus".to_string()).into();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err: AppError = LocaleParseError("fr-FR".to_string()).into();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
