//! Typed API error for HTTP handlers.
//!
//! Every failure leaves the server as `{"statusCode", "message", "timestamp",
//! "path"}`. Server faults are logged with their real cause and answered with
//! a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use weather_insights_core::ValidationError;
use weather_insights_service::ServiceError;

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiErrorKind {
    /// 400: invalid input from caller.
    BadRequest(String),
    /// 404: requested resource doesn't exist.
    NotFound(String),
    /// 500: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

/// Error returned by handlers, tagged with the request path it answers.
#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub timestamp: String,
    pub path: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, path: impl Into<String>) -> Self {
        Self { kind, path: path.into() }
    }

    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::BadRequest(message.into()), path)
    }

    pub fn from_service(err: ServiceError, path: impl Into<String>) -> Self {
        let kind = match err {
            ServiceError::InvalidInput(msg) => ApiErrorKind::BadRequest(msg),
            err if err.is_not_found() => ApiErrorKind::NotFound(err.to_string()),
            other => ApiErrorKind::Internal(other.into()),
        };
        Self::new(kind, path)
    }

    pub fn from_validation(err: &ValidationError, path: impl Into<String>) -> Self {
        Self::bad_request(err.to_string(), path)
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self.kind {
            ApiErrorKind::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
            ApiErrorKind::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self.kind {
            ApiErrorKind::BadRequest(msg) | ApiErrorKind::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), path = %self.path, "Client error: {msg}");
                msg
            },
            ApiErrorKind::Internal(err) => {
                tracing::error!(path = %self.path, error = ?err, "Unhandled exception: {err}");
                INTERNAL_MESSAGE.to_owned()
            },
        };
        let body = ErrorBody {
            status_code: status.as_u16(),
            message,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: self.path,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use weather_insights_cache::CacheError;

    use super::*;

    #[test]
    fn test_service_error_mapping() {
        let cases = [
            (ServiceError::InvalidInput("bad".to_owned()), StatusCode::BAD_REQUEST),
            (ServiceError::CityNotFound { city: "X".to_owned() }, StatusCode::NOT_FOUND),
            (
                ServiceError::NoHistory { city: "X".to_owned(), window_days: Some(7) },
                StatusCode::NOT_FOUND,
            ),
            (ServiceError::NotConfigured("key".to_owned()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ServiceError::InvalidProviderData("temp".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServiceError::Cache(CacheError::Unavailable("down".to_owned())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from_service(err, "/weather/x").status(), expected);
        }
    }

    #[test]
    fn test_not_found_keeps_service_message() {
        let err = ApiError::from_service(
            ServiceError::CityNotFound { city: "Atlantis".to_owned() },
            "/weather/Atlantis",
        );
        match err.kind {
            ApiErrorKind::NotFound(msg) => {
                assert_eq!(msg, "Weather data not found for city Atlantis");
            },
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
