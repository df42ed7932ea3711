use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// HTTP-facing error. Every failing request gets its own instance, so
/// concurrent handlers never observe each other's failures.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: impl Into<String>) -> Self {
        Self { status, title, detail: detail.into() }
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized", detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not found", detail)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": { "title": self.title, "detail": self.detail }
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "validation failed", msg)
            }
            ServiceError::Model(err) => {
                Self::new(StatusCode::BAD_REQUEST, "validation failed", err.to_string())
            }
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Db(msg) => {
                error!(error = %msg, "database error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error", "database error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_expected_statuses() {
        let e: JsonApiError = ServiceError::Validation("bad".into()).into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);

        let e: JsonApiError = ServiceError::not_found("booking").into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);

        let e: JsonApiError = ServiceError::Db("boom".into()).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        // internal detail is not leaked to the client
        assert_eq!(e.detail, "database error");
    }
}
