use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::headers::authorization::Basic;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::warn;

use common::types::Envelope;

use crate::errors::JsonApiError;

/// Single admin account guarding the management routes. Credentials come
/// from the environment; the defaults are for local development only.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn from_env() -> Self {
        let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
        Self { username, password }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub admin: AdminCredentials,
}

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginOutput {
    pub username: String,
    pub role: &'static str,
}

/// Credential check for the admin dashboard. Subsequent admin requests
/// re-send the credentials as HTTP Basic auth.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    responses(
        (status = 200, description = "credentials accepted"),
        (status = 401, description = "invalid credentials")
    )
)]
pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<Envelope<LoginOutput>>, JsonApiError> {
    if state.admin.matches(&input.username, &input.password) {
        Ok(Json(Envelope { data: LoginOutput { username: input.username, role: "admin" } }))
    } else {
        warn!(username = %input.username, "failed admin login");
        Err(JsonApiError::unauthorized("invalid credentials"))
    }
}

/// Route-layer guard for admin endpoints. A missing Authorization header
/// is rejected by the extractor with 400; bad credentials get 401.
pub async fn require_admin(
    State(state): State<ServerState>,
    TypedHeader(Authorization(creds)): TypedHeader<Authorization<Basic>>,
    request: Request,
    next: Next,
) -> Response {
    if state.admin.matches(creds.username(), creds.password()) {
        next.run(request).await
    } else {
        warn!(username = %creds.username(), "rejected admin request");
        JsonApiError::new(StatusCode::UNAUTHORIZED, "unauthorized", "invalid admin credentials")
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::AdminCredentials;

    #[test]
    fn credentials_match_exactly() {
        let admin = AdminCredentials { username: "admin".into(), password: "secret".into() };
        assert!(admin.matches("admin", "secret"));
        assert!(!admin.matches("admin", "Secret"));
        assert!(!admin.matches("root", "secret"));
    }
}
