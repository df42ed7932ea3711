use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::types::Envelope;
use service::db::catalog_service::{self, NewService, ServicePatch};

use crate::auth::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub active: Option<bool>,
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/services",
    tag = "services",
    responses((status = 200, description = "service packages, newest first"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Envelope<Vec<models::service::Model>>>, JsonApiError> {
    let services =
        catalog_service::list_services(&state.db, q.active, q.category.as_deref()).await?;
    Ok(Json(Envelope { data: services }))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "services",
    responses(
        (status = 200, description = "service package"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<models::service::Model>>, JsonApiError> {
    let svc = catalog_service::get_service(&state.db, id)
        .await?
        .ok_or_else(|| JsonApiError::not_found("service not found"))?;
    Ok(Json(Envelope { data: svc }))
}

#[utoipa::path(
    post,
    path = "/api/services",
    tag = "services",
    responses(
        (status = 201, description = "created"),
        (status = 400, description = "invalid input")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewService>,
) -> Result<(StatusCode, Json<Envelope<models::service::Model>>), JsonApiError> {
    let svc = catalog_service::create_service(&state.db, input).await?;
    info!(id = %svc.id, name = %svc.name, "created service");
    Ok((StatusCode::CREATED, Json(Envelope { data: svc })))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "services",
    responses(
        (status = 200, description = "updated"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ServicePatch>,
) -> Result<Json<Envelope<models::service::Model>>, JsonApiError> {
    let svc = catalog_service::update_service(&state.db, id, patch).await?;
    Ok(Json(Envelope { data: svc }))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "services",
    responses(
        (status = 204, description = "deleted"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    if catalog_service::delete_service(&state.db, id).await? {
        info!(%id, "deleted service");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("service not found"))
    }
}
