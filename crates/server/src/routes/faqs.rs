use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::types::Envelope;
use service::db::faq_service::{self, FaqPatch, NewFaq};

use crate::auth::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/faqs",
    tag = "faqs",
    responses((status = 200, description = "FAQ entries in display order"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Envelope<Vec<models::faq::Model>>>, JsonApiError> {
    let faqs = faq_service::list_faqs(&state.db, q.active).await?;
    Ok(Json(Envelope { data: faqs }))
}

#[utoipa::path(
    get,
    path = "/api/faqs/{id}",
    tag = "faqs",
    responses(
        (status = 200, description = "FAQ entry"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<models::faq::Model>>, JsonApiError> {
    let faq = faq_service::get_faq(&state.db, id)
        .await?
        .ok_or_else(|| JsonApiError::not_found("faq not found"))?;
    Ok(Json(Envelope { data: faq }))
}

#[utoipa::path(
    post,
    path = "/api/faqs",
    tag = "faqs",
    responses(
        (status = 201, description = "created"),
        (status = 400, description = "invalid input")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewFaq>,
) -> Result<(StatusCode, Json<Envelope<models::faq::Model>>), JsonApiError> {
    let faq = faq_service::create_faq(&state.db, input).await?;
    info!(id = %faq.id, sort_order = faq.sort_order, "created faq");
    Ok((StatusCode::CREATED, Json(Envelope { data: faq })))
}

#[utoipa::path(
    put,
    path = "/api/faqs/{id}",
    tag = "faqs",
    responses(
        (status = 200, description = "updated"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<FaqPatch>,
) -> Result<Json<Envelope<models::faq::Model>>, JsonApiError> {
    let faq = faq_service::update_faq(&state.db, id, patch).await?;
    Ok(Json(Envelope { data: faq }))
}

#[utoipa::path(
    delete,
    path = "/api/faqs/{id}",
    tag = "faqs",
    responses(
        (status = 204, description = "deleted"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    if faq_service::delete_faq(&state.db, id).await? {
        info!(%id, "deleted faq");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("faq not found"))
    }
}

#[utoipa::path(
    post,
    path = "/api/faqs/{id}/move-up",
    tag = "faqs",
    responses(
        (status = 200, description = "moved towards the front"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn move_up(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<models::faq::Model>>, JsonApiError> {
    let faq = faq_service::move_faq_up(&state.db, id).await?;
    Ok(Json(Envelope { data: faq }))
}

#[utoipa::path(
    post,
    path = "/api/faqs/{id}/move-down",
    tag = "faqs",
    responses(
        (status = 200, description = "moved towards the back"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn move_down(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<models::faq::Model>>, JsonApiError> {
    let faq = faq_service::move_faq_down(&state.db, id).await?;
    Ok(Json(Envelope { data: faq }))
}
