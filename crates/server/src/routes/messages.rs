use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::types::Envelope;
use models::message::MessageStatus;
use service::db::message_service::{self, MessagePatch, NewMessage};

use crate::auth::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<MessageStatus>,
}

/// Public contact form. New messages always land in `unread`.
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    responses(
        (status = 201, description = "message received"),
        (status = 400, description = "invalid input")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewMessage>,
) -> Result<(StatusCode, Json<Envelope<models::message::Model>>), JsonApiError> {
    let message = message_service::create_message(&state.db, input).await?;
    info!(id = %message.id, subject = %message.subject, "new contact message");
    Ok((StatusCode::CREATED, Json(Envelope { data: message })))
}

#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "messages",
    responses((status = 200, description = "messages, newest first"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Envelope<Vec<models::message::Model>>>, JsonApiError> {
    let messages = message_service::list_messages(&state.db, q.status).await?;
    Ok(Json(Envelope { data: messages }))
}

#[utoipa::path(
    get,
    path = "/api/messages/{id}",
    tag = "messages",
    responses(
        (status = 200, description = "message"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<models::message::Model>>, JsonApiError> {
    let message = message_service::get_message(&state.db, id)
        .await?
        .ok_or_else(|| JsonApiError::not_found("message not found"))?;
    Ok(Json(Envelope { data: message }))
}

#[utoipa::path(
    put,
    path = "/api/messages/{id}",
    tag = "messages",
    responses(
        (status = 200, description = "updated"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<MessagePatch>,
) -> Result<Json<Envelope<models::message::Model>>, JsonApiError> {
    let message = message_service::update_message(&state.db, id, patch).await?;
    Ok(Json(Envelope { data: message }))
}

#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = "messages",
    responses(
        (status = 204, description = "deleted"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    if message_service::delete_message(&state.db, id).await? {
        info!(%id, "deleted message");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("message not found"))
    }
}
