use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::types::Envelope;
use service::db::review_service::{self, NewReview, ReviewPatch};

use crate::auth::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub approved: Option<bool>,
    pub featured: Option<bool>,
}

/// Public review form. Reviews await moderation before they appear on
/// the site.
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "reviews",
    responses(
        (status = 201, description = "review submitted for moderation"),
        (status = 400, description = "invalid input")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewReview>,
) -> Result<(StatusCode, Json<Envelope<models::review::Model>>), JsonApiError> {
    let review = review_service::create_review(&state.db, input).await?;
    info!(id = %review.id, rating = review.rating, "new review submitted");
    Ok((StatusCode::CREATED, Json(Envelope { data: review })))
}

#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "reviews",
    responses((status = 200, description = "reviews, newest first"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Envelope<Vec<models::review::Model>>>, JsonApiError> {
    let reviews = review_service::list_reviews(&state.db, q.approved, q.featured).await?;
    Ok(Json(Envelope { data: reviews }))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = "reviews",
    responses(
        (status = 200, description = "review"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<models::review::Model>>, JsonApiError> {
    let review = review_service::get_review(&state.db, id)
        .await?
        .ok_or_else(|| JsonApiError::not_found("review not found"))?;
    Ok(Json(Envelope { data: review }))
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = "reviews",
    responses(
        (status = 200, description = "updated"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ReviewPatch>,
) -> Result<Json<Envelope<models::review::Model>>, JsonApiError> {
    let review = review_service::update_review(&state.db, id, patch).await?;
    info!(id = %review.id, approved = review.approved, featured = review.featured, "moderated review");
    Ok(Json(Envelope { data: review }))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = "reviews",
    responses(
        (status = 204, description = "deleted"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    if review_service::delete_review(&state.db, id).await? {
        info!(%id, "deleted review");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("review not found"))
    }
}
