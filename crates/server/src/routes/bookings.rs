use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::types::Envelope;
use models::booking::BookingStatus;
use service::db::booking_service::{self, BookingPatch, NewBooking};

use crate::auth::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<BookingStatus>,
}

/// Public booking form. New bookings always land in `pending`.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "bookings",
    responses(
        (status = 201, description = "booking created in pending state"),
        (status = 400, description = "invalid input")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewBooking>,
) -> Result<(StatusCode, Json<Envelope<models::booking::Model>>), JsonApiError> {
    let booking = booking_service::create_booking(&state.db, input).await?;
    info!(id = %booking.id, event_type = %booking.event_type, "new booking request");
    Ok((StatusCode::CREATED, Json(Envelope { data: booking })))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "bookings",
    responses((status = 200, description = "bookings, newest first"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Envelope<Vec<models::booking::Model>>>, JsonApiError> {
    let bookings = booking_service::list_bookings(&state.db, q.status).await?;
    Ok(Json(Envelope { data: bookings }))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "bookings",
    responses(
        (status = 200, description = "booking"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<models::booking::Model>>, JsonApiError> {
    let booking = booking_service::get_booking(&state.db, id)
        .await?
        .ok_or_else(|| JsonApiError::not_found("booking not found"))?;
    Ok(Json(Envelope { data: booking }))
}

#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = "bookings",
    responses(
        (status = 200, description = "updated"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<BookingPatch>,
) -> Result<Json<Envelope<models::booking::Model>>, JsonApiError> {
    let booking = booking_service::update_booking(&state.db, id, patch).await?;
    info!(id = %booking.id, status = ?booking.status, "updated booking");
    Ok(Json(Envelope { data: booking }))
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "bookings",
    responses(
        (status = 204, description = "deleted"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    if booking_service::delete_booking(&state.db, id).await? {
        info!(%id, "deleted booking");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("booking not found"))
    }
}
