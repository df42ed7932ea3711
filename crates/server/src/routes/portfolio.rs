use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::types::Envelope;
use service::db::portfolio_service::{self, NewPortfolioItem, PortfolioItemPatch};

use crate::auth::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses((status = 200, description = "portfolio items, newest first"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Envelope<Vec<models::portfolio_item::Model>>>, JsonApiError> {
    let items =
        portfolio_service::list_portfolio_items(&state.db, q.category.as_deref(), q.featured)
            .await?;
    Ok(Json(Envelope { data: items }))
}

#[utoipa::path(
    get,
    path = "/api/portfolio/{id}",
    tag = "portfolio",
    responses(
        (status = 200, description = "portfolio item"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<models::portfolio_item::Model>>, JsonApiError> {
    let item = portfolio_service::get_portfolio_item(&state.db, id)
        .await?
        .ok_or_else(|| JsonApiError::not_found("portfolio item not found"))?;
    Ok(Json(Envelope { data: item }))
}

#[utoipa::path(
    post,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 201, description = "created"),
        (status = 400, description = "invalid input")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewPortfolioItem>,
) -> Result<(StatusCode, Json<Envelope<models::portfolio_item::Model>>), JsonApiError> {
    let item = portfolio_service::create_portfolio_item(&state.db, input).await?;
    info!(id = %item.id, category = %item.category, "created portfolio item");
    Ok((StatusCode::CREATED, Json(Envelope { data: item })))
}

#[utoipa::path(
    put,
    path = "/api/portfolio/{id}",
    tag = "portfolio",
    responses(
        (status = 200, description = "updated"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<PortfolioItemPatch>,
) -> Result<Json<Envelope<models::portfolio_item::Model>>, JsonApiError> {
    let item = portfolio_service::update_portfolio_item(&state.db, id, patch).await?;
    Ok(Json(Envelope { data: item }))
}

#[utoipa::path(
    delete,
    path = "/api/portfolio/{id}",
    tag = "portfolio",
    responses(
        (status = 204, description = "deleted"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    if portfolio_service::delete_portfolio_item(&state.db, id).await? {
        info!(%id, "deleted portfolio item");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("portfolio item not found"))
    }
}
