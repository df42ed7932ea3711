use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::pagination::Pagination;
use common::types::Envelope;
use service::db::blog_service::{self, BlogPostPatch, NewBlogPost};

use crate::auth::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub published: Option<bool>,
    pub category: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    fn pagination(&self) -> Option<Pagination> {
        if self.page.is_none() && self.per_page.is_none() {
            return None;
        }
        let default = Pagination::default();
        Some(Pagination {
            page: self.page.unwrap_or(default.page),
            per_page: self.per_page.unwrap_or(default.per_page),
        })
    }
}

#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    responses((status = 200, description = "blog posts, newest first"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Envelope<Vec<models::blog_post::Model>>>, JsonApiError> {
    let page = q.pagination();
    let posts =
        blog_service::list_blog_posts(&state.db, q.published, q.category.as_deref(), page).await?;
    Ok(Json(Envelope { data: posts }))
}

#[utoipa::path(
    get,
    path = "/api/blog/{id}",
    tag = "blog",
    responses(
        (status = 200, description = "blog post"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<models::blog_post::Model>>, JsonApiError> {
    let post = blog_service::get_blog_post(&state.db, id)
        .await?
        .ok_or_else(|| JsonApiError::not_found("blog post not found"))?;
    Ok(Json(Envelope { data: post }))
}

#[utoipa::path(
    post,
    path = "/api/blog",
    tag = "blog",
    responses(
        (status = 201, description = "created"),
        (status = 400, description = "invalid input")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewBlogPost>,
) -> Result<(StatusCode, Json<Envelope<models::blog_post::Model>>), JsonApiError> {
    let post = blog_service::create_blog_post(&state.db, input).await?;
    info!(id = %post.id, title = %post.title, published = post.published, "created blog post");
    Ok((StatusCode::CREATED, Json(Envelope { data: post })))
}

#[utoipa::path(
    put,
    path = "/api/blog/{id}",
    tag = "blog",
    responses(
        (status = 200, description = "updated"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<BlogPostPatch>,
) -> Result<Json<Envelope<models::blog_post::Model>>, JsonApiError> {
    let post = blog_service::update_blog_post(&state.db, id, patch).await?;
    Ok(Json(Envelope { data: post }))
}

#[utoipa::path(
    delete,
    path = "/api/blog/{id}",
    tag = "blog",
    responses(
        (status = 204, description = "deleted"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    if blog_service::delete_blog_post(&state.db, id).await? {
        info!(%id, "deleted blog post");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("blog post not found"))
    }
}

/// Public view counter, fired by the site when a post is opened.
#[utoipa::path(
    post,
    path = "/api/blog/{id}/view",
    tag = "blog",
    responses(
        (status = 200, description = "view recorded"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn record_view(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<models::blog_post::Model>>, JsonApiError> {
    let post = blog_service::record_view(&state.db, id).await?;
    Ok(Json(Envelope { data: post }))
}

#[utoipa::path(
    post,
    path = "/api/blog/{id}/like",
    tag = "blog",
    responses(
        (status = 200, description = "like recorded"),
        (status = 404, description = "unknown id")
    )
)]
pub async fn like(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<models::blog_post::Model>>, JsonApiError> {
    let post = blog_service::like_blog_post(&state.db, id).await?;
    Ok(Json(Envelope { data: post }))
}
