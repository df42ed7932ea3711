use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::auth::{self, ServerState};

pub mod blog;
pub mod bookings;
pub mod catalog;
pub mod faqs;
pub mod messages;
pub mod portfolio;
pub mod reviews;
pub mod settings;
pub mod stats;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "service is up"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public site routes, admin routes
/// behind HTTP Basic auth, and the OpenAPI UI.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Public routes: the website reads content and submits forms here.
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/portfolio", get(portfolio::list))
        .route("/api/portfolio/:id", get(portfolio::get_one))
        .route("/api/services", get(catalog::list))
        .route("/api/services/:id", get(catalog::get_one))
        .route("/api/blog", get(blog::list))
        .route("/api/blog/:id", get(blog::get_one))
        .route("/api/blog/:id/view", post(blog::record_view))
        .route("/api/blog/:id/like", post(blog::like))
        .route("/api/reviews", get(reviews::list))
        .route("/api/reviews/:id", get(reviews::get_one))
        .route("/api/faqs", get(faqs::list))
        .route("/api/faqs/:id", get(faqs::get_one))
        .route("/api/settings", get(settings::list))
        .route("/api/settings/:key", get(settings::get_one))
        .route("/api/bookings", post(bookings::create))
        .route("/api/messages", post(messages::create))
        .route("/api/reviews", post(reviews::create));

    // Admin routes: content management, inbox, moderation and stats.
    let admin = Router::new()
        .route("/api/portfolio", post(portfolio::create))
        .route("/api/portfolio/:id", put(portfolio::update).delete(portfolio::remove))
        .route("/api/services", post(catalog::create))
        .route("/api/services/:id", put(catalog::update).delete(catalog::remove))
        .route("/api/bookings", get(bookings::list))
        .route(
            "/api/bookings/:id",
            get(bookings::get_one).put(bookings::update).delete(bookings::remove),
        )
        .route("/api/messages", get(messages::list))
        .route(
            "/api/messages/:id",
            get(messages::get_one).put(messages::update).delete(messages::remove),
        )
        .route("/api/reviews/:id", put(reviews::update).delete(reviews::remove))
        .route("/api/blog", post(blog::create))
        .route("/api/blog/:id", put(blog::update).delete(blog::remove))
        .route("/api/faqs", post(faqs::create))
        .route("/api/faqs/:id", put(faqs::update).delete(faqs::remove))
        .route("/api/faqs/:id/move-up", post(faqs::move_up))
        .route("/api/faqs/:id/move-down", post(faqs::move_down))
        .route("/api/settings/:key", put(settings::upsert))
        .route("/api/stats", get(stats::get_stats))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_admin));

    let swagger =
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi());

    public
        .merge(admin)
        .merge(swagger)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
