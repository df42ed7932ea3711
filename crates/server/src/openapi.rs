use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct NewBookingDoc {
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub duration: String,
    pub price: Option<i64>,
    pub notes: Option<String>,
    pub service_id: Option<Uuid>,
}

#[derive(ToSchema)]
pub struct NewMessageDoc {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub body: String,
}

#[derive(ToSchema)]
pub struct NewReviewDoc {
    pub client_name: String,
    pub rating: i32,
    pub title: String,
    pub content: String,
    pub service_type: String,
    pub booking_id: Option<Uuid>,
}

#[derive(ToSchema)]
pub struct SettingUpsertDoc {
    pub value: serde_json::Value,
    pub description: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::auth::login,
        crate::routes::portfolio::list,
        crate::routes::portfolio::get_one,
        crate::routes::portfolio::create,
        crate::routes::portfolio::update,
        crate::routes::portfolio::remove,
        crate::routes::catalog::list,
        crate::routes::catalog::get_one,
        crate::routes::catalog::create,
        crate::routes::catalog::update,
        crate::routes::catalog::remove,
        crate::routes::bookings::create,
        crate::routes::bookings::list,
        crate::routes::bookings::get_one,
        crate::routes::bookings::update,
        crate::routes::bookings::remove,
        crate::routes::messages::create,
        crate::routes::messages::list,
        crate::routes::messages::get_one,
        crate::routes::messages::update,
        crate::routes::messages::remove,
        crate::routes::reviews::create,
        crate::routes::reviews::list,
        crate::routes::reviews::get_one,
        crate::routes::reviews::update,
        crate::routes::reviews::remove,
        crate::routes::blog::list,
        crate::routes::blog::get_one,
        crate::routes::blog::create,
        crate::routes::blog::update,
        crate::routes::blog::remove,
        crate::routes::blog::record_view,
        crate::routes::blog::like,
        crate::routes::faqs::list,
        crate::routes::faqs::get_one,
        crate::routes::faqs::create,
        crate::routes::faqs::update,
        crate::routes::faqs::remove,
        crate::routes::faqs::move_up,
        crate::routes::faqs::move_down,
        crate::routes::settings::list,
        crate::routes::settings::get_one,
        crate::routes::settings::upsert,
        crate::routes::stats::get_stats,
    ),
    components(
        schemas(
            HealthResponse,
            LoginRequest,
            NewBookingDoc,
            NewMessageDoc,
            NewReviewDoc,
            SettingUpsertDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "portfolio"),
        (name = "services"),
        (name = "bookings"),
        (name = "messages"),
        (name = "reviews"),
        (name = "blog"),
        (name = "faqs"),
        (name = "settings"),
        (name = "stats")
    )
)]
pub struct ApiDoc;
