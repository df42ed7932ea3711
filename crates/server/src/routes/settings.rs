use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use common::types::Envelope;
use service::db::settings_service::{self, SettingUpsert};

use crate::auth::ServerState;
use crate::errors::JsonApiError;

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "settings",
    responses((status = 200, description = "all settings ordered by key"))
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Envelope<Vec<models::setting::Model>>>, JsonApiError> {
    let settings = settings_service::list_settings(&state.db).await?;
    Ok(Json(Envelope { data: settings }))
}

#[utoipa::path(
    get,
    path = "/api/settings/{key}",
    tag = "settings",
    responses(
        (status = 200, description = "setting"),
        (status = 404, description = "key has no stored value")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(key): Path<String>,
) -> Result<Json<Envelope<models::setting::Model>>, JsonApiError> {
    let setting = settings_service::get_setting(&state.db, &key)
        .await?
        .ok_or_else(|| JsonApiError::not_found("setting not found"))?;
    Ok(Json(Envelope { data: setting }))
}

/// Upsert a known setting. Unknown keys and malformed values are
/// rejected before anything is written.
#[utoipa::path(
    put,
    path = "/api/settings/{key}",
    tag = "settings",
    responses(
        (status = 200, description = "stored"),
        (status = 400, description = "unknown key or malformed value")
    )
)]
pub async fn upsert(
    State(state): State<ServerState>,
    Path(key): Path<String>,
    Json(input): Json<SettingUpsert>,
) -> Result<Json<Envelope<models::setting::Model>>, JsonApiError> {
    let setting = settings_service::upsert_setting(&state.db, &key, input).await?;
    info!(key = %setting.key, "stored setting");
    Ok(Json(Envelope { data: setting }))
}
