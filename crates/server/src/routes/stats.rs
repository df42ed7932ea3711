use axum::extract::State;
use axum::Json;

use common::types::Envelope;
use service::stats::{self, StudioStats};

use crate::auth::ServerState;
use crate::errors::JsonApiError;

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "stats",
    responses((status = 200, description = "dashboard aggregates"))
)]
pub async fn get_stats(
    State(state): State<ServerState>,
) -> Result<Json<Envelope<StudioStats>>, JsonApiError> {
    let stats = stats::collect(&state.db).await?;
    Ok(Json(Envelope { data: stats }))
}
