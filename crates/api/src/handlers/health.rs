use crate::{dto::HealthResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::instrument;

#[instrument(skip(state), name = "api_health_check")]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        mappings: state.get_mappings.execute().len(),
    })
}
