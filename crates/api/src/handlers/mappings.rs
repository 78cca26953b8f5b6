use crate::{dto::MappingResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_mappings")]
pub async fn get_mappings(State(state): State<AppState>) -> Json<Vec<MappingResponse>> {
    let snapshot = state.get_mappings.execute();
    let mappings: Vec<MappingResponse> = snapshot
        .sorted_mappings()
        .into_iter()
        .map(MappingResponse::from)
        .collect();

    debug!(count = mappings.len(), "Mappings listed");
    Json(mappings)
}
