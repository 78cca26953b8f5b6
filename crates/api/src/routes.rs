use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dns_query))
        .route("/health", get(handlers::health_check))
        .route("/mappings", get(handlers::get_mappings))
        .with_state(state)
}
