use crate::{
    dto::{DnsAnswer, DnsJsonResponse, DnsQueryParams, DnsQuestion},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, instrument, warn};

/// Only A queries are answered. Anything else gets an empty NOERROR so the
/// caller moves on to its next resolver.
const SUPPORTED_QUERY_TYPE: &str = "1";

#[instrument(skip(state), name = "api_dns_query")]
pub async fn dns_query(
    State(state): State<AppState>,
    Query(params): Query<DnsQueryParams>,
) -> (StatusCode, Json<DnsJsonResponse>) {
    let query_type = params.query_type().to_string();
    let name = params.name.unwrap_or_default();

    if query_type != SUPPORTED_QUERY_TYPE {
        let Ok(record_type) = query_type.parse::<u16>() else {
            warn!(query_type = %query_type, "Non-numeric query type");
            return bad_request(name);
        };
        debug!(record_type, name = %name, "Unsupported query type, empty answer");
        let question = DnsQuestion { name, record_type };
        return (
            StatusCode::OK,
            Json(DnsJsonResponse::no_error(question, Vec::new())),
        );
    }

    if name.is_empty() {
        warn!("Lookup without a name");
        return bad_request(name);
    }

    let answer = match state.lookup_host.execute(&name) {
        Some(ip) => vec![DnsAnswer::a_record(&name, ip)],
        None => Vec::new(),
    };
    debug!(name = %name, answers = answer.len(), "Lookup served");

    let question = DnsQuestion {
        name,
        record_type: 1,
    };
    (
        StatusCode::OK,
        Json(DnsJsonResponse::no_error(question, answer)),
    )
}

fn bad_request(name: String) -> (StatusCode, Json<DnsJsonResponse>) {
    let question = DnsQuestion {
        name,
        record_type: 0,
    };
    (
        StatusCode::BAD_REQUEST,
        Json(DnsJsonResponse::server_failure(question)),
    )
}
