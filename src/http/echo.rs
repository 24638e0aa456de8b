//! Echo handler standing in for business logic.
//!
//! Reports what a downstream service would see after the inbound phase.

use axum::{
    extract::{Request, State},
    Json,
};
use serde::Serialize;

use crate::gateway::HeaderAccess;
use crate::http::server::AppState;
use crate::trace::{tracestate, StoredTrace};

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub method: String,
    pub path: String,
    pub traceparent: Option<String>,
    pub tracestate: Option<String>,
    pub legacy_correlation: Option<String>,
    /// Legacy ID recovered from `tracestate`, as a downstream hop would.
    pub tracestate_legacy_id: Option<String>,
    pub record: StoredTrace,
}

pub async fn echo_handler(State(state): State<AppState>, request: Request) -> Json<EchoResponse> {
    let names = &state.config.headers;
    let headers = request.headers();

    let tracestate = HeaderAccess::get(headers, &names.tracestate);
    let tracestate_legacy_id = tracestate
        .as_deref()
        .and_then(tracestate::legacy_id)
        .map(str::to_string);

    Json(EchoResponse {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        traceparent: HeaderAccess::get(headers, &names.traceparent),
        legacy_correlation: HeaderAccess::get(headers, &names.legacy_correlation),
        tracestate,
        tracestate_legacy_id,
        record: request
            .extensions()
            .get::<StoredTrace>()
            .cloned()
            .unwrap_or_default(),
    })
}
