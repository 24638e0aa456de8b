//! Trace context middleware.
//!
//! Hosts both processors around the business handler. Processor errors are
//! logged and counted here, and the request always continues.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::config::BridgeConfig;
use crate::gateway::{MemoryVariableStore, TracingLogSink, VariableStore};
use crate::http::request::transaction_id_for;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::processor::{InboundProcessor, OutboundProcessor};
use crate::trace::StoredTrace;

pub async fn trace_context_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let config = state.config.as_ref();

    // Scoped to this request; dropped when the response is returned.
    let mut vars = MemoryVariableStore::new();
    if config.trace.assign_transaction_id {
        let transaction_id =
            transaction_id_for(request.headers(), &config.headers.transaction_id_source);
        vars.set_var(&config.variables.transaction_id, &transaction_id);
    }

    run_inbound(config, request.headers_mut(), &mut vars);
    request
        .extensions_mut()
        .insert(StoredTrace::load(&vars, &config.variables));

    let mut response = next.run(request).await;

    run_outbound(config, &vars, response.headers_mut());
    response
}

/// Run the inbound processor, absorbing any failure.
pub fn run_inbound(config: &BridgeConfig, headers: &mut HeaderMap, vars: &mut MemoryVariableStore) {
    let log = TracingLogSink::inbound();
    match InboundProcessor::new(config).process(headers, vars, &log) {
        Ok(outcome) => metrics::record_inbound(&outcome),
        Err(e) => {
            metrics::record_failure("inbound");
            tracing::error!(
                component = "inbound",
                error = %e,
                detail = ?e,
                "[Trace Context] Fatal error, continuing request processing"
            );
        }
    }
}

/// Run the outbound processor, absorbing any failure.
pub fn run_outbound(config: &BridgeConfig, vars: &MemoryVariableStore, headers: &mut HeaderMap) {
    let log = TracingLogSink::outbound();
    match OutboundProcessor::new(config).process(vars, headers, &log) {
        Ok(outcome) => metrics::record_outbound(outcome),
        Err(e) => {
            metrics::record_failure("outbound");
            tracing::error!(
                component = "outbound",
                error = %e,
                detail = ?e,
                "[Trace Context Response] Error, continuing response processing"
            );
        }
    }
}
