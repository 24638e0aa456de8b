//! Metrics collection and exposition.
//!
//! # Metrics
//! - `trace_bridge_inbound_total` (counter): inbound outcomes by `outcome`
//! - `trace_bridge_outbound_total` (counter): outbound outcomes by `outcome`
//! - `trace_bridge_failures_total` (counter): processor errors by `phase`
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Prometheus exporter serves its own HTTP listener

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::processor::{InboundOutcome, OutboundOutcome};

/// Install the Prometheus recorder and scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_inbound(outcome: &InboundOutcome) {
    metrics::counter!("trace_bridge_inbound_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_outbound(outcome: OutboundOutcome) {
    metrics::counter!("trace_bridge_outbound_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_failure(phase: &'static str) {
    metrics::counter!("trace_bridge_failures_total", "phase" => phase).increment(1);
}
