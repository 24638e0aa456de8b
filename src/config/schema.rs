//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the bridge.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the trace bridge.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BridgeConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Trace context behaviour.
    pub trace: TraceConfig,

    /// Header names read and written by the processors.
    pub headers: HeaderConfig,

    /// Variable store paths shared between the processors.
    pub variables: VariableConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Trace context behaviour.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Expose the full traceparent on responses (debugging).
    pub include_traceparent_in_response: bool,

    /// Emit debug-level trace context logs (dev/test only).
    pub verbose_logging: bool,

    /// Flags for generated traceparents: "01" = sampled, "00" = not sampled.
    pub default_trace_flags: String,

    /// Set to false to disable response headers entirely.
    pub response_enabled: bool,

    /// Assign a legacy transaction ID to every request in the HTTP host.
    pub assign_transaction_id: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            include_traceparent_in_response: false,
            verbose_logging: false,
            default_trace_flags: "01".to_string(),
            response_enabled: true,
            assign_transaction_id: true,
        }
    }
}

/// Header names. Matching is case-insensitive.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub traceparent: String,
    pub tracestate: String,

    /// Request header carrying the legacy ID to systems without trace context support.
    pub legacy_correlation: String,

    /// Request header the HTTP host reuses as the transaction ID when present.
    pub transaction_id_source: String,

    pub response_trace_id: String,
    pub response_legacy_correlation_id: String,
    pub response_correlation_id: String,
    pub response_traceparent: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            traceparent: "traceparent".to_string(),
            tracestate: "tracestate".to_string(),
            legacy_correlation: "X-Correlation-ID".to_string(),
            transaction_id_source: "X-Request-ID".to_string(),
            response_trace_id: "X-Trace-Id".to_string(),
            response_legacy_correlation_id: "X-APIC-Correlation-ID".to_string(),
            response_correlation_id: "X-Correlation-ID".to_string(),
            response_traceparent: "Traceparent".to_string(),
        }
    }
}

impl HeaderConfig {
    /// Names read or written on the request; these must not alias each other.
    pub fn request_named(&self) -> [(&'static str, &str); 4] {
        [
            ("traceparent", self.traceparent.as_str()),
            ("tracestate", self.tracestate.as_str()),
            ("legacy_correlation", self.legacy_correlation.as_str()),
            ("transaction_id_source", self.transaction_id_source.as_str()),
        ]
    }

    /// All configured names with their field labels, for validation.
    pub fn named(&self) -> [(&'static str, &str); 8] {
        [
            ("traceparent", self.traceparent.as_str()),
            ("tracestate", self.tracestate.as_str()),
            ("legacy_correlation", self.legacy_correlation.as_str()),
            ("transaction_id_source", self.transaction_id_source.as_str()),
            ("response_trace_id", self.response_trace_id.as_str()),
            ("response_legacy_correlation_id", self.response_legacy_correlation_id.as_str()),
            ("response_correlation_id", self.response_correlation_id.as_str()),
            ("response_traceparent", self.response_traceparent.as_str()),
        ]
    }
}

/// Variable store paths.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VariableConfig {
    /// The gateway's own transaction ID; holds the legacy ID on entry and is
    /// overwritten with the trace-id.
    pub transaction_id: String,

    pub legacy_correlation_id: String,
    pub traceparent: String,
    pub trace_id: String,
    pub span_id: String,
}

impl Default for VariableConfig {
    fn default() -> Self {
        Self {
            transaction_id: "var://service/transaction-id".to_string(),
            legacy_correlation_id: "var://context/trace/apic-correlation-id".to_string(),
            traceparent: "var://context/trace/traceparent".to_string(),
            trace_id: "var://context/trace/trace-id".to_string(),
            span_id: "var://context/trace/span-id".to_string(),
        }
    }
}

impl VariableConfig {
    /// All configured paths with their field labels, for validation.
    pub fn named(&self) -> [(&'static str, &str); 5] {
        [
            ("transaction_id", self.transaction_id.as_str()),
            ("legacy_correlation_id", self.legacy_correlation_id.as_str()),
            ("traceparent", self.traceparent.as_str()),
            ("trace_id", self.trace_id.as_str()),
            ("span_id", self.span_id.as_str()),
        ]
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
