//! Response-side trace context processing.
//!
//! Reads the record left by the inbound processor and exposes it on the
//! response. Never mutates the variable store.

use crate::config::BridgeConfig;
use crate::error::TraceError;
use crate::gateway::{HeaderAccess, LogSink, VariableStore};
use crate::trace::record::StoredTrace;

const NOT_AVAILABLE: &str = "N/A";

/// What the outbound processor did with the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundOutcome {
    /// Response headers are disabled by configuration.
    Disabled,
    /// No record was found; nothing emitted.
    NoTraceContext,
    /// Response headers were set.
    Emitted,
}

impl OutboundOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutboundOutcome::Disabled => "disabled",
            OutboundOutcome::NoTraceContext => "no_trace_context",
            OutboundOutcome::Emitted => "emitted",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OutboundProcessor<'a> {
    config: &'a BridgeConfig,
}

impl<'a> OutboundProcessor<'a> {
    pub fn new(config: &'a BridgeConfig) -> Self {
        Self { config }
    }

    /// Copy the stored trace identifiers onto the response headers.
    pub fn process<V, H, L>(
        &self,
        vars: &V,
        headers: &mut H,
        log: &L,
    ) -> Result<OutboundOutcome, TraceError>
    where
        V: VariableStore + ?Sized,
        H: HeaderAccess + ?Sized,
        L: LogSink + ?Sized,
    {
        if !self.config.trace.response_enabled {
            return Ok(OutboundOutcome::Disabled);
        }

        let stored = StoredTrace::load(vars, &self.config.variables);
        if stored.is_empty() {
            log.warn("No trace context available");
            return Ok(OutboundOutcome::NoTraceContext);
        }

        let names = &self.config.headers;

        if let Some(trace_id) = &stored.trace_id {
            headers.set(&names.response_trace_id, trace_id)?;
        }

        if let Some(legacy_id) = &stored.legacy_correlation_id {
            headers.set(&names.response_legacy_correlation_id, legacy_id)?;
        }

        // The trace-id is the primary correlation value exposed to clients.
        if let Some(trace_id) = &stored.trace_id {
            headers.set(&names.response_correlation_id, trace_id)?;
        }

        if self.config.trace.include_traceparent_in_response {
            if let Some(traceparent) = &stored.traceparent {
                headers.set(&names.response_traceparent, traceparent)?;
            }
        }

        log.info(&format!(
            "Request completed - TraceID: {}, APIC: {}",
            stored.trace_id.as_deref().unwrap_or(NOT_AVAILABLE),
            stored.legacy_correlation_id.as_deref().unwrap_or(NOT_AVAILABLE)
        ));

        Ok(OutboundOutcome::Emitted)
    }
}
