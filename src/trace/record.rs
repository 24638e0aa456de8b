//! Request trace record persisted between the inbound and outbound phases.

use serde::Serialize;

use crate::config::VariableConfig;
use crate::gateway::VariableStore;
use crate::trace::traceparent::{extract_span_id, extract_trace_id};

/// Resolved identifiers for one request, written once by the inbound processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub legacy_correlation_id: String,
    pub traceparent: String,
    pub trace_id: Option<String>,
    pub span_id: Option<String>,
}

impl TraceRecord {
    /// Build a record from the final traceparent, splitting out its IDs.
    pub fn new(legacy_correlation_id: impl Into<String>, traceparent: impl Into<String>) -> Self {
        let traceparent = traceparent.into();
        let trace_id = extract_trace_id(&traceparent).map(str::to_string);
        let span_id = extract_span_id(&traceparent).map(str::to_string);
        Self {
            legacy_correlation_id: legacy_correlation_id.into(),
            traceparent,
            trace_id,
            span_id,
        }
    }

    /// Write the record into the per-request store. Absent IDs are not written.
    pub fn store<V: VariableStore + ?Sized>(&self, vars: &mut V, paths: &VariableConfig) {
        vars.set_var(&paths.legacy_correlation_id, &self.legacy_correlation_id);
        vars.set_var(&paths.traceparent, &self.traceparent);
        if let Some(trace_id) = &self.trace_id {
            vars.set_var(&paths.trace_id, trace_id);
        }
        if let Some(span_id) = &self.span_id {
            vars.set_var(&paths.span_id, span_id);
        }
    }
}

/// Read side of the record. Any field may be missing if the inbound phase
/// did not run or stopped early.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoredTrace {
    pub legacy_correlation_id: Option<String>,
    pub traceparent: Option<String>,
    pub trace_id: Option<String>,
    pub span_id: Option<String>,
}

impl StoredTrace {
    pub fn load<V: VariableStore + ?Sized>(vars: &V, paths: &VariableConfig) -> Self {
        Self {
            legacy_correlation_id: non_empty(vars.get_var(&paths.legacy_correlation_id)),
            traceparent: non_empty(vars.get_var(&paths.traceparent)),
            trace_id: non_empty(vars.get_var(&paths.trace_id)),
            span_id: non_empty(vars.get_var(&paths.span_id)),
        }
    }

    /// True when neither identifier needed for response headers is present.
    pub fn is_empty(&self) -> bool {
        self.legacy_correlation_id.is_none() && self.trace_id.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
