//! Request-side trace context processing.
//!
//! # Responsibilities
//! - Read the legacy correlation ID from the gateway's transaction variable
//! - Extend a valid client traceparent, or derive a new one from the legacy ID
//! - Record the legacy ID in `tracestate` and the legacy correlation header
//! - Persist the resolved record and hand the trace-id to the transaction variable
//!
//! # Design Decisions
//! - A client trace lineage is never rewritten; only `tracestate` grows
//! - Invalid client traceparents are replaced, not repaired
//! - No legacy ID means no trace work at all (fail-open)

use crate::config::BridgeConfig;
use crate::error::TraceError;
use crate::gateway::{HeaderAccess, LogSink, VariableStore};
use crate::trace::ids::{generate_span_id, normalize_to_trace_id};
use crate::trace::record::TraceRecord;
use crate::trace::traceparent::{format_traceparent, is_valid_traceparent};
use crate::trace::tracestate::{append_entry, apic_entry};

/// How the inbound processor resolved the request's trace context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundOutcome {
    /// No legacy correlation ID; headers left untouched.
    MissingLegacyId,
    /// No client traceparent; a new one was derived.
    Generated,
    /// The client traceparent was malformed and replaced.
    Regenerated { rejected: String },
    /// The client traceparent was kept and `tracestate` extended.
    Extended,
}

impl InboundOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            InboundOutcome::MissingLegacyId => "missing_legacy_id",
            InboundOutcome::Generated => "generated",
            InboundOutcome::Regenerated { .. } => "regenerated",
            InboundOutcome::Extended => "extended",
        }
    }
}

/// Inbound processor. Stateless apart from the borrowed configuration.
#[derive(Debug, Clone, Copy)]
pub struct InboundProcessor<'a> {
    config: &'a BridgeConfig,
}

impl<'a> InboundProcessor<'a> {
    pub fn new(config: &'a BridgeConfig) -> Self {
        Self { config }
    }

    /// Resolve the trace context for the current request.
    ///
    /// `headers` are the request headers forwarded to business logic; `vars`
    /// is the per-request store later read by the outbound processor.
    pub fn process<H, V, L>(
        &self,
        headers: &mut H,
        vars: &mut V,
        log: &L,
    ) -> Result<InboundOutcome, TraceError>
    where
        H: HeaderAccess + ?Sized,
        V: VariableStore + ?Sized,
        L: LogSink + ?Sized,
    {
        let names = &self.config.headers;

        let legacy_id = match vars
            .get_var(&self.config.variables.transaction_id)
            .filter(|id| !id.is_empty())
        {
            Some(id) => id,
            None => {
                log.error("APIC correlation ID not available");
                return Ok(InboundOutcome::MissingLegacyId);
            }
        };

        self.debug(log, || {
            format!("Processing request with APIC correlation ID: {}", legacy_id)
        });

        let outcome = match headers.get(&names.traceparent).filter(|tp| !tp.is_empty()) {
            None => {
                self.generate(headers, &legacy_id, log)?;
                InboundOutcome::Generated
            }
            Some(existing) => {
                self.debug(log, || format!("Client provided traceparent: {}", existing));
                if is_valid_traceparent(&existing) {
                    self.extend(headers, &legacy_id, log)?;
                    InboundOutcome::Extended
                } else {
                    log.warn(&format!(
                        "Invalid traceparent format, generating new: {}",
                        existing
                    ));
                    self.generate(headers, &legacy_id, log)?;
                    InboundOutcome::Regenerated { rejected: existing }
                }
            }
        };

        // Systems without trace context support still correlate on this.
        headers.set(&names.legacy_correlation, &legacy_id)?;

        self.store(headers, vars, &legacy_id, log)?;

        log.info("Trace context configured successfully");
        Ok(outcome)
    }

    fn generate<H, L>(&self, headers: &mut H, legacy_id: &str, log: &L) -> Result<(), TraceError>
    where
        H: HeaderAccess + ?Sized,
        L: LogSink + ?Sized,
    {
        let trace_id = normalize_to_trace_id(legacy_id);
        let span_id = generate_span_id();
        let traceparent =
            format_traceparent(&trace_id, &span_id, &self.config.trace.default_trace_flags);
        let tracestate = apic_entry(legacy_id);

        headers.set(&self.config.headers.traceparent, &traceparent)?;
        headers.set(&self.config.headers.tracestate, &tracestate)?;

        self.debug(log, || format!("Generated traceparent: {}", traceparent));
        self.debug(log, || format!("Generated tracestate: {}", tracestate));
        Ok(())
    }

    fn extend<H, L>(&self, headers: &mut H, legacy_id: &str, log: &L) -> Result<(), TraceError>
    where
        H: HeaderAccess + ?Sized,
        L: LogSink + ?Sized,
    {
        let existing = headers
            .get(&self.config.headers.tracestate)
            .unwrap_or_default();
        let tracestate = append_entry(&existing, &apic_entry(legacy_id));

        headers.set(&self.config.headers.tracestate, &tracestate)?;

        self.debug(log, || format!("Enhanced tracestate: {}", tracestate));
        Ok(())
    }

    fn store<H, V, L>(
        &self,
        headers: &H,
        vars: &mut V,
        legacy_id: &str,
        log: &L,
    ) -> Result<(), TraceError>
    where
        H: HeaderAccess + ?Sized,
        V: VariableStore + ?Sized,
        L: LogSink + ?Sized,
    {
        let traceparent = headers
            .get(&self.config.headers.traceparent)
            .ok_or(TraceError::TraceparentMissing { phase: "inbound" })?;

        let paths = &self.config.variables;
        let record = TraceRecord::new(legacy_id, traceparent);
        record.store(vars, paths);

        if let Some(trace_id) = &record.trace_id {
            // Everything logged after this point on the request carries the trace-id.
            vars.set_var(&paths.transaction_id, trace_id);
            log.info(&format!(
                "Transaction ID set to trace ID: {} (original APIC ID: {})",
                trace_id, legacy_id
            ));
        }

        self.debug(log, || {
            format!(
                "Stored trace context - TraceID: {}, SpanID: {}",
                record.trace_id.as_deref().unwrap_or("N/A"),
                record.span_id.as_deref().unwrap_or("N/A")
            )
        });
        Ok(())
    }

    fn debug<L, F>(&self, log: &L, msg: F)
    where
        L: LogSink + ?Sized,
        F: FnOnce() -> String,
    {
        if self.config.trace.verbose_logging {
            log.debug(&msg());
        }
    }
}
