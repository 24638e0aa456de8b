//! W3C Trace Context primitives.
//!
//! # Data Flow
//! ```text
//! legacy correlation ID
//!     → ids.rs (normalize to 32-hex trace-id, random 16-hex span-id)
//!     → traceparent.rs (assemble / validate / split header)
//!     → tracestate.rs (append apic=<legacy> entry)
//!     → record.rs (persist resolved IDs into the per-request store)
//! ```
//!
//! # Design Decisions
//! - Everything here is pure string work; no collaborator access
//! - Validation is syntactic only, matching the gateway's accepted inputs
//! - Extraction never fails on malformed input; callers validate first

pub mod ids;
pub mod record;
pub mod traceparent;
pub mod tracestate;

pub use ids::{generate_span_id, normalize_to_trace_id};
pub use record::{StoredTrace, TraceRecord};
pub use traceparent::{extract_span_id, extract_trace_id, format_traceparent, is_valid_traceparent};
