//! Errors raised while applying trace context to a request or response.

use thiserror::Error;

/// Unexpected faults inside a trace processor.
///
/// Missing or malformed client input is not an error; it is reported through
/// the processor outcome instead. Hosts must log these and keep the request
/// pipeline running.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("invalid header name {name:?}")]
    InvalidHeaderName { name: String },

    #[error("value {value:?} cannot be used for header {name}")]
    InvalidHeaderValue {
        name: String,
        value: String,
        #[source]
        source: axum::http::header::InvalidHeaderValue,
    },

    #[error("traceparent header missing after {phase} trace context")]
    TraceparentMissing { phase: &'static str },
}
