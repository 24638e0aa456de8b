//! Host gateway collaborators.
//!
//! # Data Flow
//! ```text
//! processors
//!     → HeaderAccess (request headers inbound, response headers outbound)
//!     → VariableStore (per-request context shared between phases)
//!     → LogSink (gateway log stream)
//! ```
//!
//! # Design Decisions
//! - Processors only see these three traits, so tests inject in-memory fakes
//! - Variable writes and log calls cannot fail; header writes can, because
//!   real HTTP header values are restricted to visible ASCII
//! - The store is scoped to one request and owned by the host, never by us

pub mod headers;
pub mod log;
pub mod variables;

use crate::error::TraceError;

pub use log::{LogLevel, MemoryLogSink, TracingLogSink};
pub use variables::MemoryVariableStore;

/// Named header access for the current request or response.
pub trait HeaderAccess {
    /// Read a header value, or `None` if absent.
    fn get(&self, name: &str) -> Option<String>;

    /// Set a header, replacing any existing value.
    fn set(&mut self, name: &str, value: &str) -> Result<(), TraceError>;
}

/// Per-request variable store keyed by path (e.g. `var://service/transaction-id`).
pub trait VariableStore {
    fn get_var(&self, path: &str) -> Option<String>;

    fn set_var(&mut self, path: &str, value: &str);
}

/// Gateway log stream.
pub trait LogSink {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn error(&self, msg: &str);
}
