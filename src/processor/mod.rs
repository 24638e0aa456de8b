//! Trace context processors.
//!
//! # Data Flow
//! ```text
//! request
//!     → inbound.rs (resolve trace context, persist record)
//!     → [business logic, opaque]
//!     → outbound.rs (expose record on response headers)
//!     → response
//! ```
//!
//! # Design Decisions
//! - Processors never call each other; the variable store is the only channel
//! - Both return `Result`; the host logs failures and always continues
//! - Configuration is borrowed, never global

pub mod inbound;
pub mod outbound;

pub use inbound::{InboundOutcome, InboundProcessor};
pub use outbound::{OutboundOutcome, OutboundProcessor};
