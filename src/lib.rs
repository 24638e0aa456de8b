//! W3C Trace Context bridge for a legacy correlation-ID gateway.

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod observability;
pub mod processor;
pub mod trace;

pub use config::BridgeConfig;
pub use error::TraceError;
pub use http::HttpServer;
pub use processor::{InboundOutcome, InboundProcessor, OutboundOutcome, OutboundProcessor};
