//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! processors and HTTP host produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (outcome and failure counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
