//! HTTP hosting subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, timeout and trace layers)
//!     → request.rs (assign legacy transaction ID)
//!     → middleware/trace_context.rs (inbound processor)
//!     → echo.rs (business logic stand-in)
//!     → middleware/trace_context.rs (outbound processor)
//!     → Send to client
//! ```

pub mod echo;
pub mod middleware;
pub mod request;
pub mod server;

pub use server::{AppState, HttpServer};
