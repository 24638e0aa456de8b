//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → BridgeConfig (validated, immutable)
//!     → borrowed by both processors, shared via Arc by the HTTP host
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no global config state
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::BridgeConfig;
pub use schema::HeaderConfig;
pub use schema::ObservabilityConfig;
pub use schema::TraceConfig;
pub use schema::VariableConfig;
