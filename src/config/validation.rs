//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, trace flags and header names
//! - Check that record variables and request headers cannot clobber each other
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BridgeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::http::HeaderName;
use thiserror::Error;

use crate::config::schema::BridgeConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: {value:?} is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("trace.default_trace_flags: {0:?} must be two lowercase hex characters")]
    InvalidTraceFlags(String),

    #[error("headers.{field}: {value:?} is not a valid header name")]
    InvalidHeaderName { field: &'static str, value: String },

    #[error("headers.{field}: {value:?} is already used by another request header")]
    DuplicateHeaderName { field: &'static str, value: String },

    #[error("variables.{field}: path must not be empty")]
    EmptyVariablePath { field: &'static str },

    #[error("variables.{field}: path {value:?} is already used by another variable")]
    DuplicateVariablePath { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if !is_trace_flags(&config.trace.default_trace_flags) {
        errors.push(ValidationError::InvalidTraceFlags(
            config.trace.default_trace_flags.clone(),
        ));
    }

    for (field, name) in config.headers.named() {
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            errors.push(ValidationError::InvalidHeaderName {
                field,
                value: name.to_string(),
            });
        }
    }

    let mut seen_headers = HashSet::new();
    for (field, name) in config.headers.request_named() {
        if !seen_headers.insert(name.to_ascii_lowercase()) {
            errors.push(ValidationError::DuplicateHeaderName {
                field,
                value: name.to_string(),
            });
        }
    }

    let mut seen = HashSet::new();
    for (field, path) in config.variables.named() {
        if path.is_empty() {
            errors.push(ValidationError::EmptyVariablePath { field });
        } else if !seen.insert(path) {
            errors.push(ValidationError::DuplicateVariablePath {
                field,
                value: path.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_trace_flags(flags: &str) -> bool {
    flags.len() == 2 && flags.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&BridgeConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = BridgeConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.trace.default_trace_flags = "1".into();
        config.headers.response_trace_id = "X Trace Id".into();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::InvalidTraceFlags("1".into())));
    }

    #[test]
    fn test_uppercase_flags_rejected() {
        let mut config = BridgeConfig::default();
        config.trace.default_trace_flags = "0A".into();
        assert!(validate_config(&config).is_err());

        config.trace.default_trace_flags = "0a".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = BridgeConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::InvalidAddress { field: "observability.metrics_address", .. }
        ));
    }

    #[test]
    fn test_request_header_names_must_be_distinct() {
        let mut config = BridgeConfig::default();
        config.headers.legacy_correlation = "TraceParent".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateHeaderName {
                field: "legacy_correlation",
                value: "TraceParent".into(),
            }]
        );
    }

    #[test]
    fn test_response_names_may_repeat_request_names() {
        // X-Correlation-ID carries the legacy ID inbound and the trace-id outbound.
        let config = BridgeConfig::default();
        assert_eq!(config.headers.legacy_correlation, config.headers.response_correlation_id);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_variable_paths_must_be_distinct() {
        let mut config = BridgeConfig::default();
        config.variables.trace_id = config.variables.transaction_id.clone();
        config.variables.span_id = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::DuplicateVariablePath {
                    field: "trace_id",
                    value: "var://service/transaction-id".into(),
                },
                ValidationError::EmptyVariablePath { field: "span_id" },
            ]
        );
    }
}
