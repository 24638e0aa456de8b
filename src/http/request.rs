//! Legacy transaction ID assignment.
//!
//! # Responsibilities
//! - Give every request the gateway-style transaction ID the inbound
//!   processor treats as the legacy correlation ID
//!
//! # Design Decisions
//! - An upstream `X-Request-ID` is reused so callers can correlate their own logs
//! - Otherwise a UUID v4 is generated, matching the gateway's ID shape

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::gateway::HeaderAccess;

/// Transaction ID for a request: the source header if usable, else a new UUID v4.
pub fn transaction_id_for(headers: &HeaderMap, source_header: &str) -> String {
    HeaderAccess::get(headers, source_header)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reuses_source_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "req-42".parse().unwrap());
        assert_eq!(transaction_id_for(&headers, "X-Request-ID"), "req-42");
    }

    #[test]
    fn test_generates_uuid_when_absent_or_blank() {
        let mut headers = HeaderMap::new();
        let generated = transaction_id_for(&headers, "X-Request-ID");
        assert!(Uuid::parse_str(&generated).is_ok());

        headers.insert("x-request-id", "   ".parse().unwrap());
        let generated = transaction_id_for(&headers, "X-Request-ID");
        assert!(Uuid::parse_str(&generated).is_ok());
    }
}
