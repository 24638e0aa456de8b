//! Header access over `http::HeaderMap`.
//!
//! # Design Decisions
//! - Header names are case-insensitive; lookups go through `HeaderName`
//! - Non-UTF-8 values are read lossily so the caller can still log and reject them
//! - Repeated header lines are combined with `,` in arrival order
//! - `set` replaces every existing value for the name

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::TraceError;
use crate::gateway::HeaderAccess;

impl HeaderAccess for HeaderMap {
    fn get(&self, name: &str) -> Option<String> {
        let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
        let values: Vec<String> = self
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.join(","))
        }
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), TraceError> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            TraceError::InvalidHeaderName {
                name: name.to_string(),
            }
        })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|source| TraceError::InvalidHeaderValue {
                name: name.to_string(),
                value: value.to_string(),
                source,
            })?;
        self.insert(header_name, header_value);
        Ok(())
    }
}
