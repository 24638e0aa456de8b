//! `traceparent` header handling.
//!
//! Format: `version-trace_id-parent_id-flags`, e.g.
//! `00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01`.

use crate::trace::ids::{SPAN_ID_LEN, TRACE_ID_LEN};

/// The only traceparent version this gateway accepts or emits.
pub const VERSION: &str = "00";

/// Length of the trace-flags field in hex characters.
pub const FLAGS_LEN: usize = 2;

/// Assemble a version `00` traceparent header value.
pub fn format_traceparent(trace_id: &str, span_id: &str, flags: &str) -> String {
    format!("{}-{}-{}-{}", VERSION, trace_id, span_id, flags)
}

/// Syntactic validation of a traceparent value.
///
/// Hex fields are accepted in either case. All-zero trace or span IDs are
/// accepted even though W3C reserves them as invalid.
pub fn is_valid_traceparent(traceparent: &str) -> bool {
    let parts: Vec<&str> = traceparent.split('-').collect();
    if parts.len() != 4 {
        return false;
    }

    parts[0] == VERSION
        && is_hex_of_len(parts[1], TRACE_ID_LEN)
        && is_hex_of_len(parts[2], SPAN_ID_LEN)
        && is_hex_of_len(parts[3], FLAGS_LEN)
}

/// Return the trace-id segment, or `None` if the value has too few parts.
pub fn extract_trace_id(traceparent: &str) -> Option<&str> {
    traceparent.split('-').nth(1)
}

/// Return the parent-id (span-id) segment, or `None` if the value has too few parts.
pub fn extract_span_id(traceparent: &str) -> Option<&str> {
    traceparent.split('-').nth(2)
}

fn is_hex_of_len(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01";

    #[test]
    fn test_accepts_sample() {
        assert!(is_valid_traceparent(SAMPLE));
    }

    #[test]
    fn test_accepts_uppercase_hex() {
        assert!(is_valid_traceparent(
            "00-4BF92F3577B34DA6A3CE929D0E0E4736-00F067AA0BA902B7-0A"
        ));
    }

    #[test]
    fn test_accepts_all_zero_ids() {
        assert!(is_valid_traceparent(
            "00-00000000000000000000000000000000-0000000000000000-00"
        ));
    }

    #[test]
    fn test_rejects_other_versions() {
        assert!(!is_valid_traceparent(
            "01-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"
        ));
        assert!(!is_valid_traceparent(
            "ff-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"
        ));
    }

    #[test]
    fn test_rejects_bad_field_widths() {
        // 31 hex trace-id
        assert!(!is_valid_traceparent(
            "00-4bf92f3577b34da6a3ce929d0e0e473-00f067aa0ba902b7-01"
        ));
        // 17 hex span-id
        assert!(!is_valid_traceparent(
            "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b70-01"
        ));
        // 1 hex flags
        assert!(!is_valid_traceparent(
            "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-1"
        ));
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(!is_valid_traceparent(
            "00-4bf92f3577b34da6a3ce929d0e0e473g-00f067aa0ba902b7-01"
        ));
        assert!(!is_valid_traceparent(
            "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-zz"
        ));
    }

    #[test]
    fn test_rejects_wrong_part_count() {
        assert!(!is_valid_traceparent(""));
        assert!(!is_valid_traceparent("garbage"));
        assert!(!is_valid_traceparent("00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7"));
        assert!(!is_valid_traceparent(&format!("{}-extra", SAMPLE)));
    }

    #[test]
    fn test_extract_segments() {
        assert_eq!(extract_trace_id(SAMPLE), Some("4bf92f3577b34da6a3ce929d0e0e4736"));
        assert_eq!(extract_span_id(SAMPLE), Some("00f067aa0ba902b7"));
    }

    #[test]
    fn test_extract_from_malformed() {
        assert_eq!(extract_trace_id("nohyphens"), None);
        assert_eq!(extract_span_id("nohyphens"), None);
        assert_eq!(extract_trace_id("a-b"), Some("b"));
        assert_eq!(extract_span_id("a-b"), None);
        assert_eq!(extract_trace_id(""), None);
    }

    #[test]
    fn test_format_round_trips_through_validation() {
        let tp = format_traceparent("4bf92f3577b34da6a3ce929d0e0e4736", "00f067aa0ba902b7", "01");
        assert_eq!(tp, SAMPLE);
    }
}
