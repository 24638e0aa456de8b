//! `tracestate` header handling.
//!
//! The gateway only ever appends its own `apic=<legacy-id>` entry. Existing
//! vendor entries are carried through untouched and in their original order.

/// Vendor key under which the legacy correlation ID is recorded.
pub const APIC_KEY: &str = "apic";

/// Build the `apic=<legacy-id>` list member.
pub fn apic_entry(legacy_id: &str) -> String {
    format!("{}={}", APIC_KEY, legacy_id)
}

/// Append an entry to an existing tracestate value.
///
/// An empty existing value yields just the new entry.
// TODO: enforce the W3C 32 list-member / 512 byte limits before appending.
pub fn append_entry(existing: &str, entry: &str) -> String {
    if existing.is_empty() {
        entry.to_string()
    } else {
        format!("{},{}", existing, entry)
    }
}

/// Iterate `(key, value)` pairs of a tracestate value in order.
///
/// Members without `=` are yielded with an empty value.
pub fn entries(tracestate: &str) -> impl Iterator<Item = (&str, &str)> {
    tracestate
        .split(',')
        .map(str::trim)
        .filter(|member| !member.is_empty())
        .map(|member| member.split_once('=').unwrap_or((member, "")))
}

/// The legacy correlation ID recorded by the nearest gateway hop, if any.
///
/// Each hop appends, so the last `apic` member wins.
pub fn legacy_id(tracestate: &str) -> Option<&str> {
    entries(tracestate)
        .filter(|(key, _)| *key == APIC_KEY)
        .map(|(_, value)| value)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_id_takes_last_hop() {
        assert_eq!(legacy_id("apic=first,rojo=1,apic=second"), Some("second"));
        assert_eq!(legacy_id("rojo=1"), None);
        assert_eq!(legacy_id(""), None);
    }

    #[test]
    fn test_append_to_empty() {
        assert_eq!(append_entry("", &apic_entry("abc-123")), "apic=abc-123");
    }

    #[test]
    fn test_append_preserves_order() {
        let state = append_entry("congo=t61rcWkgMzE,rojo=00f067aa0ba902b7", &apic_entry("abc-123"));
        assert_eq!(state, "congo=t61rcWkgMzE,rojo=00f067aa0ba902b7,apic=abc-123");

        let keys: Vec<&str> = entries(&state).map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["congo", "rojo", "apic"]);
    }

    #[test]
    fn test_entries_tolerates_whitespace_and_blanks() {
        let parsed: Vec<(&str, &str)> = entries(" a=1 ,, b=2,flag").collect();
        assert_eq!(parsed, vec![("a", "1"), ("b", "2"), ("flag", "")]);
    }

    #[test]
    fn test_legacy_id_value_is_verbatim() {
        let (key, value) = entries("apic=550e8400-e29b-41d4-a716-446655440000")
            .next()
            .unwrap();
        assert_eq!(key, "apic");
        assert_eq!(value, "550e8400-e29b-41d4-a716-446655440000");
    }
}
