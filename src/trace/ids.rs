//! Trace and span identifier generation.
//!
//! # Responsibilities
//! - Derive a W3C trace-id deterministically from a legacy correlation ID
//! - Generate random span-ids for the current hop
//!
//! # Design Decisions
//! - Long IDs are truncated, not hashed, so UUID-based legacy IDs stay readable
//!   inside the trace-id (`550e8400-e29b-...` becomes `550e8400e29b...`)
//! - Short or non-hex IDs are padded with SHA-256 of the original input
//! - No randomness in derivation: every hop recomputes the same trace-id

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Length of a W3C trace-id in hex characters.
pub const TRACE_ID_LEN: usize = 32;

/// Length of a W3C span-id (parent-id) in hex characters.
pub const SPAN_ID_LEN: usize = 16;

/// Normalize a legacy correlation ID to a 32 character lowercase hex trace-id.
///
/// The output is deterministic for a given input. Collisions between legacy
/// IDs that share their first 32 hex characters are accepted.
pub fn normalize_to_trace_id(correlation_id: &str) -> String {
    let cleaned: String = correlation_id
        .replace('-', "")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .collect();

    if cleaned.len() >= TRACE_ID_LEN {
        return cleaned[..TRACE_ID_LEN].to_string();
    }

    // Digest of the original input, not of the cleaned value.
    let digest = hex::encode(Sha256::digest(correlation_id.as_bytes()));
    let mut trace_id = cleaned;
    trace_id.push_str(&digest);
    trace_id.truncate(TRACE_ID_LEN);
    trace_id
}

/// Generate a random 16 character lowercase hex span-id.
pub fn generate_span_id() -> String {
    let mut bytes = [0u8; SPAN_ID_LEN / 2];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
