//! Record identifiers and sequence codes.

use crate::types::{RecordId, Timestamp};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Random suffix length appended to the creation timestamp
const SUFFIX_LEN: usize = 9;

/// Minimum digit count of the ordinal part of a sequence code
pub const SEQUENCE_WIDTH: usize = 6;

/// Generate a record id of the form `<unix-millis>-<suffix>`.
///
/// `taken` is consulted so an id already present in the list is never
/// handed out again.
pub fn generate_id(now: Timestamp, taken: impl Fn(&str) -> bool) -> RecordId {
    let mut rng = rand::thread_rng();
    loop {
        let suffix: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        let id = format!("{}-{}", now.timestamp_millis(), suffix);
        if !taken(&id) {
            return id;
        }
    }
}

/// Format a sequence code, e.g. `DLB000042`.
pub fn format_sequence(prefix: &str, ordinal: u64) -> String {
    format!("{}{:0width$}", prefix, ordinal, width = SEQUENCE_WIDTH)
}

/// Parse the ordinal back out of a sequence code carrying `prefix`.
pub fn parse_sequence(prefix: &str, code: &str) -> Option<u64> {
    let digits = code.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
