use std::cmp::Ordering;
use std::collections::BTreeSet;

/// One timed build step extracted from the activity log.
///
/// Equality, ordering, and set membership use the full value: duration and
/// description together. Two log lines with identical duration AND identical
/// description collapse into a single record; distinct steps that happen to
/// coincide on both fields are merged. This is deliberate and matches the
/// dedup semantics of the log format's consumers.
#[derive(Debug, Clone)]
pub struct Record {
    pub duration_ms: f64,
    pub description: String,
}

/// The deduplicated set of records extracted from one log file.
///
/// Iteration order is the record `Ord` (duration ascending, then
/// description); consumers that want ranked output must sort themselves.
pub type Profile = BTreeSet<Record>;

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.duration_ms.to_bits() == other.duration_ms.to_bits()
            && self.description == other.description
    }
}

impl Eq for Record {}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.duration_ms
            .total_cmp(&other.duration_ms)
            .then_with(|| self.description.cmp(&other.description))
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
