//! Summary model: totals, per-step rates, ranking, truncation.

use crate::log::{Profile, Record};

/// How many top entries the summary shows by default.
pub const DEFAULT_COUNT: usize = 20;

/// One displayed row: a record annotated with its share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Percentage of the FULL profile's total time, not of the shown subset.
    pub rate: f64,
    pub duration_ms: f64,
    pub description: String,
}

/// Ranked, rate-annotated, truncated view over a profile.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Sum over the whole profile, including records beyond `shown`.
    pub total_ms: f64,
    pub shown: Vec<Entry>,
}

impl Summary {
    /// Rank the profile by descending duration and keep the top `count`.
    ///
    /// Ties on duration order by description, so equal-duration steps render
    /// in a reproducible order. An empty profile yields a zero total and no
    /// rows; rates are never computed against a zero total.
    pub fn build(profile: &Profile, count: usize) -> Summary {
        let total_ms: f64 = profile.iter().map(|r| r.duration_ms).sum();

        let mut ranked: Vec<&Record> = profile.iter().collect();
        ranked.sort_by(|a, b| {
            b.duration_ms
                .total_cmp(&a.duration_ms)
                .then_with(|| a.description.cmp(&b.description))
        });

        let shown = ranked
            .into_iter()
            .take(count)
            .map(|r| Entry {
                rate: if total_ms > 0.0 {
                    100.0 * r.duration_ms / total_ms
                } else {
                    0.0
                },
                duration_ms: r.duration_ms,
                description: r.description.clone(),
            })
            .collect();

        Summary { total_ms, shown }
    }
}
