//! Aggregate summary over a record list.

use crate::store::contract::{Domain, Lifecycle, StatusPhase};
use crate::store::record::Record;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
    /// Sum of amounts over confirmed records only
    pub total_revenue: f64,
    /// Mean amount over all records, rounded; 0 for an empty list
    pub average_value: i64,
}

impl Stats {
    pub fn from_records<D: Domain>(records: &[Record<D>]) -> Self {
        let mut stats = Stats {
            total: records.len(),
            ..Stats::default()
        };
        let mut sum_all = 0.0;

        for record in records {
            let amount = D::amount(&record.fields);
            sum_all += amount;
            match record.status.phase() {
                StatusPhase::Confirmed => {
                    stats.confirmed += 1;
                    stats.total_revenue += amount;
                }
                StatusPhase::Pending => stats.pending += 1,
                StatusPhase::Cancelled => stats.cancelled += 1,
            }
        }

        if stats.total > 0 {
            stats.average_value = (sum_all / stats.total as f64).round() as i64;
        }
        stats
    }
}
