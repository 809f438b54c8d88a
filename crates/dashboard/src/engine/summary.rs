// engine/summary.rs
// Card-row metrics over the filtered subset, with period-over-period deltas

use chrono::NaiveDate;

use csa_core::{RequestStatus, ServiceRequest};

use crate::engine::compare::{percent_change, split_periods};
use crate::sla::SlaThresholds;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_requests: usize,
    pub resolved: usize,
    pub in_progress: usize,
    /// Mean resolution hours over the whole subset, rounded; 0 when empty
    pub avg_resolution_hours: u32,
    pub sla_breaches: usize,

    /// Deltas vs. the preceding window; absent when the previous count is zero
    pub total_change_pct: Option<f64>,
    pub resolved_change_pct: Option<f64>,
    pub breach_change_pct: Option<f64>,
}

pub fn summarize(
    records: &[&ServiceRequest],
    thresholds: SlaThresholds,
    window_days: u32,
    today: NaiveDate,
) -> DashboardSummary {
    let resolved = records
        .iter()
        .filter(|r| r.status == RequestStatus::Resolved)
        .count();

    let avg_resolution_hours = if records.is_empty() {
        0
    } else {
        let total: f64 = records.iter().map(|r| r.time_to_resolution).sum();
        (total / records.len() as f64).round() as u32
    };

    let split = split_periods(records, window_days, today);
    let resolved_in = |subset: &[&ServiceRequest]| {
        subset
            .iter()
            .filter(|r| r.status == RequestStatus::Resolved)
            .count() as f64
    };

    DashboardSummary {
        total_requests: records.len(),
        resolved,
        in_progress: records.len() - resolved,
        avg_resolution_hours,
        sla_breaches: thresholds.breach_count(records),
        total_change_pct: percent_change(split.current.len() as f64, split.previous.len() as f64),
        resolved_change_pct: percent_change(resolved_in(&split.current), resolved_in(&split.previous)),
        breach_change_pct: percent_change(
            thresholds.breach_count(&split.current) as f64,
            thresholds.breach_count(&split.previous) as f64,
        ),
    }
}
