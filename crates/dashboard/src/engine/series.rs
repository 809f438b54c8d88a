// engine/series.rs
// Per-day rolling metric series for sparklines

use chrono::{Duration, NaiveDate};

use csa_core::{AccountHealth, RequestStatus, ServiceRequest};

use crate::sla::SlaThresholds;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Substituted for a series whose every point is exactly zero, so sparklines
/// never render flat.
pub const FLAT_SERIES_PLACEHOLDER: [f64; 7] = [1.0, 2.0, 1.0, 3.0, 2.0, 4.0, 3.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparklineMetric {
    TotalRequests,
    ResolvedRequests,
    AvgResolutionTime,
    CriticalAccounts,
    SlaBreaches,
}

/// One point per calendar day in the `window_days`-day window ending `today`,
/// oldest first. Each point reduces the records dated exactly that day.
/// An all-zero window yields [`FLAT_SERIES_PLACEHOLDER`] instead.
pub fn rolling_series(
    records: &[&ServiceRequest],
    metric: SparklineMetric,
    thresholds: SlaThresholds,
    window_days: u32,
    today: NaiveDate,
) -> Vec<f64> {
    let mut points = Vec::with_capacity(window_days as usize);
    for offset in (0..window_days).rev() {
        let day = today - Duration::days(i64::from(offset));
        let day_records: Vec<&ServiceRequest> = records
            .iter()
            .copied()
            .filter(|r| r.request_date == day)
            .collect();
        points.push(reduce(&day_records, metric, thresholds));
    }

    if points.iter().all(|p| *p == 0.0) {
        return FLAT_SERIES_PLACEHOLDER.to_vec();
    }
    points
}

fn reduce(day_records: &[&ServiceRequest], metric: SparklineMetric, thresholds: SlaThresholds) -> f64 {
    match metric {
        SparklineMetric::TotalRequests => day_records.len() as f64,
        SparklineMetric::ResolvedRequests => day_records
            .iter()
            .filter(|r| r.status == RequestStatus::Resolved)
            .count() as f64,
        SparklineMetric::AvgResolutionTime => {
            if day_records.is_empty() {
                0.0
            } else {
                let total: f64 = day_records.iter().map(|r| r.time_to_resolution).sum();
                total / day_records.len() as f64
            }
        }
        SparklineMetric::CriticalAccounts => day_records
            .iter()
            .filter(|r| r.account_health == AccountHealth::Critical)
            .count() as f64,
        SparklineMetric::SlaBreaches => thresholds.breach_count(day_records) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csa_core::{IssueCategory, UrgencyLevel, Vertical};

    fn request(id: &str, date: NaiveDate, status: RequestStatus, resolution: f64) -> ServiceRequest {
        ServiceRequest {
            request_id: id.to_string(),
            account_name: "Test Account".to_string(),
            vertical: Vertical::Restaurant,
            site_count: 2,
            issue_category: IssueCategory::PosMalfunction,
            request_date: date,
            status,
            urgency: UrgencyLevel::High,
            priority: UrgencyLevel::High,
            time_to_respond: 2.0,
            time_to_resolution: resolution,
            resolution_date: date,
            account_health: AccountHealth::Good,
        }
    }

    #[test]
    fn test_one_point_per_day_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let day_before = today - Duration::days(1);

        let a = request("SR-A", today, RequestStatus::Resolved, 10.0);
        let b = request("SR-B", today, RequestStatus::InProgress, 20.0);
        let c = request("SR-C", day_before, RequestStatus::Resolved, 30.0);
        let records = vec![&a, &b, &c];

        let series = rolling_series(
            &records,
            SparklineMetric::TotalRequests,
            SlaThresholds::default(),
            DEFAULT_WINDOW_DAYS,
            today,
        );
        assert_eq!(series, vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_all_zero_window_substitutes_placeholder() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let stale = request(
            "SR-OLD",
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            RequestStatus::Resolved,
            10.0,
        );
        let records = vec![&stale];

        let series = rolling_series(
            &records,
            SparklineMetric::TotalRequests,
            SlaThresholds::default(),
            DEFAULT_WINDOW_DAYS,
            today,
        );
        assert_eq!(series, vec![1.0, 2.0, 1.0, 3.0, 2.0, 4.0, 3.0]);
    }

    #[test]
    fn test_avg_metric_zero_on_empty_days() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let a = request("SR-A", today, RequestStatus::Resolved, 10.0);
        let b = request("SR-B", today, RequestStatus::Resolved, 20.0);
        let records = vec![&a, &b];

        let series = rolling_series(
            &records,
            SparklineMetric::AvgResolutionTime,
            SlaThresholds::default(),
            DEFAULT_WINDOW_DAYS,
            today,
        );
        assert_eq!(series[6], 15.0);
        assert!(series[..6].iter().all(|p| *p == 0.0));
    }

    #[test]
    fn test_breach_metric_uses_thresholds() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let fine = request("SR-A", today, RequestStatus::Resolved, 10.0);
        let slow = request("SR-B", today, RequestStatus::Resolved, 100.0);
        let records = vec![&fine, &slow];

        let series = rolling_series(
            &records,
            SparklineMetric::SlaBreaches,
            SlaThresholds::default(),
            DEFAULT_WINDOW_DAYS,
            today,
        );
        assert_eq!(series[6], 1.0);
    }
}
