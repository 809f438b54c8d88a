// engine/compare.rs
// Period-over-period comparison windows

use chrono::{Duration, NaiveDate};

use csa_core::ServiceRequest;

pub const DEFAULT_COMPARISON_DAYS: u32 = 30;

/// The current window `[today - N, today]` and the immediately preceding
/// half-open window `[today - 2N, today - N)`.
#[derive(Debug)]
pub struct PeriodSplit<'a> {
    pub current: Vec<&'a ServiceRequest>,
    pub previous: Vec<&'a ServiceRequest>,
}

pub fn split_periods<'a>(
    records: &[&'a ServiceRequest],
    window_days: u32,
    today: NaiveDate,
) -> PeriodSplit<'a> {
    let window = Duration::days(i64::from(window_days));
    let current_start = today - window;
    let previous_start = current_start - window;

    let current = records
        .iter()
        .copied()
        .filter(|r| r.request_date >= current_start && r.request_date <= today)
        .collect();
    let previous = records
        .iter()
        .copied()
        .filter(|r| r.request_date >= previous_start && r.request_date < current_start)
        .collect();

    PeriodSplit { current, previous }
}

/// `(current - previous) / previous * 100`; absent when there is nothing to
/// compare against.
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csa_core::{
        AccountHealth, IssueCategory, RequestStatus, ServiceRequest, UrgencyLevel, Vertical,
    };

    fn request(id: &str, date: NaiveDate) -> ServiceRequest {
        ServiceRequest {
            request_id: id.to_string(),
            account_name: "Test Account".to_string(),
            vertical: Vertical::Fuel,
            site_count: 1,
            issue_category: IssueCategory::Reporting,
            request_date: date,
            status: RequestStatus::Resolved,
            urgency: UrgencyLevel::Low,
            priority: UrgencyLevel::Low,
            time_to_respond: 1.0,
            time_to_resolution: 2.0,
            resolution_date: date,
            account_health: AccountHealth::Good,
        }
    }

    #[test]
    fn test_previous_period_is_half_open() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();

        // Boundary day today - N belongs to the current period, not the previous
        let boundary = request("SR-B", today - Duration::days(30));
        let inside_previous = request("SR-P", today - Duration::days(31));
        let oldest_previous = request("SR-O", today - Duration::days(60));
        let too_old = request("SR-X", today - Duration::days(61));
        let records = vec![&boundary, &inside_previous, &oldest_previous, &too_old];

        let split = split_periods(&records, 30, today);
        let current_ids: Vec<&str> = split.current.iter().map(|r| r.request_id.as_str()).collect();
        let previous_ids: Vec<&str> = split.previous.iter().map(|r| r.request_id.as_str()).collect();

        assert_eq!(current_ids, vec!["SR-B"]);
        assert_eq!(previous_ids, vec!["SR-P", "SR-O"]);
    }

    #[test]
    fn test_percent_change_guarded() {
        assert_eq!(percent_change(15.0, 10.0), Some(50.0));
        assert_eq!(percent_change(5.0, 10.0), Some(-50.0));
        assert_eq!(percent_change(10.0, 0.0), None);
        assert_eq!(percent_change(0.0, 0.0), None);
    }
}
