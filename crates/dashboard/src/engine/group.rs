// engine/group.rs
// Per-dimension partitioning: segment counts and mean resolution hours

use csa_core::ServiceRequest;

/// Categorical dimensions a chart can partition by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupDimension {
    Vertical,
    Status,
    IssueCategory,
    Urgency,
    Priority,
    AccountHealth,
}

impl GroupDimension {
    fn value_of(self, request: &ServiceRequest) -> &'static str {
        match self {
            GroupDimension::Vertical => request.vertical.as_str(),
            GroupDimension::Status => request.status.as_str(),
            GroupDimension::IssueCategory => request.issue_category.as_str(),
            GroupDimension::Urgency => request.urgency.as_str(),
            GroupDimension::Priority => request.priority.as_str(),
            GroupDimension::AccountHealth => request.account_health.as_str(),
        }
    }
}

/// `(value, count)` per distinct dimension value, in first-occurrence order of
/// the source collection. Chart segment order depends on this ordering.
pub fn group_counts(
    records: &[&ServiceRequest],
    dimension: GroupDimension,
) -> Vec<(&'static str, usize)> {
    let mut groups: Vec<(&'static str, usize)> = Vec::new();
    for record in records {
        let value = dimension.value_of(record);
        match groups.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => groups.push((value, 1)),
        }
    }
    groups
}

/// Mean `time_to_resolution` per distinct dimension value, rounded to the
/// nearest hour. Same first-occurrence ordering as [`group_counts`].
pub fn avg_resolution_by(
    records: &[&ServiceRequest],
    dimension: GroupDimension,
) -> Vec<(&'static str, u32)> {
    let mut sums: Vec<(&'static str, f64, usize)> = Vec::new();
    for record in records {
        let value = dimension.value_of(record);
        match sums.iter_mut().find(|(v, _, _)| *v == value) {
            Some((_, sum, count)) => {
                *sum += record.time_to_resolution;
                *count += 1;
            }
            None => sums.push((value, record.time_to_resolution, 1)),
        }
    }

    sums.into_iter()
        .map(|(value, sum, count)| (value, (sum / count as f64).round() as u32))
        .collect()
}
