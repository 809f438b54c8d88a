// engine/filter.rs
// The upstream filter pass every view derives from

use csa_core::ServiceRequest;

use crate::filters::{ChartFilters, DateRange};

/// The filtered subset: records inside the date range that match every active
/// chart filter. Source order is preserved.
pub fn apply_filters<'a>(
    records: &'a [ServiceRequest],
    filters: &ChartFilters,
    range: &DateRange,
) -> Vec<&'a ServiceRequest> {
    records
        .iter()
        .filter(|r| range.contains(r.request_date) && filters.matches(r))
        .collect()
}
