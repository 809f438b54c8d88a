// engine module
// Pure derivations over the record collection. Stateless: equal inputs
// always produce equal outputs, so views can re-derive on every state change.

pub mod compare;
pub mod filter;
pub mod group;
pub mod series;
pub mod summary;
pub mod table;

pub use compare::{percent_change, split_periods, PeriodSplit, DEFAULT_COMPARISON_DAYS};
pub use filter::apply_filters;
pub use group::{avg_resolution_by, group_counts, GroupDimension};
pub use series::{rolling_series, SparklineMetric, DEFAULT_WINDOW_DAYS, FLAT_SERIES_PLACEHOLDER};
pub use summary::{summarize, DashboardSummary};
pub use table::{
    derive_table, ColumnFilters, ColumnSelection, SortDirection, SortKey, TableState, TableView,
    PAGE_SIZE,
};
