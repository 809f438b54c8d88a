// engine/table.rs
// Table-local view state: search, per-column filters, sort, pagination.
// Layered on top of the chart-filtered subset; this state never writes back
// into the shared filter store.

use std::cmp::Ordering;

use csa_core::{AccountHealth, IssueCategory, RequestStatus, ServiceRequest, UrgencyLevel, Vertical};

pub const PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    RequestId,
    AccountName,
    Vertical,
    SiteCount,
    IssueCategory,
    RequestDate,
    Status,
    Urgency,
    Priority,
    TimeToRespond,
    TimeToResolution,
    ResolutionDate,
    AccountHealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Per-column enum filters. Applied in addition to the chart filters: a
/// record must pass both layers even when they disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilters {
    pub vertical: Option<Vertical>,
    pub status: Option<RequestStatus>,
    pub issue_category: Option<IssueCategory>,
    pub urgency: Option<UrgencyLevel>,
    pub priority: Option<UrgencyLevel>,
    pub account_health: Option<AccountHealth>,
}

impl ColumnFilters {
    fn matches(&self, request: &ServiceRequest) -> bool {
        self.vertical.map_or(true, |v| request.vertical == v)
            && self.status.map_or(true, |s| request.status == s)
            && self.issue_category.map_or(true, |c| request.issue_category == c)
            && self.urgency.map_or(true, |u| request.urgency == u)
            && self.priority.map_or(true, |p| request.priority == p)
            && self.account_health.map_or(true, |h| request.account_health == h)
    }
}

/// One column-filter change; `None` clears that column only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSelection {
    Vertical(Option<Vertical>),
    Status(Option<RequestStatus>),
    IssueCategory(Option<IssueCategory>),
    Urgency(Option<UrgencyLevel>),
    Priority(Option<UrgencyLevel>),
    AccountHealth(Option<AccountHealth>),
}

/// Local, non-shared table state. Mutations that change which rows qualify
/// reset the page to 1; sort changes keep the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    search: String,
    column_filters: ColumnFilters,
    sort_key: SortKey,
    sort_direction: SortDirection,
    page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            column_filters: ColumnFilters::default(),
            sort_key: SortKey::RequestDate,
            sort_direction: SortDirection::Descending,
            page: 1,
        }
    }
}

impl TableState {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn column_filters(&self) -> &ColumnFilters {
        &self.column_filters
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
        self.page = 1;
    }

    pub fn set_column_filter(&mut self, selection: ColumnSelection) {
        match selection {
            ColumnSelection::Vertical(v) => self.column_filters.vertical = v,
            ColumnSelection::Status(s) => self.column_filters.status = s,
            ColumnSelection::IssueCategory(c) => self.column_filters.issue_category = c,
            ColumnSelection::Urgency(u) => self.column_filters.urgency = u,
            ColumnSelection::Priority(p) => self.column_filters.priority = p,
            ColumnSelection::AccountHealth(h) => self.column_filters.account_health = h,
        }
        self.page = 1;
    }

    /// Clicking an already-active column flips direction; a new column sorts
    /// ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = match self.sort_direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// One derived page of the table
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a ServiceRequest>,
    pub total_rows: usize,
    pub page: usize,
    pub page_count: usize,
}

/// Derive the visible page from the chart-filtered subset: search + column
/// filters, stable sort, then pagination with the page clamped to
/// `[1, page_count]`.
pub fn derive_table<'a>(records: &[&'a ServiceRequest], state: &TableState) -> TableView<'a> {
    let needle = state.search.to_lowercase();

    let mut rows: Vec<&ServiceRequest> = records
        .iter()
        .copied()
        .filter(|r| state.column_filters.matches(r))
        .filter(|r| {
            needle.is_empty()
                || r.account_name.to_lowercase().contains(&needle)
                || r.request_id.to_lowercase().contains(&needle)
        })
        .collect();

    rows.sort_by(|a, b| {
        let ordering = compare_by(a, b, state.sort_key);
        match state.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    let total_rows = rows.len();
    let page_count = total_rows.div_ceil(PAGE_SIZE).max(1);
    let page = state.page.min(page_count);
    let rows = rows
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    TableView {
        rows,
        total_rows,
        page,
        page_count,
    }
}

fn compare_by(a: &ServiceRequest, b: &ServiceRequest, key: SortKey) -> Ordering {
    match key {
        SortKey::RequestId => fold_cmp(&a.request_id, &b.request_id),
        SortKey::AccountName => fold_cmp(&a.account_name, &b.account_name),
        SortKey::Vertical => fold_cmp(a.vertical.as_str(), b.vertical.as_str()),
        SortKey::SiteCount => a.site_count.cmp(&b.site_count),
        SortKey::IssueCategory => fold_cmp(a.issue_category.as_str(), b.issue_category.as_str()),
        SortKey::RequestDate => a.request_date.cmp(&b.request_date),
        SortKey::Status => fold_cmp(a.status.as_str(), b.status.as_str()),
        SortKey::Urgency => fold_cmp(a.urgency.as_str(), b.urgency.as_str()),
        SortKey::Priority => fold_cmp(a.priority.as_str(), b.priority.as_str()),
        SortKey::TimeToRespond => float_cmp(a.time_to_respond, b.time_to_respond),
        SortKey::TimeToResolution => float_cmp(a.time_to_resolution, b.time_to_resolution),
        SortKey::ResolutionDate => a.resolution_date.cmp(&b.resolution_date),
        SortKey::AccountHealth => fold_cmp(a.account_health.as_str(), b.account_health.as_str()),
    }
}

fn fold_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn float_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
