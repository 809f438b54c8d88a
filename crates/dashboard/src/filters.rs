// dashboard/filters.rs
// Shared filter state - chart filters, date range, saved presets

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use csa_core::{AccountHealth, IssueCategory, RequestStatus, ServiceRequest, Vertical};

use crate::storage::{LocalStore, FILTER_PRESETS_KEY};

/// Active chart-driven constraints. Each dimension holds at most one value;
/// `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartFilters {
    pub vertical: Option<Vertical>,
    pub status: Option<RequestStatus>,
    pub issue_category: Option<IssueCategory>,
    pub account_health: Option<AccountHealth>,
}

impl ChartFilters {
    pub fn is_empty(&self) -> bool {
        self.vertical.is_none()
            && self.status.is_none()
            && self.issue_category.is_none()
            && self.account_health.is_none()
    }

    /// All four dimension predicates ANDed; unset dimensions pass everything.
    pub fn matches(&self, request: &ServiceRequest) -> bool {
        self.vertical.map_or(true, |v| request.vertical == v)
            && self.status.map_or(true, |s| request.status == s)
            && self.issue_category.map_or(true, |c| request.issue_category == c)
            && self.account_health.map_or(true, |h| request.account_health == h)
    }
}

/// One chart-segment selection: the dimension clicked and its value.
/// `None` clears that dimension only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSelection {
    Vertical(Option<Vertical>),
    Status(Option<RequestStatus>),
    IssueCategory(Option<IssueCategory>),
    AccountHealth(Option<AccountHealth>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRangePreset {
    Last7,
    Last30,
    Last90,
    Ytd,
    Custom,
    All,
}

/// A date window over `request_date`. Named presets freeze concrete bounds at
/// selection time; `All` disables date filtering entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub preset: DateRangePreset,
}

impl Default for DateRange {
    fn default() -> Self {
        Self::all()
    }
}

impl DateRange {
    pub fn all() -> Self {
        Self {
            start: None,
            end: None,
            preset: DateRangePreset::All,
        }
    }

    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            preset: DateRangePreset::Custom,
        }
    }

    /// Resolve a preset against `today`. Bounds are frozen until the preset is
    /// re-selected or changed. `Custom` resolves unbounded; callers supply
    /// bounds through [`DateRange::custom`].
    pub fn from_preset(preset: DateRangePreset, today: NaiveDate) -> Self {
        let window = |days: i64| Self {
            start: Some(today - Duration::days(days)),
            end: Some(today),
            preset,
        };

        match preset {
            DateRangePreset::Last7 => window(7),
            DateRangePreset::Last30 => window(30),
            DateRangePreset::Last90 => window(90),
            DateRangePreset::Ytd => Self {
                start: Some(today.with_ordinal(1).unwrap_or(today)),
                end: Some(today),
                preset,
            },
            DateRangePreset::Custom => Self {
                start: None,
                end: None,
                preset,
            },
            DateRangePreset::All => Self::all(),
        }
    }

    /// Date-only containment; open bounds pass everything.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if self.preset == DateRangePreset::All {
            return true;
        }
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}

/// A named snapshot of chart filters + date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPreset {
    pub id: String,
    pub name: String,
    pub filters: ChartFilters,
    pub date_range: DateRange,
}

/// Single source of truth for the dashboard's shared filter state. Preset
/// mutations persist immediately; persistence failures are logged, never
/// surfaced.
pub struct FilterStore {
    filters: ChartFilters,
    date_range: DateRange,
    presets: Vec<FilterPreset>,
    storage: LocalStore,
}

impl FilterStore {
    pub fn new(storage: LocalStore) -> Self {
        let presets = storage.get(FILTER_PRESETS_KEY).unwrap_or_default();
        Self {
            filters: ChartFilters::default(),
            date_range: DateRange::all(),
            presets,
            storage,
        }
    }

    pub fn filters(&self) -> &ChartFilters {
        &self.filters
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn presets(&self) -> &[FilterPreset] {
        &self.presets
    }

    /// Set exactly one dimension, leaving the others untouched
    pub fn set_chart_filter(&mut self, selection: ChartSelection) {
        match selection {
            ChartSelection::Vertical(v) => self.filters.vertical = v,
            ChartSelection::Status(s) => self.filters.status = s,
            ChartSelection::IssueCategory(c) => self.filters.issue_category = c,
            ChartSelection::AccountHealth(h) => self.filters.account_health = h,
        }
    }

    pub fn clear_chart_filters(&mut self) {
        self.filters = ChartFilters::default();
    }

    pub fn has_active_chart_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
    }

    /// Resolve a named preset against today's local date and apply it
    pub fn select_preset(&mut self, preset: DateRangePreset) {
        let today = chrono::Local::now().date_naive();
        self.set_date_range(DateRange::from_preset(preset, today));
    }

    /// Snapshot the current filters + date range under `name`. Rejected (no
    /// mutation, returns `None`) when nothing is active to save.
    pub fn save_preset(&mut self, name: &str) -> Option<String> {
        if self.filters.is_empty() && self.date_range.preset == DateRangePreset::All {
            return None;
        }

        let id = Uuid::new_v4().to_string();
        self.presets.push(FilterPreset {
            id: id.clone(),
            name: name.to_string(),
            filters: self.filters.clone(),
            date_range: self.date_range,
        });
        self.persist_presets();
        Some(id)
    }

    /// Atomically restore filters + date range from a saved preset.
    /// Unknown ids are a silent no-op.
    pub fn load_preset(&mut self, id: &str) {
        if let Some(preset) = self.presets.iter().find(|p| p.id == id) {
            self.filters = preset.filters.clone();
            self.date_range = preset.date_range;
        }
    }

    /// Remove a saved preset. Unknown ids are a silent no-op.
    pub fn delete_preset(&mut self, id: &str) {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != id);
        if self.presets.len() != before {
            self.persist_presets();
        }
    }

    fn persist_presets(&self) {
        if let Err(e) = self.storage.set(FILTER_PRESETS_KEY, &self.presets) {
            tracing::warn!("failed to persist filter presets: {}", e);
        }
    }
}
