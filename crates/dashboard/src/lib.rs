// dashboard crate lib.rs
// Service-request analytics core - filter state, SLA thresholds, aggregation
// engine, export encoders

pub mod engine;
pub mod export;
pub mod filters;
pub mod logging;
pub mod sla;
pub mod storage;

pub use export::{Exporter, EXPORT_COLUMNS};
pub use filters::{
    ChartFilters, ChartSelection, DateRange, DateRangePreset, FilterPreset, FilterStore,
};
pub use sla::{SlaStore, SlaThresholds};
pub use storage::LocalStore;
