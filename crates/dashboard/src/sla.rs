// dashboard/sla.rs
// SLA thresholds and breach classification

use serde::{Deserialize, Serialize};

use csa_core::ServiceRequest;

use crate::storage::{LocalStore, SLA_THRESHOLDS_KEY};

/// Configured SLA limits in hours. A record breaches when either duration
/// strictly exceeds its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaThresholds {
    pub response_time_hours: u32,
    pub resolution_time_hours: u32,
}

impl Default for SlaThresholds {
    fn default() -> Self {
        Self {
            response_time_hours: 12,
            resolution_time_hours: 72,
        }
    }
}

impl SlaThresholds {
    pub fn is_breaching_response(&self, request: &ServiceRequest) -> bool {
        request.time_to_respond > f64::from(self.response_time_hours)
    }

    pub fn is_breaching_resolution(&self, request: &ServiceRequest) -> bool {
        request.time_to_resolution > f64::from(self.resolution_time_hours)
    }

    pub fn is_breaching_sla(&self, request: &ServiceRequest) -> bool {
        self.is_breaching_response(request) || self.is_breaching_resolution(request)
    }

    pub fn breach_count(&self, requests: &[&ServiceRequest]) -> usize {
        requests.iter().filter(|r| self.is_breaching_sla(r)).count()
    }
}

/// Persisted threshold state. Loads the stored value on construction, falling
/// back to the {12, 72} defaults on absence or parse failure.
pub struct SlaStore {
    thresholds: SlaThresholds,
    storage: LocalStore,
}

impl SlaStore {
    pub fn new(storage: LocalStore) -> Self {
        let thresholds = storage.get(SLA_THRESHOLDS_KEY).unwrap_or_default();
        Self {
            thresholds,
            storage,
        }
    }

    pub fn thresholds(&self) -> SlaThresholds {
        self.thresholds
    }

    pub fn set_thresholds(&mut self, thresholds: SlaThresholds) {
        self.thresholds = thresholds;
        if let Err(e) = self.storage.set(SLA_THRESHOLDS_KEY, &self.thresholds) {
            tracing::warn!("failed to persist SLA thresholds: {}", e);
        }
    }

    pub fn is_breaching_response(&self, request: &ServiceRequest) -> bool {
        self.thresholds.is_breaching_response(request)
    }

    pub fn is_breaching_resolution(&self, request: &ServiceRequest) -> bool {
        self.thresholds.is_breaching_resolution(request)
    }

    pub fn is_breaching_sla(&self, request: &ServiceRequest) -> bool {
        self.thresholds.is_breaching_sla(request)
    }

    pub fn breach_count(&self, requests: &[&ServiceRequest]) -> usize {
        self.thresholds.breach_count(requests)
    }
}
