// core/dataset.rs
// Record collection loading and the embedded seed dataset

use std::collections::HashSet;

use crate::error::DatasetError;
use crate::request::ServiceRequest;

const SEED_JSON: &str = include_str!("seed_requests.json");

/// Parse a JSON record collection and validate it.
///
/// Rejects unparseable documents and duplicate `request_id`s. Field-level
/// shape (enum membership, date format) is enforced by deserialization.
pub fn load_dataset(json: &str) -> Result<Vec<ServiceRequest>, DatasetError> {
    let records: Vec<ServiceRequest> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.request_id.as_str()) {
            return Err(DatasetError::DuplicateRequestId(record.request_id.clone()));
        }
    }

    Ok(records)
}

/// The embedded demo collection shipped with the dashboard.
pub fn seed_requests() -> Vec<ServiceRequest> {
    load_dataset(SEED_JSON).expect("embedded seed dataset is valid")
}
