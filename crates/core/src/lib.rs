pub mod dataset;
pub mod error;
pub mod request;

pub use dataset::{load_dataset, seed_requests};
pub use error::DatasetError;
pub use request::{
    AccountHealth, IssueCategory, RequestStatus, ServiceRequest, UrgencyLevel, Vertical,
};
