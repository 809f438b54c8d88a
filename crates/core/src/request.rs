use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single customer-service request. Immutable once loaded; the collection
/// is static for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub request_id: String,
    pub account_name: String,
    pub vertical: Vertical,
    pub site_count: u32,
    pub issue_category: IssueCategory,
    pub request_date: NaiveDate,
    pub status: RequestStatus,
    pub urgency: UrgencyLevel,
    pub priority: UrgencyLevel,
    /// Hours from request to first response
    pub time_to_respond: f64,
    /// Hours from request to resolution
    pub time_to_resolution: f64,
    pub resolution_date: NaiveDate,
    pub account_health: AccountHealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertical {
    Restaurant,
    Fuel,
    Grocery,
}

impl Vertical {
    pub const ALL: [Vertical; 3] = [Vertical::Restaurant, Vertical::Fuel, Vertical::Grocery];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vertical::Restaurant => "Restaurant",
            Vertical::Fuel => "Fuel",
            Vertical::Grocery => "Grocery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCategory {
    #[serde(rename = "POS Malfunction")]
    PosMalfunction,
    #[serde(rename = "Payment Processing")]
    PaymentProcessing,
    #[serde(rename = "Inventory Sync")]
    InventorySync,
    #[serde(rename = "Loyalty Program")]
    LoyaltyProgram,
    Reporting,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 5] = [
        IssueCategory::PosMalfunction,
        IssueCategory::PaymentProcessing,
        IssueCategory::InventorySync,
        IssueCategory::LoyaltyProgram,
        IssueCategory::Reporting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::PosMalfunction => "POS Malfunction",
            IssueCategory::PaymentProcessing => "Payment Processing",
            IssueCategory::InventorySync => "Inventory Sync",
            IssueCategory::LoyaltyProgram => "Loyalty Program",
            IssueCategory::Reporting => "Reporting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Resolved,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 2] = [RequestStatus::Resolved, RequestStatus::InProgress];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Resolved => "Resolved",
            RequestStatus::InProgress => "In Progress",
        }
    }
}

/// Shared three-step scale for both `urgency` and `priority`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 3] = [UrgencyLevel::Low, UrgencyLevel::Medium, UrgencyLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "Low",
            UrgencyLevel::Medium => "Medium",
            UrgencyLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountHealth {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl AccountHealth {
    pub const ALL: [AccountHealth; 5] = [
        AccountHealth::Excellent,
        AccountHealth::Good,
        AccountHealth::Fair,
        AccountHealth::Poor,
        AccountHealth::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountHealth::Excellent => "Excellent",
            AccountHealth::Good => "Good",
            AccountHealth::Fair => "Fair",
            AccountHealth::Poor => "Poor",
            AccountHealth::Critical => "Critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names_match_display() {
        let status = serde_json::to_string(&RequestStatus::InProgress).unwrap();
        assert_eq!(status, "\"In Progress\"");

        let category = serde_json::to_string(&IssueCategory::PosMalfunction).unwrap();
        assert_eq!(category, "\"POS Malfunction\"");

        let health: AccountHealth = serde_json::from_str("\"Critical\"").unwrap();
        assert_eq!(health, AccountHealth::Critical);
    }

    #[test]
    fn test_request_round_trip() {
        let request = ServiceRequest {
            request_id: "SR-1001".to_string(),
            account_name: "Harbor Grill".to_string(),
            vertical: Vertical::Restaurant,
            site_count: 4,
            issue_category: IssueCategory::PaymentProcessing,
            request_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: RequestStatus::Resolved,
            urgency: UrgencyLevel::High,
            priority: UrgencyLevel::Medium,
            time_to_respond: 6.0,
            time_to_resolution: 30.0,
            resolution_date: NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(),
            account_health: AccountHealth::Good,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"requestId\":\"SR-1001\""));
        assert!(json.contains("\"requestDate\":\"2024-01-15\""));

        let back: ServiceRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
