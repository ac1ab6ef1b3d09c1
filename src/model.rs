use serde::{Deserialize, Serialize};

/// Labels shown in the features grid, in display order.
pub const FEATURES: [&str; 7] = [
    "All-In-One Dashboard",
    "Smart Financial Insights",
    "Enhanced Credit Score System",
    "Top-Level Security & Privacy",
    "Instant Alerts & Automation",
    "Rewards & Perks",
    "Simple, Intuitive UI",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub institution: String,
    pub balance: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body of `GET /accounts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountsEnvelope {
    pub data: Vec<Account>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub total_balance: f64,
    /// Kept as a JSON number; rendered the way a browser prints it.
    pub credit_score: serde_json::Number,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub accounts: Vec<Account>,
    pub profile: Profile,
}
