//! Dashboard configuration.
//!
//! Every field has a default matching the stock markup and backend, so an empty
//! JSON object (or no config at all) yields a working dashboard.

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// What the orchestrator does after a failed data load has been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop: features are not rendered and navigation is not bound.
    #[default]
    Halt,
    /// Still render features and bind navigation, leaving the account grid empty.
    KeepStatic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub token_key: String,
    pub login_url: String,
    pub api_base: String,
    pub accounts_path: String,
    pub profile_path: String,

    pub accounts_grid_id: String,
    pub features_grid_id: String,
    pub total_balance_id: String,
    pub credit_score_id: String,

    pub nav_button_selector: String,
    pub section_selector: String,
    pub section_attribute: String,
    pub section_suffix: String,
    pub active_class: String,

    pub currency_symbol: String,
    pub failure_message: String,
    pub failure_policy: FailurePolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            token_key: "token".to_string(),
            login_url: "login.html".to_string(),
            api_base: "/api/v1".to_string(),
            accounts_path: "/accounts".to_string(),
            profile_path: "/auth/me".to_string(),

            accounts_grid_id: "accountsGrid".to_string(),
            features_grid_id: "featuresGrid".to_string(),
            total_balance_id: "totalBalance".to_string(),
            credit_score_id: "creditScore".to_string(),

            nav_button_selector: ".nav-btn".to_string(),
            section_selector: ".content-section".to_string(),
            section_attribute: "data-section".to_string(),
            section_suffix: "-section".to_string(),
            active_class: "active".to_string(),

            currency_symbol: "$".to_string(),
            failure_message: "Failed to load data. Please try again later.".to_string(),
            failure_policy: FailurePolicy::Halt,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, DashboardError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn accounts_url(&self) -> String {
        join_url(&self.api_base, &self.accounts_path)
    }

    pub fn profile_url(&self) -> String {
        join_url(&self.api_base, &self.profile_path)
    }

    /// Element id of the content section a nav button points at.
    pub fn section_id(&self, key: &str) -> String {
        format!("{key}{}", self.section_suffix)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
