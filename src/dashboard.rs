//! Page-load orchestration: session guard, data load, static content, navigation.

use tracing::{error, info};

use crate::api::{load_dashboard_data, HttpClient};
use crate::config::{DashboardConfig, FailurePolicy};
use crate::error::DashboardError;
use crate::model::DashboardData;
use crate::navigation::NavigationBinder;
use crate::render::{render_accounts, render_features, render_summary, CardContainer, TextSlot};
use crate::session::{ensure_session, Redirector, SessionGate, TokenStore};

/// Blocking user-facing message (a browser `alert`).
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Handles to the page regions the dashboard writes into.
pub struct DashboardUi {
    pub accounts_grid: Box<dyn CardContainer>,
    pub features_grid: Box<dyn CardContainer>,
    pub total_balance: Box<dyn TextSlot>,
    pub credit_score: Box<dyn TextSlot>,
    pub navigation: Box<dyn NavigationBinder>,
}

/// Browser services the load sequence talks to.
pub struct Services<'a> {
    pub tokens: &'a dyn TokenStore,
    pub redirector: &'a dyn Redirector,
    pub http: &'a dyn HttpClient,
    pub notifier: &'a dyn Notifier,
}

#[derive(Debug)]
pub enum LoadOutcome {
    /// No session; the page is navigating to the login entry point.
    Redirected,
    Loaded,
    /// The data load failed and the user has been alerted.
    Failed(DashboardError),
}

pub struct Dashboard<'a> {
    config: DashboardConfig,
    services: Services<'a>,
}

impl<'a> Dashboard<'a> {
    pub fn new(config: DashboardConfig, services: Services<'a>) -> Self {
        Self { config, services }
    }

    /// Runs the page-load sequence once.
    ///
    /// `resolve_ui` is only called after a session has been found, so a page
    /// with missing markup still redirects an anonymous visitor to login.
    pub async fn load<F>(&self, resolve_ui: F) -> LoadOutcome
    where
        F: FnOnce(&DashboardConfig) -> Result<DashboardUi, DashboardError>,
    {
        let token = match ensure_session(
            self.services.tokens,
            self.services.redirector,
            &self.config,
        ) {
            SessionGate::Authenticated(token) => token,
            SessionGate::Redirected => return LoadOutcome::Redirected,
        };

        let mut ui = match resolve_ui(&self.config) {
            Ok(ui) => ui,
            Err(err) => {
                error!(error = %err, "dashboard markup is incomplete");
                return LoadOutcome::Failed(err);
            }
        };

        let failure = match load_dashboard_data(self.services.http, &self.config, &token).await {
            Ok(data) => {
                self.render_data(&mut ui, &data);
                None
            }
            Err(err) => {
                error!(error = %err, detail = ?err, "dashboard data load failed");
                self.services.notifier.alert(&self.config.failure_message);
                if self.config.failure_policy == FailurePolicy::Halt {
                    return LoadOutcome::Failed(err);
                }
                Some(err)
            }
        };

        render_features(ui.features_grid.as_mut());
        bind_navigation(&mut ui);

        match failure {
            Some(err) => LoadOutcome::Failed(err),
            None => LoadOutcome::Loaded,
        }
    }

    fn render_data(&self, ui: &mut DashboardUi, data: &DashboardData) {
        let currency = &self.config.currency_symbol;
        render_summary(
            ui.total_balance.as_mut(),
            ui.credit_score.as_mut(),
            &data.profile,
            currency,
        );
        render_accounts(ui.accounts_grid.as_mut(), &data.accounts, currency);
    }
}

fn bind_navigation(ui: &mut DashboardUi) {
    match ui.navigation.bind() {
        Ok(tabs) => info!(tabs, "navigation bound"),
        Err(err) => error!(error = %err, "failed to bind navigation"),
    }
}
