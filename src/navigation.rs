//! Tab navigation: one active button and one active content section at a time.
//!
//! [`Navigation`] is the pure state machine; [`NavController`] applies its
//! transitions to whatever [`NavSurface`] renders the tabs.

use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::error::DashboardError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    pub key: String,
    pub section_id: String,
}

impl NavTab {
    pub fn new(key: &str, config: &DashboardConfig) -> Self {
        Self {
            key: key.to_string(),
            section_id: config.section_id(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    tabs: Vec<NavTab>,
    active: Option<usize>,
}

impl Navigation {
    /// `initial` is the tab the markup already shows as active; out-of-range means none.
    pub fn new(tabs: Vec<NavTab>, initial: Option<usize>) -> Self {
        let active = initial.filter(|&i| i < tabs.len());
        Self { tabs, active }
    }

    /// Builds the state from the page's buttons, in document order.
    ///
    /// Each button is `(section attribute, carries the active class)`. A button
    /// without the attribute gets an empty key; the first active button wins.
    pub fn from_buttons<I>(buttons: I, config: &DashboardConfig) -> Self
    where
        I: IntoIterator<Item = (Option<String>, bool)>,
    {
        let mut tabs = Vec::new();
        let mut initial = None;
        for (index, (key, active)) in buttons.into_iter().enumerate() {
            if active && initial.is_none() {
                initial = Some(index);
            }
            tabs.push(NavTab::new(key.as_deref().unwrap_or_default(), config));
        }
        Self::new(tabs, initial)
    }

    pub fn tabs(&self) -> &[NavTab] {
        &self.tabs
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&NavTab> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    /// Makes `index` the active tab. Unknown indices leave the state untouched.
    pub fn select(&mut self, index: usize) -> Option<&NavTab> {
        let tab = self.tabs.get(index)?;
        self.active = Some(index);
        Some(tab)
    }
}

/// The rendered buttons and sections.
pub trait NavSurface {
    fn deactivate_all(&mut self);
    fn activate_button(&mut self, index: usize);
    /// Returns `false` when no section carries `section_id`.
    fn activate_section(&mut self, section_id: &str) -> bool;
}

/// Attaches click handling to the page's tab buttons once, for the page lifetime.
pub trait NavigationBinder {
    /// Returns how many tabs were bound.
    fn bind(&mut self) -> Result<usize, DashboardError>;
}

pub struct NavController<S> {
    nav: Navigation,
    surface: S,
}

impl<S: NavSurface> NavController<S> {
    pub fn new(nav: Navigation, surface: S) -> Self {
        Self { nav, surface }
    }

    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handles a click on tab `index`.
    ///
    /// A tab whose section is missing from the page still gets an active button but
    /// leaves every section hidden; that is logged, not raised.
    pub fn click(&mut self, index: usize) {
        let Some(tab) = self.nav.select(index).cloned() else {
            warn!(index, "click on unknown navigation tab");
            return;
        };

        self.surface.deactivate_all();
        self.surface.activate_button(index);
        if self.surface.activate_section(&tab.section_id) {
            debug!(section = %tab.section_id, "navigation section shown");
        } else {
            warn!(
                key = %tab.key,
                section = %tab.section_id,
                "navigation target has no matching section"
            );
        }
    }
}
