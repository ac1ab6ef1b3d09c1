//! Personal-finance dashboard core.
//!
//! Everything here is host-testable: the browser is reached only through the
//! traits in [`session`], [`api`], [`render`], [`navigation`] and [`dashboard`].
//! `ledgerview_web` provides the `web-sys` implementations.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod model;
pub mod navigation;
pub mod render;
pub mod session;

pub use config::{DashboardConfig, FailurePolicy};
pub use dashboard::{Dashboard, DashboardUi, LoadOutcome, Notifier, Services};
pub use error::{DashboardError, Endpoint};
