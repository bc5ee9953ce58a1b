//! Core logic for the internship evaluation tracker.
//! This crate is the single source of truth for every page behavior; UI
//! shells only feed it form submissions and row actions.

pub mod clock;
pub mod config;
pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod routes;
pub mod service;
pub mod store;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CoreConfig, EditMode};
pub use form::FormSubmission;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assessment::AssessmentEntry;
pub use model::company::CompanyProfile;
pub use model::feedback::FeedbackEntry;
pub use model::progress::{ProgressEntry, ProgressStatus};
pub use model::session::SessionUser;
pub use model::ListRecord;
pub use routes::{AppContext, Page, PageOutcome, PageRegistry, Router};
pub use service::company_service::CompanyService;
pub use service::dashboard_service::DashboardService;
pub use service::list_controller::{Confirm, EditDraft, EditTicket, ListController, SubmitOutcome};
pub use service::session_service::{LoginOutcome, SessionService, DEMO_PASSWORD, DEMO_USERNAME};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StorageKey, StoreError, StoreResult};
pub use view::{CompanyView, DashboardView, LoginView, PageView, TableView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
