//! Page identity, registration and guarded dispatch.
//!
//! # Responsibility
//! - Map page markers to controller initializers.
//! - Apply the session guard before any initializer runs.
//!
//! # Invariants
//! - Every page except login is guarded, including unknown markers.
//! - Initializers only read; mutations go through the controllers directly.

use crate::clock::Clock;
use crate::config::CoreConfig;
use crate::model::assessment::AssessmentEntry;
use crate::model::feedback::FeedbackEntry;
use crate::model::progress::ProgressEntry;
use crate::service::company_service::CompanyService;
use crate::service::dashboard_service::DashboardService;
use crate::service::list_controller::ListController;
use crate::service::session_service::SessionService;
use crate::store::{KeyValueStore, StoreResult};
use crate::view::{LoginView, PageView};
use log::debug;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Dashboard,
    Progress,
    Assessments,
    Company,
    Feedback,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Self::Login,
        Self::Dashboard,
        Self::Progress,
        Self::Assessments,
        Self::Company,
        Self::Feedback,
    ];

    /// Per-page marker consumed at load time.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::Progress => "progress",
            Self::Assessments => "assessments",
            Self::Company => "company",
            Self::Feedback => "feedback",
        }
    }

    /// Document a redirect to this page navigates to.
    pub fn document(self) -> &'static str {
        match self {
            Self::Login => "index.html",
            Self::Dashboard => "dashboard.html",
            Self::Progress => "progress.html",
            Self::Assessments => "assessments.html",
            Self::Company => "company.html",
            Self::Feedback => "feedback.html",
        }
    }

    pub fn parse(marker: &str) -> Option<Self> {
        let marker = marker.trim();
        Self::ALL.into_iter().find(|page| page.marker() == marker)
    }

    pub fn is_protected(self) -> bool {
        self != Self::Login
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

/// Everything a controller needs, injected by the bootstrap.
#[derive(Clone, Copy)]
pub struct AppContext<'a> {
    pub store: &'a dyn KeyValueStore,
    pub clock: &'a dyn Clock,
    pub config: CoreConfig,
}

impl<'a> AppContext<'a> {
    pub fn new(store: &'a dyn KeyValueStore, clock: &'a dyn Clock, config: CoreConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    pub fn session(&self) -> SessionService<'a> {
        SessionService::new(self.store, self.clock)
    }

    pub fn progress(&self) -> ListController<'a, ProgressEntry> {
        ListController::new(self.store, self.clock, self.config)
    }

    pub fn assessments(&self) -> ListController<'a, AssessmentEntry> {
        ListController::new(self.store, self.clock, self.config)
    }

    pub fn feedback(&self) -> ListController<'a, FeedbackEntry> {
        ListController::new(self.store, self.clock, self.config)
    }

    pub fn company(&self) -> CompanyService<'a> {
        CompanyService::new(self.store, self.clock)
    }

    pub fn dashboard(&self) -> DashboardService<'a> {
        DashboardService::new(self.store)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Redirect(Page),
    Rendered(PageView),
    /// The marker passed the guard but no initializer is registered.
    Unrouted,
}

pub type PageInitializer = fn(&AppContext<'_>) -> StoreResult<PageOutcome>;

#[derive(Default)]
pub struct PageRegistry {
    initializers: HashMap<Page, PageInitializer>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the initializer for `page`.
    pub fn register(&mut self, page: Page, initializer: PageInitializer) -> &mut Self {
        self.initializers.insert(page, initializer);
        self
    }

    pub fn get(&self, page: Page) -> Option<PageInitializer> {
        self.initializers.get(&page).copied()
    }
}

pub struct Router {
    registry: PageRegistry,
}

impl Router {
    pub fn new(registry: PageRegistry) -> Self {
        Self { registry }
    }

    /// Router with all six tracker pages registered.
    pub fn with_default_pages() -> Self {
        let mut registry = PageRegistry::new();
        registry
            .register(Page::Login, init_login)
            .register(Page::Dashboard, init_dashboard)
            .register(Page::Progress, init_progress)
            .register(Page::Assessments, init_assessments)
            .register(Page::Company, init_company)
            .register(Page::Feedback, init_feedback);
        Self::new(registry)
    }

    pub fn load(&self, page: Page, ctx: &AppContext<'_>) -> StoreResult<PageOutcome> {
        self.load_marker(page.marker(), ctx)
    }

    /// Guards then dispatches a page load by marker.
    pub fn load_marker(&self, marker: &str, ctx: &AppContext<'_>) -> StoreResult<PageOutcome> {
        let page = Page::parse(marker);
        if let Some(target) = ctx.session().guard(page)? {
            debug!("event=page_load module=routes status=redirect target={target}");
            return Ok(PageOutcome::Redirect(target));
        }

        match page.and_then(|page| self.registry.get(page)) {
            Some(initializer) => initializer(ctx),
            None => Ok(PageOutcome::Unrouted),
        }
    }
}

fn init_login(_ctx: &AppContext<'_>) -> StoreResult<PageOutcome> {
    Ok(PageOutcome::Rendered(PageView::Login(LoginView::default())))
}

fn init_dashboard(ctx: &AppContext<'_>) -> StoreResult<PageOutcome> {
    let view = ctx.dashboard().summary()?;
    Ok(PageOutcome::Rendered(PageView::Dashboard(view)))
}

fn init_progress(ctx: &AppContext<'_>) -> StoreResult<PageOutcome> {
    let view = ctx.progress().render()?;
    Ok(PageOutcome::Rendered(PageView::Progress(view)))
}

fn init_assessments(ctx: &AppContext<'_>) -> StoreResult<PageOutcome> {
    let view = ctx.assessments().render()?;
    Ok(PageOutcome::Rendered(PageView::Assessments(view)))
}

fn init_company(ctx: &AppContext<'_>) -> StoreResult<PageOutcome> {
    let view = ctx.company().render()?;
    Ok(PageOutcome::Rendered(PageView::Company(view)))
}

fn init_feedback(ctx: &AppContext<'_>) -> StoreResult<PageOutcome> {
    let view = ctx.feedback().render()?;
    Ok(PageOutcome::Rendered(PageView::Feedback(view)))
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn markers_round_trip_and_only_login_is_public() {
        for page in Page::ALL {
            assert_eq!(Page::parse(page.marker()), Some(page));
            assert_eq!(page.is_protected(), page != Page::Login);
        }
        assert_eq!(Page::parse("settings"), None);
        assert_eq!(Page::Login.document(), "index.html");
    }
}
