use chrono::{TimeZone, Utc};
use internship_core::routes::PageInitializer;
use internship_core::{
    AppContext, CoreConfig, FixedClock, LoginView, MemoryStore, Page, PageOutcome,
    PageRegistry, PageView, Router, DEMO_PASSWORD, DEMO_USERNAME,
};

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap())
}

#[test]
fn logged_in_unknown_marker_is_unrouted() {
    let store = MemoryStore::new();
    let clock = clock();
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());
    ctx.session().login(DEMO_USERNAME, DEMO_PASSWORD).unwrap();

    assert_eq!(
        Router::with_default_pages()
            .load_marker("reports", &ctx)
            .unwrap(),
        PageOutcome::Unrouted
    );
}

#[test]
fn default_router_renders_every_page_once_logged_in() {
    let store = MemoryStore::new();
    let clock = clock();
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());
    ctx.session().login(DEMO_USERNAME, DEMO_PASSWORD).unwrap();
    let router = Router::with_default_pages();

    for page in Page::ALL.into_iter().filter(|page| page.is_protected()) {
        let outcome = router.load(page, &ctx).unwrap();
        let rendered_page = match outcome {
            PageOutcome::Rendered(PageView::Dashboard(_)) => Page::Dashboard,
            PageOutcome::Rendered(PageView::Progress(_)) => Page::Progress,
            PageOutcome::Rendered(PageView::Assessments(_)) => Page::Assessments,
            PageOutcome::Rendered(PageView::Company(_)) => Page::Company,
            PageOutcome::Rendered(PageView::Feedback(_)) => Page::Feedback,
            other => panic!("unexpected outcome for {page}: {other:?}"),
        };
        assert_eq!(rendered_page, page);
    }
}

#[test]
fn custom_registry_only_dispatches_registered_pages() {
    let store = MemoryStore::new();
    let clock = clock();
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());

    let login: PageInitializer = |_ctx| {
        Ok(PageOutcome::Rendered(PageView::Login(LoginView {
            error_visible: false,
        })))
    };
    let mut registry = PageRegistry::new();
    registry.register(Page::Login, login);
    let router = Router::new(registry);

    assert!(matches!(
        router.load(Page::Login, &ctx).unwrap(),
        PageOutcome::Rendered(PageView::Login(_))
    ));

    ctx.session().login(DEMO_USERNAME, DEMO_PASSWORD).unwrap();
    assert_eq!(
        router.load(Page::Progress, &ctx).unwrap(),
        PageOutcome::Unrouted
    );
}

#[test]
fn page_views_serialize_with_page_tag() {
    let view = PageView::Login(LoginView {
        error_visible: true,
    });
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"page": "login", "view": {"error_visible": true}})
    );
}
