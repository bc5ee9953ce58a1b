use chrono::{TimeZone, Utc};
use internship_core::{
    AppContext, CoreConfig, FixedClock, KeyValueStore, LoginOutcome, LoginView, MemoryStore,
    Page, PageOutcome, PageView, Router, StorageKey, DEMO_PASSWORD, DEMO_USERNAME,
};

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap())
}

#[test]
fn protected_pages_redirect_to_login_without_session() {
    let store = MemoryStore::new();
    let clock = clock();
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());
    let router = Router::with_default_pages();

    for page in Page::ALL.into_iter().filter(|page| page.is_protected()) {
        assert_eq!(
            router.load(page, &ctx).unwrap(),
            PageOutcome::Redirect(Page::Login),
            "{page}"
        );
    }
    assert_eq!(
        router.load_marker("settings", &ctx).unwrap(),
        PageOutcome::Redirect(Page::Login)
    );
}

#[test]
fn login_page_renders_form_without_session() {
    let store = MemoryStore::new();
    let clock = clock();
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());

    let outcome = Router::with_default_pages()
        .load(Page::Login, &ctx)
        .unwrap();
    assert_eq!(
        outcome,
        PageOutcome::Rendered(PageView::Login(LoginView {
            error_visible: false
        }))
    );
}

#[test]
fn valid_credentials_create_session_and_redirect_to_dashboard() {
    let store = MemoryStore::new();
    let clock = clock();
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());

    let outcome = ctx.session().login(DEMO_USERNAME, DEMO_PASSWORD).unwrap();
    assert_eq!(outcome, LoginOutcome::Redirect(Page::Dashboard));

    let raw = store.get(StorageKey::SessionUser.as_str()).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["username"], "intern");
    assert_eq!(stored["loginAt"], "2026-10-19T08:30:00.000Z");

    let router = Router::with_default_pages();
    assert!(matches!(
        router.load(Page::Progress, &ctx).unwrap(),
        PageOutcome::Rendered(PageView::Progress(_))
    ));
    assert_eq!(
        router.load(Page::Login, &ctx).unwrap(),
        PageOutcome::Redirect(Page::Dashboard)
    );
}

#[test]
fn wrong_credentials_show_error_and_leave_session_absent() {
    let store = MemoryStore::new();
    let clock = clock();
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());

    for (username, password) in [("intern", "wrong"), ("admin", "evaluate123"), ("", "")] {
        let outcome = ctx.session().login(username, password).unwrap();
        assert_eq!(
            outcome,
            LoginOutcome::Rejected(LoginView {
                error_visible: true
            })
        );
    }
    assert!(!ctx.session().has_session().unwrap());
    assert!(store.is_empty());
}

#[test]
fn logout_clears_session_and_redirects_to_login() {
    let store = MemoryStore::new();
    let clock = clock();
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());
    ctx.session().login(DEMO_USERNAME, DEMO_PASSWORD).unwrap();

    assert_eq!(ctx.session().logout().unwrap(), Page::Login);
    assert!(!ctx.session().has_session().unwrap());
    assert_eq!(
        Router::with_default_pages()
            .load(Page::Dashboard, &ctx)
            .unwrap(),
        PageOutcome::Redirect(Page::Login)
    );
}

#[test]
fn corrupt_session_value_counts_as_logged_out() {
    let store = MemoryStore::new();
    store
        .set(StorageKey::SessionUser.as_str(), "{not json")
        .unwrap();
    let clock = clock();
    let ctx = AppContext::new(&store, &clock, CoreConfig::default());

    assert!(!ctx.session().has_session().unwrap());
    assert_eq!(
        Router::with_default_pages()
            .load(Page::Feedback, &ctx)
            .unwrap(),
        PageOutcome::Redirect(Page::Login)
    );
}
