//! FFI use-case API for the Flutter shell.
//!
//! # Responsibility
//! - Expose page loads and page actions as sync, use-case-level calls.
//! - Carry views to Dart as JSON plus ready-to-inject HTML fragments.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every call opens the configured SQLite file; nothing is cached between
//!   calls except the database path and core config.
//! - List and company actions require a session; without one they answer
//!   with a redirect to the login document.

use internship_core::db::open_db;
use internship_core::view::{RowAction, TableRecord};
use internship_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppContext, CoreConfig, EditMode, EditTicket, FormSubmission, ListController, ListRecord,
    LoginOutcome, Page, PageOutcome, PageView, Router, SqliteStore, StoreError, SubmitOutcome,
    SystemClock,
};
use log::warn;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "internship_eval.sqlite3";
const DB_PATH_ENV: &str = "INTERNSHIP_EVAL_DB";
const EDIT_MODE_ENV: &str = "INTERNSHIP_EVAL_EDIT_MODE";
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password.";

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static CORE_CONFIG: OnceLock<CoreConfig> = OnceLock::new();

/// Expands `$body` once per list page with `$controller` bound to the
/// matching typed controller.
macro_rules! with_list_controller {
    ($ctx:expr, $page:expr, |$controller:ident| $body:expr) => {
        match Page::parse($page) {
            Some(Page::Progress) => {
                let $controller = $ctx.progress();
                $body
            }
            Some(Page::Assessments) => {
                let $controller = $ctx.assessments();
                $body
            }
            Some(Page::Feedback) => {
                let $controller = $ctx.feedback();
                $body
            }
            _ => Err(format!("page `{}` has no list controller", $page.trim())),
        }
    };
}

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// `log_dir` must be absolute; `level` is `trace|debug|info|warn|error`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Pins the database file used by every later call.
///
/// Must run before the first page load to take effect. Returns an empty
/// string on success; repeating the same path is accepted.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_db_path(path: String) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "db_path cannot be empty".to_string();
    }
    let requested = PathBuf::from(trimmed);
    let active = DB_PATH.get_or_init(|| requested.clone());
    if *active == requested {
        String::new()
    } else {
        format!("database already configured at `{}`", active.display())
    }
}

/// Result of a page load, login or logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub ok: bool,
    /// Document to navigate to (`index.html`, `dashboard.html`, ...).
    pub redirect: Option<String>,
    /// `PageView` as JSON, tagged by `page`.
    pub view_json: Option<String>,
    /// Table body rows or the recent-activity list, when the page has one.
    pub html: Option<String>,
    pub message: String,
}

impl PageResponse {
    fn redirect(page: Page) -> Self {
        Self {
            ok: true,
            redirect: Some(page.document().to_string()),
            view_json: None,
            html: None,
            message: String::new(),
        }
    }

    fn rendered(view: &PageView, message: impl Into<String>) -> Result<Self, String> {
        Ok(Self {
            ok: true,
            redirect: None,
            view_json: Some(view_to_json(view)?),
            html: page_html(view),
            message: message.into(),
        })
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            redirect: None,
            view_json: None,
            html: None,
            message: message.into(),
        }
    }
}

/// Result of a list or company action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// `false` with an empty `message` means the submission was silently
    /// ignored; keep the form as the user left it.
    pub ok: bool,
    pub redirect: Option<String>,
    /// Re-rendered view, or the edit draft for `list_begin_edit`.
    pub payload_json: Option<String>,
    pub html: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn login_required() -> Self {
        Self {
            ok: false,
            redirect: Some(Page::Login.document().to_string()),
            payload_json: None,
            html: None,
            message: "login required".to_string(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            redirect: None,
            payload_json: None,
            html: None,
            message: message.into(),
        }
    }
}

/// Loads a page by marker, applying the session guard.
#[flutter_rust_bridge::frb(sync)]
pub fn page_load(marker: String) -> PageResponse {
    let result = with_context(|ctx| {
        let outcome = Router::with_default_pages()
            .load_marker(&marker, ctx)
            .map_err(store_message)?;
        match outcome {
            PageOutcome::Redirect(page) => Ok(PageResponse::redirect(page)),
            PageOutcome::Rendered(view) => PageResponse::rendered(&view, ""),
            PageOutcome::Unrouted => Ok(PageResponse::failure(format!(
                "no page registered for `{}`",
                marker.trim()
            ))),
        }
    });
    result.unwrap_or_else(PageResponse::failure)
}

/// Checks the placeholder credentials and opens a session on match.
#[flutter_rust_bridge::frb(sync)]
pub fn login(username: String, password: String) -> PageResponse {
    let result = with_context(|ctx| {
        match ctx
            .session()
            .login(&username, &password)
            .map_err(store_message)?
        {
            LoginOutcome::Redirect(page) => Ok(PageResponse::redirect(page)),
            LoginOutcome::Rejected(view) => {
                PageResponse::rendered(&PageView::Login(view), INVALID_CREDENTIALS_MESSAGE)
            }
        }
    });
    result.unwrap_or_else(PageResponse::failure)
}

#[flutter_rust_bridge::frb(sync)]
pub fn logout() -> PageResponse {
    with_context(|ctx| ctx.session().logout().map_err(store_message))
        .map(PageResponse::redirect)
        .unwrap_or_else(PageResponse::failure)
}

/// Submits a list form. Pass the ticket from `list_begin_edit` to update in
/// place; pass `None` to add a new entry.
#[flutter_rust_bridge::frb(sync)]
pub fn list_submit(
    page: String,
    fields: HashMap<String, String>,
    edit_ticket: Option<String>,
) -> ActionResponse {
    let form = fields.into_iter().collect::<FormSubmission>();
    with_session(|ctx| {
        with_list_controller!(ctx, &page, |controller| submit_with(
            &controller,
            &form,
            edit_ticket.as_deref()
        ))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn list_delete(page: String, index: u32) -> ActionResponse {
    with_session(|ctx| {
        with_list_controller!(ctx, &page, |controller| {
            let removed = controller
                .delete(index as usize)
                .map_err(store_message)?;
            let message = if removed { "Entry deleted." } else { "" };
            table_response(&controller, removed, message)
        })
    })
}

/// Returns the prefilled draft (`{"form": .., "ticket": ..}`) for a row.
#[flutter_rust_bridge::frb(sync)]
pub fn list_begin_edit(page: String, index: u32) -> ActionResponse {
    with_session(|ctx| {
        with_list_controller!(ctx, &page, |controller| {
            match controller
                .begin_edit(index as usize)
                .map_err(store_message)?
            {
                Some(draft) => Ok(ActionResponse {
                    ok: true,
                    redirect: None,
                    payload_json: Some(
                        serde_json::to_string(&draft).map_err(|err| err.to_string())?,
                    ),
                    html: Some(controller.render().map_err(store_message)?.to_html()),
                    message: String::new(),
                }),
                None => Ok(ActionResponse::failure(format!("no entry at index {index}"))),
            }
        })
    })
}

/// Dispatches a clicked row button by its `data-action` and `data-idx`.
#[flutter_rust_bridge::frb(sync)]
pub fn list_row_action(page: String, action: String, index: u32) -> ActionResponse {
    match RowAction::parse(&action) {
        Some(RowAction::Edit) => list_begin_edit(page, index),
        Some(RowAction::Delete) => list_delete(page, index),
        None => ActionResponse::failure(format!("unknown row action `{}`", action.trim())),
    }
}

/// Clears a list. `confirmed` is the answer the shell got from the user.
#[flutter_rust_bridge::frb(sync)]
pub fn list_clear(page: String, confirmed: bool) -> ActionResponse {
    with_session(|ctx| {
        with_list_controller!(ctx, &page, |controller| {
            let cleared = controller
                .clear_all(&|_: &str| confirmed)
                .map_err(store_message)?;
            table_response(&controller, cleared, "")
        })
    })
}

/// The question the shell should ask before calling `list_clear`.
#[flutter_rust_bridge::frb(sync)]
pub fn list_clear_prompt(page: String) -> Option<String> {
    match Page::parse(&page)? {
        Page::Progress => Some(internship_core::ProgressEntry::CLEAR_PROMPT.to_string()),
        Page::Assessments => Some(internship_core::AssessmentEntry::CLEAR_PROMPT.to_string()),
        Page::Feedback => Some(internship_core::FeedbackEntry::CLEAR_PROMPT.to_string()),
        _ => None,
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn company_save(fields: HashMap<String, String>) -> ActionResponse {
    let form = fields.into_iter().collect::<FormSubmission>();
    with_session(|ctx| {
        let company = ctx.company();
        company.save(&form).map_err(store_message)?;
        company_response(&company.render().map_err(store_message)?, "Company profile saved.")
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn company_clear() -> ActionResponse {
    with_session(|ctx| {
        let company = ctx.company();
        company.clear().map_err(store_message)?;
        company_response(&company.render().map_err(store_message)?, "")
    })
}

fn submit_with<T: ListRecord + TableRecord>(
    controller: &ListController<'_, T>,
    form: &FormSubmission,
    edit_ticket: Option<&str>,
) -> Result<ActionResponse, String> {
    let ticket = match edit_ticket.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => Some(
            serde_json::from_str::<EditTicket<T>>(raw)
                .map_err(|err| format!("invalid edit ticket: {err}"))?,
        ),
        None => None,
    };

    let outcome = controller
        .submit(form, ticket.as_ref())
        .map_err(store_message)?;
    let message = match outcome {
        SubmitOutcome::Rejected => "",
        SubmitOutcome::Created => "Entry added.",
        SubmitOutcome::Replaced { .. } => "Entry updated.",
    };
    table_response(controller, outcome != SubmitOutcome::Rejected, message)
}

fn table_response<T: ListRecord + TableRecord>(
    controller: &ListController<'_, T>,
    ok: bool,
    message: &str,
) -> Result<ActionResponse, String> {
    let table = controller.render().map_err(store_message)?;
    Ok(ActionResponse {
        ok,
        redirect: None,
        payload_json: Some(serde_json::to_string(&table).map_err(|err| err.to_string())?),
        html: Some(table.to_html()),
        message: message.to_string(),
    })
}

fn company_response(
    view: &internship_core::CompanyView,
    message: &str,
) -> Result<ActionResponse, String> {
    Ok(ActionResponse {
        ok: true,
        redirect: None,
        payload_json: Some(serde_json::to_string(view).map_err(|err| err.to_string())?),
        html: None,
        message: message.to_string(),
    })
}

fn view_to_json(view: &PageView) -> Result<String, String> {
    serde_json::to_string(view).map_err(|err| format!("view encoding failed: {err}"))
}

fn page_html(view: &PageView) -> Option<String> {
    match view {
        PageView::Progress(table) | PageView::Assessments(table) | PageView::Feedback(table) => {
            Some(table.to_html())
        }
        PageView::Dashboard(summary) => Some(summary.recent_activity_html()),
        PageView::Login(_) | PageView::Company(_) => None,
    }
}

fn with_session(
    f: impl FnOnce(&AppContext<'_>) -> Result<ActionResponse, String>,
) -> ActionResponse {
    let result = with_context(|ctx| {
        if !ctx.session().has_session().map_err(store_message)? {
            return Ok(ActionResponse::login_required());
        }
        f(ctx)
    });
    result.unwrap_or_else(ActionResponse::failure)
}

fn with_context<R>(f: impl FnOnce(&AppContext<'_>) -> Result<R, String>) -> Result<R, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("database open failed: {err}"))?;
    let store = SqliteStore::new(&conn);
    let clock = SystemClock;
    let ctx = AppContext::new(&store, &clock, resolve_config());
    f(&ctx)
}

fn store_message(err: StoreError) -> String {
    format!("storage failed: {err}")
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn resolve_config() -> CoreConfig {
    *CORE_CONFIG.get_or_init(|| {
        let edit_mode = match std::env::var(EDIT_MODE_ENV) {
            Ok(raw) => raw.parse::<EditMode>().unwrap_or_else(|_| {
                warn!("event=config_load module=ffi status=degraded reason=bad_edit_mode");
                EditMode::default()
            }),
            Err(_) => EditMode::default(),
        };
        CoreConfig::with_edit_mode(edit_mode)
    })
}
