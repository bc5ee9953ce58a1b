//! Subcommands of `internship-eval`.
//!
//! Each command runs against an `AppContext` and writes to an injected
//! writer; `open_context` wires the SQLite file for the real binary.

mod company;
mod list;
mod session;

pub use company::{CompanyAction, CompanyCommand};
pub use list::{ListAction, ListCommand};
pub use session::{logout, LoginCommand, ShowCommand};

use anyhow::{bail, Context, Result};
use internship_core::db::open_db;
use internship_core::{AppContext, CoreConfig, FormSubmission, SqliteStore, SystemClock};
use std::io::Write;
use std::path::Path;

/// Opens the database at `db_path` and runs `f` against a fresh context.
pub fn open_context<R>(
    db_path: &Path,
    config: CoreConfig,
    f: impl FnOnce(&AppContext<'_>) -> Result<R>,
) -> Result<R> {
    let conn = open_db(db_path)
        .with_context(|| format!("failed to open database `{}`", db_path.display()))?;
    let store = SqliteStore::new(&conn);
    let clock = SystemClock;
    let ctx = AppContext::new(&store, &clock, config);
    f(&ctx)
}

/// Parses a `name=value` pair given through `--field`.
pub fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected `name=value`, got `{raw}`")),
    }
}

/// Builds a form from `--field` pairs, rejecting names the page never reads.
fn form_from_fields(
    known: &[&str],
    fields: &[(String, String)],
    base: FormSubmission,
) -> Result<FormSubmission> {
    let mut form = base;
    for (name, value) in fields {
        if !known.contains(&name.as_str()) {
            bail!("unknown field `{name}`; expected one of {}", known.join(", "));
        }
        form.set(name.as_str(), value.as_str());
    }
    Ok(form)
}

/// Returns `false` (after printing the login redirect) when nobody is logged in.
fn require_session(ctx: &AppContext<'_>, out: &mut dyn Write) -> Result<bool> {
    if ctx.session().has_session()? {
        return Ok(true);
    }
    crate::render::redirect(out, internship_core::Page::Login)?;
    Ok(false)
}
