//! `login`, `logout` and `show`.

use crate::render;
use anyhow::Result;
use clap::Args;
use dialoguer::Password;
use internship_core::{AppContext, LoginOutcome, Router};
use std::io::Write;

#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Username to log in as
    pub username: String,

    /// Password; prompted for when omitted
    #[arg(short, long)]
    pub password: Option<String>,
}

impl LoginCommand {
    pub fn run(&self, ctx: &AppContext<'_>, out: &mut dyn Write) -> Result<()> {
        let password = match &self.password {
            Some(password) => password.clone(),
            None => Password::new()
                .with_prompt("Password")
                .allow_empty_password(true)
                .interact()?,
        };

        match ctx.session().login(&self.username, &password)? {
            LoginOutcome::Redirect(page) => render::redirect(out, page)?,
            LoginOutcome::Rejected(view) => render::login(out, &view)?,
        }
        Ok(())
    }
}

pub fn logout(ctx: &AppContext<'_>, out: &mut dyn Write) -> Result<()> {
    let page = ctx.session().logout()?;
    render::redirect(out, page)?;
    Ok(())
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Page marker: login, dashboard, progress, assessments, company or feedback
    pub page: String,
}

impl ShowCommand {
    pub fn run(&self, ctx: &AppContext<'_>, out: &mut dyn Write) -> Result<()> {
        let outcome = Router::with_default_pages().load_marker(&self.page, ctx)?;
        render::outcome(out, &outcome)?;
        Ok(())
    }
}
