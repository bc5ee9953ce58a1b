//! `company` subcommands.

use super::{form_from_fields, parse_field, require_session};
use crate::render;
use anyhow::Result;
use clap::{Args, Subcommand};
use internship_core::model::company::COMPANY_FIELDS;
use internship_core::{AppContext, FormSubmission};
use std::io::Write;

#[derive(Debug, Args)]
pub struct CompanyCommand {
    #[command(subcommand)]
    pub action: CompanyAction,
}

#[derive(Debug, Subcommand)]
pub enum CompanyAction {
    /// Print the saved profile
    Show,
    /// Replace the profile; omitted fields are saved empty
    Save {
        /// Form field as `name=value`; repeat for each field
        #[arg(short = 'f', long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Remove the saved profile
    Clear,
}

impl CompanyCommand {
    pub fn run(&self, ctx: &AppContext<'_>, out: &mut dyn Write) -> Result<()> {
        if !require_session(ctx, out)? {
            return Ok(());
        }

        let company = ctx.company();
        match &self.action {
            CompanyAction::Show => {}
            CompanyAction::Save { fields } => {
                let form = form_from_fields(COMPANY_FIELDS, fields, FormSubmission::new())?;
                company.save(&form)?;
                writeln!(out, "Company profile saved.")?;
            }
            CompanyAction::Clear => company.clear()?,
        }

        render::company(out, &company.render()?)?;
        Ok(())
    }
}
