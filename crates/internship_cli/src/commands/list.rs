//! `progress`, `assessments` and `feedback` list subcommands.

use super::{form_from_fields, parse_field, require_session};
use crate::render;
use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use internship_core::view::TableRecord;
use internship_core::{
    AppContext, Confirm, FormSubmission, ListController, ListRecord, SubmitOutcome,
};
use std::io::Write;

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Debug, Subcommand)]
pub enum ListAction {
    /// Add a new entry at the top of the list
    Add {
        /// Form field as `name=value`; repeat for each field
        #[arg(short = 'f', long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Print every entry, newest first
    List,
    /// Prefill the entry at INDEX, apply field overrides and resubmit it
    Edit {
        index: usize,
        #[arg(short = 'f', long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Delete the entry at INDEX
    Delete { index: usize },
    /// Delete every entry
    Clear {
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },
}

impl ListCommand {
    pub fn run<T: ListRecord + TableRecord>(
        &self,
        ctx: &AppContext<'_>,
        controller: &ListController<'_, T>,
        out: &mut dyn Write,
        confirm: &dyn Confirm,
    ) -> Result<()> {
        if !require_session(ctx, out)? {
            return Ok(());
        }

        match &self.action {
            ListAction::Add { fields } => {
                let form = form_from_fields(T::FIELDS, fields, FormSubmission::new())?;
                let outcome = controller.submit(&form, None)?;
                report_submit(out, outcome)?;
            }
            ListAction::List => {}
            ListAction::Edit { index, fields } => {
                let Some(draft) = controller.begin_edit(*index)? else {
                    bail!("no {} entry at index {index}", T::LABEL);
                };
                let form = form_from_fields(T::FIELDS, fields, draft.form)?;
                let outcome = controller.submit(&form, draft.ticket.as_ref())?;
                if outcome == SubmitOutcome::Rejected && draft.ticket.is_none() {
                    writeln!(out, "warning: the taken-out entry was rejected on resubmit")?;
                }
                report_submit(out, outcome)?;
            }
            ListAction::Delete { index } => {
                if !controller.delete(*index)? {
                    writeln!(out, "No entry at index {index}.")?;
                }
            }
            ListAction::Clear { yes } => {
                let skip = |_: &str| true;
                let confirm: &dyn Confirm = if *yes { &skip } else { confirm };
                if !controller.clear_all(confirm)? {
                    writeln!(out, "Nothing cleared.")?;
                }
            }
        }

        render::table(out, &controller.render()?)?;
        Ok(())
    }
}

fn report_submit(out: &mut dyn Write, outcome: SubmitOutcome) -> std::io::Result<()> {
    match outcome {
        SubmitOutcome::Rejected => {
            writeln!(out, "Submission ignored: required fields missing or invalid.")
        }
        SubmitOutcome::Created => writeln!(out, "Entry added."),
        SubmitOutcome::Replaced { index } => writeln!(out, "Entry {index} updated."),
    }
}
