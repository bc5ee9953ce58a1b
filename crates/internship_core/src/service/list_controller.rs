//! Generic list page controller shared by progress, assessments and feedback.
//!
//! # Responsibility
//! - Create, render, delete, edit and clear records of one `ListRecord` type.
//!
//! # Invariants
//! - New records are prepended; index 0 is always the newest insertion.
//! - Indices address the snapshot read at call time and nothing else.
//! - Every mutation writes the entire list back.
//! - Out-of-range indices are no-ops.

use crate::clock::Clock;
use crate::config::{CoreConfig, EditMode};
use crate::form::FormSubmission;
use crate::model::ListRecord;
use crate::repo::list_repo::EntryListRepository;
use crate::store::{KeyValueStore, StoreResult};
use crate::view::{TableRecord, TableView};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Interactive yes/no question asked before destructive bulk operations.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was written.
    Rejected,
    /// A new record now sits at index 0.
    Created,
    /// The edited record was replaced where it stood.
    Replaced { index: usize },
}

/// Where an in-place edit came from.
///
/// `original` lets a later submission find the record again even when the
/// list shifted since the edit began.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditTicket<T> {
    pub index: usize,
    pub original: T,
}

/// Prefilled form handed back by `begin_edit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditDraft<T> {
    pub form: FormSubmission,
    /// Present in `EditMode::InPlace`; pass it back to `submit`.
    pub ticket: Option<EditTicket<T>>,
}

pub struct ListController<'a, T> {
    repo: EntryListRepository<'a, T>,
    clock: &'a dyn Clock,
    edit_mode: EditMode,
}

impl<'a, T: ListRecord + TableRecord> ListController<'a, T> {
    pub fn new(store: &'a dyn KeyValueStore, clock: &'a dyn Clock, config: CoreConfig) -> Self {
        Self {
            repo: EntryListRepository::new(store),
            clock,
            edit_mode: config.edit_mode,
        }
    }

    pub fn entries(&self) -> StoreResult<Vec<T>> {
        self.repo.load()
    }

    pub fn render(&self) -> StoreResult<TableView> {
        Ok(TableView::from_records(&self.repo.load()?))
    }

    /// Handles a form submission.
    ///
    /// With a ticket whose record is still present, that record is replaced
    /// in place and keeps its `createdAt`. A ticket whose edit is already in
    /// the list (a repeated submission) is rejected. Otherwise a new record
    /// is prepended.
    pub fn submit(
        &self,
        form: &FormSubmission,
        ticket: Option<&EditTicket<T>>,
    ) -> StoreResult<SubmitOutcome> {
        let mut list = self.repo.load()?;
        let target = ticket.and_then(|ticket| locate(&list, ticket));
        if let (Some(ticket), None) = (ticket, target) {
            if already_applied(&list, form, ticket) {
                debug!(
                    "event=list_submit module=service status=rejected entity={} reason={}",
                    T::LABEL,
                    "ticket_already_applied"
                );
                return Ok(SubmitOutcome::Rejected);
            }
        }

        let created_at = match target {
            Some(index) => list[index].created_at().to_string(),
            None => self.clock.timestamp(),
        };
        let Some(record) = T::from_form(form, created_at) else {
            debug!(
                "event=list_submit module=service status=rejected key={}",
                T::KEY
            );
            return Ok(SubmitOutcome::Rejected);
        };

        let outcome = match target {
            Some(index) => {
                list[index] = record;
                SubmitOutcome::Replaced { index }
            }
            None => {
                list.insert(0, record);
                SubmitOutcome::Created
            }
        };
        self.repo.save(&list)?;
        info!(
            "event=list_submit module=service status=ok entity={} outcome={:?} len={}",
            T::LABEL,
            outcome,
            list.len()
        );
        Ok(outcome)
    }

    /// Removes the record at `index`. Returns whether anything was removed.
    pub fn delete(&self, index: usize) -> StoreResult<bool> {
        let mut list = self.repo.load()?;
        if index >= list.len() {
            debug!(
                "event=list_delete module=service status=skipped entity={} index={}",
                T::LABEL,
                index
            );
            return Ok(false);
        }

        list.remove(index);
        self.repo.save(&list)?;
        info!(
            "event=list_delete module=service status=ok entity={} index={} len={}",
            T::LABEL,
            index,
            list.len()
        );
        Ok(true)
    }

    /// Prefills the form from the record at `index`.
    ///
    /// In `EditMode::TakeOut` the record is removed and persisted right away,
    /// so abandoning the draft loses it. In `EditMode::InPlace` nothing is
    /// written and the draft carries a ticket for `submit`.
    pub fn begin_edit(&self, index: usize) -> StoreResult<Option<EditDraft<T>>> {
        let mut list = self.repo.load()?;
        if index >= list.len() {
            return Ok(None);
        }

        let form = list[index].to_form();
        let ticket = match self.edit_mode {
            EditMode::InPlace => Some(EditTicket {
                index,
                original: list[index].clone(),
            }),
            EditMode::TakeOut => {
                list.remove(index);
                self.repo.save(&list)?;
                None
            }
        };
        info!(
            "event=list_edit module=service status=ok entity={} index={} mode={}",
            T::LABEL,
            index,
            self.edit_mode
        );
        Ok(Some(EditDraft { form, ticket }))
    }

    /// Empties the list after confirmation. Returns whether it was cleared.
    pub fn clear_all(&self, confirm: &dyn Confirm) -> StoreResult<bool> {
        if !confirm.confirm(T::CLEAR_PROMPT) {
            debug!(
                "event=list_clear module=service status=declined entity={}",
                T::LABEL
            );
            return Ok(false);
        }

        self.repo.clear()?;
        info!("event=list_clear module=service status=ok entity={}", T::LABEL);
        Ok(true)
    }
}

fn locate<T: PartialEq>(list: &[T], ticket: &EditTicket<T>) -> Option<usize> {
    if list.get(ticket.index) == Some(&ticket.original) {
        return Some(ticket.index);
    }
    list.iter().position(|record| record == &ticket.original)
}

/// True when `form` applied to `ticket` yields a record already in `list`.
fn already_applied<T: ListRecord>(
    list: &[T],
    form: &FormSubmission,
    ticket: &EditTicket<T>,
) -> bool {
    T::from_form(form, ticket.original.created_at().to_string())
        .is_some_and(|record| list.contains(&record))
}
