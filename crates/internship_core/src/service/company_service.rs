//! Company profile page controller (single-record upsert).

use crate::clock::Clock;
use crate::form::FormSubmission;
use crate::model::company::CompanyProfile;
use crate::repo::record_repo::RecordRepository;
use crate::store::{KeyValueStore, StorageKey, StoreResult};
use crate::view::{CompanyView, COMPANY_PLACEHOLDER};
use log::info;

pub struct CompanyService<'a> {
    repo: RecordRepository<'a, CompanyProfile>,
    clock: &'a dyn Clock,
}

impl<'a> CompanyService<'a> {
    pub fn new(store: &'a dyn KeyValueStore, clock: &'a dyn Clock) -> Self {
        Self {
            repo: RecordRepository::new(store, StorageKey::CompanyProfile),
            clock,
        }
    }

    pub fn profile(&self) -> StoreResult<Option<CompanyProfile>> {
        self.repo.load()
    }

    /// Preview text plus prefill values, or the placeholder.
    pub fn render(&self) -> StoreResult<CompanyView> {
        Ok(match self.repo.load()? {
            Some(profile) => CompanyView {
                preview: profile.preview(),
                form: Some(profile.to_form()),
            },
            None => CompanyView {
                preview: COMPANY_PLACEHOLDER.to_string(),
                form: None,
            },
        })
    }

    /// Overwrites the whole profile with the trimmed form values.
    pub fn save(&self, form: &FormSubmission) -> StoreResult<CompanyProfile> {
        let profile = CompanyProfile::from_form(form, self.clock.timestamp());
        self.repo.save(&profile)?;
        info!("event=company_save module=service status=ok");
        Ok(profile)
    }

    /// Deletes the profile outright; no confirmation is asked.
    pub fn clear(&self) -> StoreResult<()> {
        self.repo.remove()?;
        info!("event=company_clear module=service status=ok");
        Ok(())
    }
}
