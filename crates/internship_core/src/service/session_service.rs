//! Login gate and session marker handling.
//!
//! # Invariants
//! - A session exists iff a decodable `SessionUser` is stored.
//! - The credential pair below is a presentation-layer placeholder, not a
//!   security boundary: no hashing, no expiry, one user.

use crate::clock::Clock;
use crate::model::session::SessionUser;
use crate::repo::record_repo::RecordRepository;
use crate::routes::Page;
use crate::store::{KeyValueStore, StorageKey, StoreResult};
use crate::view::LoginView;
use log::info;

/// Placeholder username accepted by the login form.
pub const DEMO_USERNAME: &str = "intern";
/// Placeholder password accepted by the login form.
pub const DEMO_PASSWORD: &str = "evaluate123";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Redirect(Page),
    Rejected(LoginView),
}

pub struct SessionService<'a> {
    repo: RecordRepository<'a, SessionUser>,
    clock: &'a dyn Clock,
}

impl<'a> SessionService<'a> {
    pub fn new(store: &'a dyn KeyValueStore, clock: &'a dyn Clock) -> Self {
        Self {
            repo: RecordRepository::new(store, StorageKey::SessionUser),
            clock,
        }
    }

    pub fn current_user(&self) -> StoreResult<Option<SessionUser>> {
        self.repo.load()
    }

    pub fn has_session(&self) -> StoreResult<bool> {
        Ok(self.current_user()?.is_some())
    }

    /// Checks the submitted pair and opens a session on match.
    ///
    /// The username is trimmed; the password is compared as typed.
    pub fn login(&self, username: &str, password: &str) -> StoreResult<LoginOutcome> {
        let username = username.trim();
        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            info!("event=login module=session status=rejected");
            return Ok(LoginOutcome::Rejected(LoginView {
                error_visible: true,
            }));
        }

        let user = SessionUser::new(username, self.clock.timestamp());
        self.repo.save(&user)?;
        info!("event=login module=session status=ok");
        Ok(LoginOutcome::Redirect(Page::Dashboard))
    }

    /// Clears the session; the caller follows the returned redirect.
    pub fn logout(&self) -> StoreResult<Page> {
        self.repo.remove()?;
        info!("event=logout module=session status=ok");
        Ok(Page::Login)
    }

    /// Redirect target for a page load, if the guard intercepts it.
    ///
    /// Protected pages without a session go to login; the login page with a
    /// session goes to the dashboard.
    pub fn guard(&self, page: Option<Page>) -> StoreResult<Option<Page>> {
        let has_session = self.has_session()?;
        Ok(match page {
            Some(Page::Login) if has_session => Some(Page::Dashboard),
            Some(Page::Login) => None,
            _ if !has_session => Some(Page::Login),
            _ => None,
        })
    }
}
