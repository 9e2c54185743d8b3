//! The three user-visible flows: refresh, sign up, unregister.
//!
//! Each flow talks to an [`ActivitiesApi`] and reports what happened as
//! [`BoardAction`]s; it never touches the page directly.

use std::cell::Cell;

use crate::api::ActivitiesApi;
use crate::config::{SIGNUP_FAILED_TEXT, SIGNUP_FALLBACK_TEXT};
use crate::error::BoardError;
use crate::state::{BoardAction, StatusKind};
use crate::view::UnregisterIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Hands out increasing tokens; only the newest one may update the view.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

impl RequestSequencer {
    pub fn issue(&self) -> RequestToken {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestToken(next)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest.get()
    }
}

pub struct Board<A> {
    api: A,
    sequencer: RequestSequencer,
}

impl<A: ActivitiesApi> Board<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            sequencer: RequestSequencer::default(),
        }
    }

    pub async fn load_and_render(&self, dispatch: &impl Fn(BoardAction)) {
        let token = self.sequencer.issue();
        let result = self.api.fetch_catalog().await;
        if !self.sequencer.is_current(token) {
            log::debug!("dropping stale catalog response {token:?}");
            return;
        }
        match result {
            Ok(catalog) => {
                if catalog.is_empty() {
                    log::warn!("server returned no activities");
                } else {
                    log::debug!("loaded {} activities", catalog.len());
                }
                dispatch(BoardAction::CatalogLoaded(catalog));
            }
            Err(e) => {
                log::error!("Error fetching activities: {e}");
                dispatch(BoardAction::CatalogFailed);
            }
        }
    }

    pub async fn sign_up(&self, activity: &str, email: &str, dispatch: &impl Fn(BoardAction)) {
        match self.api.sign_up(activity, email).await {
            Ok(reply) => {
                log::info!("signed up {email} for {activity}");
                dispatch(BoardAction::ShowStatus(
                    StatusKind::Success,
                    reply.message.unwrap_or_default(),
                ));
                dispatch(BoardAction::ResetForm);
                self.load_and_render(dispatch).await;
            }
            Err(BoardError::Status { status, detail }) => {
                log::warn!("signup for {activity} rejected with HTTP {status}");
                let text = detail.unwrap_or_else(|| SIGNUP_FALLBACK_TEXT.to_string());
                dispatch(BoardAction::ShowStatus(StatusKind::Error, text));
            }
            Err(e) => {
                log::error!("Error signing up: {e}");
                dispatch(BoardAction::ShowStatus(
                    StatusKind::Error,
                    SIGNUP_FAILED_TEXT.to_string(),
                ));
            }
        }
    }

    /// Returns whether the participant was removed. Failures are only logged.
    pub async fn unregister(
        &self,
        intent: &UnregisterIntent,
        dispatch: &impl Fn(BoardAction),
    ) -> bool {
        match self.api.unregister(&intent.activity, &intent.email).await {
            Ok(()) => {
                log::info!("unregistered {} from {}", intent.email, intent.activity);
                self.load_and_render(dispatch).await;
                true
            }
            Err(e) => {
                log::error!("Error unregistering participant: {e}");
                false
            }
        }
    }
}
