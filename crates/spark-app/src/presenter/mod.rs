//! Screen presenters.
//!
//! One presenter per stateful screen. Each owns a single [`StateHolder`]
//! snapshot, exposes pure input operations and at most one submit or load
//! action. Presenters never navigate: they only flag success in their
//! state, and the shell reacts.
//!
//! # Submit state machine
//!
//! Login, SignUp, ResetPassword and the Logout confirmation share it:
//!
//! ```text
//! Idle --invalid--> Idle(error)
//! Idle --valid----> Submitting --ok----> Success (terminal)
//!                              --error-> Idle(error)
//! ```
//!
//! A submit while Submitting or after Success is ignored without touching
//! state or starting work.
//!
//! [`StateHolder`]: crate::state::StateHolder

mod history;
mod home;
mod live_parking;
mod login;
mod logout;
mod reset_password;
mod sign_up;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;

pub use history::{HistoryPresenter, HistoryState};
pub use home::{HomePresenter, HomeState};
pub use live_parking::{LiveParkingPresenter, LiveParkingState};
pub use login::{LoginMode, LoginPresenter, LoginState};
pub use logout::{LogoutPresenter, LogoutState};
pub use reset_password::{ResetPasswordPresenter, ResetPasswordState};
pub use sign_up::{SignUpPresenter, SignUpState};

/// How a submit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Busy or already done; nothing happened.
    Ignored,
    /// Validation failed; no work was started.
    Rejected(String),
    /// The operation succeeded.
    Succeeded,
    /// The operation failed and the presenter is back to idle.
    Failed(String),
    /// Demo mode skipped validation and the operation.
    Bypassed,
}

impl SubmitOutcome {
    /// Check if the presenter reached its success state.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Bypassed)
    }
}

/// Result of starting a submit.
///
/// Guard, bypass and validation run synchronously. Only when the presenter
/// enters Submitting is there async work to drive.
pub enum Submission {
    /// Settled without async work.
    Done(SubmitOutcome),
    /// Submitting; the future finishes the operation.
    Pending(BoxFuture<'static, SubmitOutcome>),
}

impl Submission {
    /// Drive the submission to its outcome.
    pub async fn run(self) -> SubmitOutcome {
        match self {
            Self::Done(outcome) => outcome,
            Self::Pending(future) => future.await,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(outcome) => f.debug_tuple("Done").field(outcome).finish(),
            Self::Pending(_) => f.write_str("Pending"),
        }
    }
}

/// A load started by [`start_load`](HistoryPresenter::start_load) and friends.
///
/// `None` from those methods means a load is already running.
pub type Load = BoxFuture<'static, ()>;

/// Single-flight flag shared by the clones of one presenter.
#[derive(Debug, Clone, Default)]
pub(crate) struct LoadSlot(Arc<AtomicBool>);

impl LoadSlot {
    /// Take the slot, or `None` while another load holds it.
    pub(crate) fn claim(&self) -> Option<LoadClaim> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LoadClaim(Arc::clone(&self.0)))
    }

    pub(crate) fn is_taken(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Frees the slot when dropped, including when the load is aborted.
pub(crate) struct LoadClaim(Arc<AtomicBool>);

impl Drop for LoadClaim {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One-shot load state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_slot_is_single_flight() {
        let slot = LoadSlot::default();
        let claim = slot.claim();
        assert!(claim.is_some());
        assert!(slot.is_taken());
        assert!(slot.clone().claim().is_none());

        drop(claim);
        assert!(!slot.is_taken());
        assert!(slot.claim().is_some());
    }
}
