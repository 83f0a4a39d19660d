//! Logout confirmation presenter.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::{SubmitOutcome, Submission};
use crate::service::Delay;
use crate::state::StateHolder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutState {
    /// The confirmation dialog is up.
    pub show_dialog: bool,
    pub loading: bool,
    pub logged_out: bool,
    pub error: Option<String>,
}

impl Default for LogoutState {
    fn default() -> Self {
        Self {
            show_dialog: true,
            loading: false,
            logged_out: false,
            error: None,
        }
    }
}

#[derive(Clone)]
pub struct LogoutPresenter {
    state: StateHolder<LogoutState>,
    delay: Arc<dyn Delay>,
    duration: Duration,
}

impl LogoutPresenter {
    pub fn new(delay: Arc<dyn Delay>, duration: Duration) -> Self {
        Self {
            state: StateHolder::new(LogoutState::default()),
            delay,
            duration,
        }
    }

    pub fn state(&self) -> LogoutState {
        self.state.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<LogoutState> {
        self.state.subscribe()
    }

    /// Dismiss the dialog without logging out.
    ///
    /// Returns `false` while a logout is in flight.
    pub fn cancel(&self) -> bool {
        self.state.update_if(
            |state| !state.loading && !state.logged_out,
            |state| LogoutState {
                show_dialog: false,
                ..state.clone()
            },
        )
    }

    /// Confirm the logout.
    pub fn confirm(&self) -> Submission {
        let started = self.state.update_if(
            |state| !state.loading && !state.logged_out,
            |state| LogoutState {
                loading: true,
                error: None,
                ..state.clone()
            },
        );
        if !started {
            debug!("logout confirm ignored");
            return Submission::Done(SubmitOutcome::Ignored);
        }

        let presenter = self.clone();
        Submission::Pending(Box::pin(async move {
            presenter.delay.sleep(presenter.duration).await;
            info!("session closed");
            presenter.state.update(|state| LogoutState {
                show_dialog: false,
                loading: false,
                logged_out: true,
                ..state.clone()
            });
            SubmitOutcome::Succeeded
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{InstantDelay, TokioDelay};

    #[test]
    fn dialog_starts_visible() {
        let logout = LogoutPresenter::new(Arc::new(InstantDelay), Duration::ZERO);
        assert!(logout.state().show_dialog);
        assert!(logout.cancel());
        assert!(!logout.state().show_dialog);
    }

    #[tokio::test(start_paused = true)]
    async fn confirm_is_guarded_while_in_flight() {
        let logout = LogoutPresenter::new(Arc::new(TokioDelay), Duration::from_millis(600));

        let first = logout.confirm();
        assert!(first.is_pending());
        let busy = logout.state();

        assert!(!logout.confirm().is_pending());
        assert!(!logout.cancel());
        assert_eq!(logout.state(), busy);

        assert_eq!(first.run().await, SubmitOutcome::Succeeded);
        let state = logout.state();
        assert!(state.logged_out);
        assert!(!state.show_dialog);
    }
}
