//! Password reset presenter.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::{SubmitOutcome, Submission};
use crate::service::Delay;
use crate::state::StateHolder;
use crate::validation::{first_error, validate_confirmation, validate_email, validate_password};

#[derive(Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordState {
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
    pub loading: bool,
    pub success: bool,
    pub error_message: Option<String>,
}

impl fmt::Debug for ResetPasswordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordState")
            .field("email", &self.email)
            .field("loading", &self.loading)
            .field("success", &self.success)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

/// Resets a password. There is no collaborator yet, only the simulated
/// round-trip.
#[derive(Clone)]
pub struct ResetPasswordPresenter {
    state: StateHolder<ResetPasswordState>,
    delay: Arc<dyn Delay>,
    duration: Duration,
}

impl ResetPasswordPresenter {
    pub fn new(delay: Arc<dyn Delay>, duration: Duration) -> Self {
        Self {
            state: StateHolder::new(ResetPasswordState::default()),
            delay,
            duration,
        }
    }

    pub fn state(&self) -> ResetPasswordState {
        self.state.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<ResetPasswordState> {
        self.state.subscribe()
    }

    pub fn on_email_changed(&self, value: &str) {
        self.state.update(|state| ResetPasswordState {
            email: value.trim().to_string(),
            error_message: None,
            ..state.clone()
        });
    }

    pub fn on_new_password_changed(&self, value: &str) {
        self.state.update(|state| ResetPasswordState {
            new_password: value.to_string(),
            error_message: None,
            ..state.clone()
        });
    }

    pub fn on_confirm_password_changed(&self, value: &str) {
        self.state.update(|state| ResetPasswordState {
            confirm_password: value.to_string(),
            error_message: None,
            ..state.clone()
        });
    }

    pub fn submit(&self) -> Submission {
        let snapshot = self.state.get();
        if snapshot.loading || snapshot.success {
            debug!("reset submit ignored");
            return Submission::Done(SubmitOutcome::Ignored);
        }

        if let Some(message) = first_error([
            validate_email(&snapshot.email).with_message("Email tidak valid."),
            validate_password(&snapshot.new_password).with_message("Password minimal 6 karakter."),
            validate_confirmation(&snapshot.new_password, &snapshot.confirm_password)
                .with_message("Konfirmasi password tidak sama."),
        ]) {
            self.state.update(|state| ResetPasswordState {
                error_message: Some(message.clone()),
                ..state.clone()
            });
            return Submission::Done(SubmitOutcome::Rejected(message));
        }

        let started = self.state.update_if(
            |state| !state.loading && !state.success,
            |state| ResetPasswordState {
                loading: true,
                error_message: None,
                ..state.clone()
            },
        );
        if !started {
            return Submission::Done(SubmitOutcome::Ignored);
        }

        let presenter = self.clone();
        Submission::Pending(Box::pin(async move {
            presenter.delay.sleep(presenter.duration).await;
            info!("password reset");
            presenter.state.update(|state| ResetPasswordState {
                loading: false,
                success: true,
                ..state.clone()
            });
            SubmitOutcome::Succeeded
        }))
    }
}
