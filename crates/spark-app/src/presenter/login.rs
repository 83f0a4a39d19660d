//! Login presenter.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use super::{SubmitOutcome, Submission};
use crate::service::{AuthRepository, ServiceError};
use crate::settings::Settings;
use crate::state::StateHolder;
use crate::validation::{first_error, validate_email, validate_password};

const LOGIN_FAILED_MESSAGE: &str = "Login gagal. Coba lagi.";

/// Login form snapshot.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
    pub remember_me: bool,
    pub loading: bool,
    pub error_message: Option<String>,
    pub is_logged_in: bool,
    /// Both fields currently pass validation.
    pub can_submit: bool,
}

impl fmt::Debug for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginState")
            .field("email", &self.email)
            .field("password_visible", &self.password_visible)
            .field("remember_me", &self.remember_me)
            .field("loading", &self.loading)
            .field("error_message", &self.error_message)
            .field("is_logged_in", &self.is_logged_in)
            .field("can_submit", &self.can_submit)
            .finish_non_exhaustive()
    }
}

/// Which path submit takes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoginMode {
    /// Validate, then call the auth collaborator.
    #[default]
    Validated,
    /// Skip validation and the call; succeed at once.
    DemoDirect,
}

impl LoginMode {
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.general.demo_direct_login {
            Self::DemoDirect
        } else {
            Self::Validated
        }
    }
}

#[derive(Clone)]
pub struct LoginPresenter {
    state: StateHolder<LoginState>,
    auth: Arc<dyn AuthRepository>,
    mode: LoginMode,
}

impl LoginPresenter {
    pub fn new(auth: Arc<dyn AuthRepository>, mode: LoginMode) -> Self {
        Self {
            state: StateHolder::new(LoginState::default()),
            auth,
            mode,
        }
    }

    pub fn state(&self) -> LoginState {
        self.state.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<LoginState> {
        self.state.subscribe()
    }

    pub fn mode(&self) -> LoginMode {
        self.mode
    }

    // =========================================================================
    // INPUTS
    // =========================================================================

    pub fn on_email_changed(&self, value: &str) {
        let email = value.trim().to_string();
        self.state.update(|state| LoginState {
            can_submit: can_submit(&email, &state.password),
            email,
            error_message: None,
            ..state.clone()
        });
    }

    pub fn on_password_changed(&self, value: &str) {
        self.state.update(|state| LoginState {
            can_submit: can_submit(&state.email, value),
            password: value.to_string(),
            error_message: None,
            ..state.clone()
        });
    }

    pub fn toggle_password_visibility(&self) {
        self.state.update(|state| LoginState {
            password_visible: !state.password_visible,
            ..state.clone()
        });
    }

    pub fn on_remember_me_changed(&self, value: bool) {
        self.state.update(|state| LoginState {
            remember_me: value,
            ..state.clone()
        });
    }

    // =========================================================================
    // SUBMIT
    // =========================================================================

    /// Start signing in.
    pub fn submit(&self) -> Submission {
        let snapshot = self.state.get();
        if snapshot.loading || snapshot.is_logged_in {
            debug!("login submit ignored");
            return Submission::Done(SubmitOutcome::Ignored);
        }

        if self.mode == LoginMode::DemoDirect {
            info!("demo mode, login bypassed");
            self.state.update(|state| LoginState {
                is_logged_in: true,
                error_message: None,
                ..state.clone()
            });
            return Submission::Done(SubmitOutcome::Bypassed);
        }

        let email = snapshot.email.trim().to_string();
        let password = snapshot.password;
        if let Some(message) = first_error([
            validate_email(&email).with_message("Email tidak valid."),
            validate_password(&password).with_message("Password minimal 6 karakter."),
        ]) {
            self.state.update(|state| LoginState {
                error_message: Some(message.clone()),
                ..state.clone()
            });
            return Submission::Done(SubmitOutcome::Rejected(message));
        }

        let started = self.state.update_if(
            |state| !state.loading && !state.is_logged_in,
            |state| LoginState {
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
            presenter.finish(&email, &password).await
        }))
    }

    async fn finish(&self, email: &str, password: &str) -> SubmitOutcome {
        match self.auth.login(email, password).await {
            Ok(user) => {
                info!(email = %user.email, "logged in");
                self.state.update(|state| LoginState {
                    loading: false,
                    is_logged_in: true,
                    ..state.clone()
                });
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                let message = failure_message(&err);
                debug!(%err, "login failed");
                self.state.update(|state| LoginState {
                    loading: false,
                    error_message: Some(message.clone()),
                    ..state.clone()
                });
                SubmitOutcome::Failed(message)
            }
        }
    }
}

fn can_submit(email: &str, password: &str) -> bool {
    validate_email(email).is_valid() && validate_password(password).is_valid()
}

fn failure_message(err: &ServiceError) -> String {
    let message = err.user_message();
    if message.trim().is_empty() {
        LOGIN_FAILED_MESSAGE.to_string()
    } else {
        message
    }
}
