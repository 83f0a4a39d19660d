//! Registration presenter.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use super::{SubmitOutcome, Submission};
use crate::service::{AuthRepository, RegisterRequest};
use crate::state::StateHolder;
use crate::validation::{
    first_error, validate_birth_date, validate_confirmation, validate_email, validate_name,
    validate_password, validate_phone, validate_plate,
};

pub const DEFAULT_COUNTRY_CODE: &str = "+62";

/// Registration form snapshot.
#[derive(Clone, PartialEq, Eq)]
pub struct SignUpState {
    pub name: String,
    pub email: String,
    /// ISO date, optional.
    pub birth_date: String,
    /// Always uppercased.
    pub license_plate: String,
    pub country_code: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub registered: bool,
    pub can_submit: bool,
}

impl Default for SignUpState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            birth_date: String::new(),
            license_plate: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            phone_number: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            show_password: false,
            show_confirm_password: false,
            loading: false,
            error: None,
            registered: false,
            can_submit: false,
        }
    }
}

impl SignUpState {
    /// Country code followed by the digits of the phone number.
    pub fn phone_e164(&self) -> String {
        let digits: String = self
            .phone_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        format!("{}{digits}", self.country_code.trim())
    }

    /// First failing check, in form order.
    fn first_error(&self) -> Option<String> {
        first_error([
            validate_name(&self.name),
            validate_email(&self.email),
            validate_plate(&self.license_plate),
            validate_phone(&self.phone_e164()),
            validate_birth_date(&self.birth_date),
            validate_password(&self.password),
            validate_confirmation(&self.password, &self.confirm_password),
        ])
    }

    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.clone(),
            birth_date: self.birth_date.trim().to_string(),
            phone_e164: self.phone_e164(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for SignUpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpState")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("birth_date", &self.birth_date)
            .field("license_plate", &self.license_plate)
            .field("phone", &self.phone_e164())
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("registered", &self.registered)
            .field("can_submit", &self.can_submit)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct SignUpPresenter {
    state: StateHolder<SignUpState>,
    auth: Arc<dyn AuthRepository>,
}

impl SignUpPresenter {
    pub fn new(auth: Arc<dyn AuthRepository>) -> Self {
        Self {
            state: StateHolder::new(SignUpState::default()),
            auth,
        }
    }

    pub fn state(&self) -> SignUpState {
        self.state.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<SignUpState> {
        self.state.subscribe()
    }

    // =========================================================================
    // INPUTS
    // =========================================================================

    pub fn on_name(&self, value: &str) {
        self.edit(|state| state.name = value.to_string());
    }

    pub fn on_email(&self, value: &str) {
        self.edit(|state| state.email = value.trim().to_string());
    }

    pub fn on_birth_date(&self, value: &str) {
        self.edit(|state| state.birth_date = value.to_string());
    }

    pub fn on_license_plate(&self, value: &str) {
        self.edit(|state| state.license_plate = value.to_uppercase());
    }

    pub fn on_country_code(&self, value: &str) {
        self.edit(|state| state.country_code = value.to_string());
    }

    pub fn on_phone(&self, value: &str) {
        self.edit(|state| state.phone_number = value.to_string());
    }

    pub fn on_password(&self, value: &str) {
        self.edit(|state| state.password = value.to_string());
    }

    pub fn on_confirm_password(&self, value: &str) {
        self.edit(|state| state.confirm_password = value.to_string());
    }

    pub fn toggle_password(&self) {
        self.state.update(|state| SignUpState {
            show_password: !state.show_password,
            ..state.clone()
        });
    }

    pub fn toggle_confirm_password(&self) {
        self.state.update(|state| SignUpState {
            show_confirm_password: !state.show_confirm_password,
            ..state.clone()
        });
    }

    /// Apply a field edit, clear the error and recompute `can_submit`.
    fn edit(&self, apply: impl FnOnce(&mut SignUpState)) {
        self.state.update(|state| {
            let mut next = state.clone();
            apply(&mut next);
            next.error = None;
            next.can_submit = next.first_error().is_none();
            next
        });
    }

    // =========================================================================
    // SUBMIT
    // =========================================================================

    /// Start registering.
    pub fn submit(&self) -> Submission {
        let snapshot = self.state.get();
        if snapshot.loading || snapshot.registered {
            debug!("registration submit ignored");
            return Submission::Done(SubmitOutcome::Ignored);
        }

        if let Some(message) = snapshot.first_error() {
            self.state.update(|state| SignUpState {
                error: Some(message.clone()),
                ..state.clone()
            });
            return Submission::Done(SubmitOutcome::Rejected(message));
        }

        let started = self.state.update_if(
            |state| !state.loading && !state.registered,
            |state| SignUpState {
                loading: true,
                error: None,
                ..state.clone()
            },
        );
        if !started {
            return Submission::Done(SubmitOutcome::Ignored);
        }

        let request = snapshot.to_request();
        let presenter = self.clone();
        Submission::Pending(Box::pin(async move { presenter.finish(request).await }))
    }

    async fn finish(&self, request: RegisterRequest) -> SubmitOutcome {
        match self.auth.register(request).await {
            Ok(user) => {
                info!(email = %user.email, "registered");
                self.state.update(|state| SignUpState {
                    loading: false,
                    registered: true,
                    ..state.clone()
                });
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                let message = err.user_message();
                debug!(%err, "registration failed");
                self.state.update(|state| SignUpState {
                    loading: false,
                    error: Some(message.clone()),
                    ..state.clone()
                });
                SubmitOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{FakeAuthRepository, InstantDelay};
    use std::time::Duration;

    fn presenter() -> SignUpPresenter {
        let auth = FakeAuthRepository::new(Arc::new(InstantDelay), Duration::ZERO, Duration::ZERO);
        SignUpPresenter::new(Arc::new(auth))
    }

    fn fill(sign_up: &SignUpPresenter) {
        sign_up.on_name("Barbara Neanake");
        sign_up.on_email("barbara@ugm.ac.id");
        sign_up.on_license_plate("ab 1234 cd");
        sign_up.on_phone("0812-3456-789");
        sign_up.on_birth_date("2005-04-23");
        sign_up.on_password("rahasia");
        sign_up.on_confirm_password("rahasia");
    }

    #[test]
    fn phone_is_country_code_plus_digits() {
        let sign_up = presenter();
        sign_up.on_phone("0812-3456 789");
        assert_eq!(sign_up.state().phone_e164(), "+6208123456789");
    }

    #[test]
    fn plate_is_uppercased_on_input() {
        let sign_up = presenter();
        sign_up.on_license_plate("ab 1234 cd");
        assert_eq!(sign_up.state().license_plate, "AB 1234 CD");
    }

    #[test]
    fn complete_form_can_submit() {
        let sign_up = presenter();
        fill(&sign_up);
        assert!(sign_up.state().can_submit);
    }

    #[test]
    fn errors_follow_form_order() {
        let sign_up = presenter();
        let submission = sign_up.submit();
        assert!(!submission.is_pending());
        assert_eq!(sign_up.state().error.as_deref(), Some("Nama wajib diisi"));

        fill(&sign_up);
        sign_up.on_license_plate("AB");
        sign_up.submit();
        assert_eq!(
            sign_up.state().error.as_deref(),
            Some("Plat mobil tidak valid")
        );

        fill(&sign_up);
        sign_up.on_country_code("62");
        sign_up.submit();
        assert_eq!(
            sign_up.state().error.as_deref(),
            Some("Kode negara wajib, contoh +62")
        );
    }

    #[tokio::test]
    async fn registers_and_stays_registered() {
        let sign_up = presenter();
        fill(&sign_up);

        assert_eq!(sign_up.submit().run().await, SubmitOutcome::Succeeded);
        let state = sign_up.state();
        assert!(state.registered);
        assert!(!state.loading);
        assert_eq!(sign_up.submit().run().await, SubmitOutcome::Ignored);
    }
}
