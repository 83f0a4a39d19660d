//! Public screen handlers.

use tracing::{debug, warn};

use super::{MessageHandler, submission_task};
use crate::app::{AppState, Screen, Task};
use crate::message::{LandingMessage, LoginMessage, Message, ResetPasswordMessage, SignUpMessage};
use crate::navigation::NavOptions;
use crate::state::Route;

/// Handler for the landing splash.
pub struct LandingHandler;

impl MessageHandler<LandingMessage> for LandingHandler {
    fn handle(&self, state: &mut AppState, msg: LandingMessage) -> Task {
        match msg {
            LandingMessage::ContinueClicked => {
                state.router.navigate(Route::Login, NavOptions::push());
            }
        }
        Task::none()
    }
}

/// Handler for the login form.
pub struct LoginHandler;

impl MessageHandler<LoginMessage> for LoginHandler {
    fn handle(&self, state: &mut AppState, msg: LoginMessage) -> Task {
        let Some(login) = state.find_screen(Screen::as_login).cloned() else {
            warn!("login message without a login screen");
            return Task::none();
        };

        match msg {
            LoginMessage::EmailChanged(value) => login.on_email_changed(&value),
            LoginMessage::PasswordChanged(value) => login.on_password_changed(&value),
            LoginMessage::TogglePasswordVisibility => login.toggle_password_visibility(),
            LoginMessage::RememberMeChanged(value) => login.on_remember_me_changed(value),

            LoginMessage::SubmitClicked => {
                return submission_task(login.submit(), |outcome| {
                    Message::Login(LoginMessage::SubmitFinished(outcome))
                });
            }
            LoginMessage::SignUpClicked => {
                state.router.navigate(Route::SignUp, NavOptions::push());
            }
            LoginMessage::ForgotPasswordClicked => {
                state.router.navigate(Route::EditPass, NavOptions::push());
            }

            LoginMessage::SubmitFinished(outcome) => {
                if outcome.is_success() {
                    state.router.complete_login();
                } else {
                    debug!(?outcome, "login not completed");
                }
            }
        }
        Task::none()
    }
}

/// Handler for the registration form.
pub struct SignUpHandler;

impl MessageHandler<SignUpMessage> for SignUpHandler {
    fn handle(&self, state: &mut AppState, msg: SignUpMessage) -> Task {
        let Some(sign_up) = state.find_screen(Screen::as_sign_up).cloned() else {
            warn!("sign-up message without a sign-up screen");
            return Task::none();
        };

        match msg {
            SignUpMessage::NameChanged(value) => sign_up.on_name(&value),
            SignUpMessage::EmailChanged(value) => sign_up.on_email(&value),
            SignUpMessage::BirthDateChanged(value) => sign_up.on_birth_date(&value),
            SignUpMessage::LicensePlateChanged(value) => sign_up.on_license_plate(&value),
            SignUpMessage::CountryCodeChanged(value) => sign_up.on_country_code(&value),
            SignUpMessage::PhoneChanged(value) => sign_up.on_phone(&value),
            SignUpMessage::PasswordChanged(value) => sign_up.on_password(&value),
            SignUpMessage::ConfirmPasswordChanged(value) => sign_up.on_confirm_password(&value),
            SignUpMessage::TogglePassword => sign_up.toggle_password(),
            SignUpMessage::ToggleConfirmPassword => sign_up.toggle_confirm_password(),

            SignUpMessage::SubmitClicked => {
                return submission_task(sign_up.submit(), |outcome| {
                    Message::SignUp(SignUpMessage::SubmitFinished(outcome))
                });
            }
            SignUpMessage::BackToLoginClicked => {
                let _ = state.router.go_back();
            }

            SignUpMessage::SubmitFinished(outcome) => {
                if outcome.is_success() {
                    state.router.complete_registration();
                }
            }
        }
        Task::none()
    }
}

/// Handler for the password reset form.
pub struct ResetPasswordHandler;

impl MessageHandler<ResetPasswordMessage> for ResetPasswordHandler {
    fn handle(&self, state: &mut AppState, msg: ResetPasswordMessage) -> Task {
        let Some(reset) = state.find_screen(Screen::as_reset_password).cloned() else {
            warn!("reset message without a reset screen");
            return Task::none();
        };

        match msg {
            ResetPasswordMessage::EmailChanged(value) => reset.on_email_changed(&value),
            ResetPasswordMessage::NewPasswordChanged(value) => {
                reset.on_new_password_changed(&value);
            }
            ResetPasswordMessage::ConfirmPasswordChanged(value) => {
                reset.on_confirm_password_changed(&value);
            }

            ResetPasswordMessage::SubmitClicked => {
                return submission_task(reset.submit(), |outcome| {
                    Message::ResetPassword(ResetPasswordMessage::SubmitFinished(outcome))
                });
            }
            ResetPasswordMessage::BackToLoginClicked => {
                let _ = state.router.go_back();
            }

            ResetPasswordMessage::SubmitFinished(outcome) => {
                if outcome.is_success() {
                    let _ = state.router.go_back();
                }
            }
        }
        Task::none()
    }
}
