//! Messages of the public (pre-auth) screens.

use crate::presenter::SubmitOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingMessage {
    /// User tapped through the splash
    ContinueClicked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMessage {
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    RememberMeChanged(bool),

    /// User pressed "Login"
    SubmitClicked,
    /// "Sign up" link
    SignUpClicked,
    /// "Forgot password" link
    ForgotPasswordClicked,

    /// Sign-in finished
    SubmitFinished(SubmitOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpMessage {
    NameChanged(String),
    EmailChanged(String),
    BirthDateChanged(String),
    LicensePlateChanged(String),
    CountryCodeChanged(String),
    PhoneChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    TogglePassword,
    ToggleConfirmPassword,

    /// User pressed "Sign Up"
    SubmitClicked,
    /// "Back to login" link
    BackToLoginClicked,

    /// Registration finished
    SubmitFinished(SubmitOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetPasswordMessage {
    EmailChanged(String),
    NewPasswordChanged(String),
    ConfirmPasswordChanged(String),

    /// User pressed "Reset"
    SubmitClicked,
    /// "Back to login" link
    BackToLoginClicked,

    /// Reset finished
    SubmitFinished(SubmitOutcome),
}
