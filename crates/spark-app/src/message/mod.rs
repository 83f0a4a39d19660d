//! Message hierarchy.
//!
//! Every user intent and every finished background task reaches the shell
//! as a [`Message`]. User intents are only applied while their screen is
//! on top of the back-stack; task results reach the screen that started
//! them.

pub mod auth;
pub mod parking;
pub mod session;

pub use auth::{LandingMessage, LoginMessage, ResetPasswordMessage, SignUpMessage};
pub use parking::{HistoryMessage, HomeMessage, LiveParkingMessage};
pub use session::{DrawerMessage, LogoutMessage};

use crate::state::Route;

/// Root message enum for the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // =========================================================================
    // Public screens
    // =========================================================================
    Landing(LandingMessage),
    Login(LoginMessage),
    SignUp(SignUpMessage),
    ResetPassword(ResetPasswordMessage),

    // =========================================================================
    // Private screens
    // =========================================================================
    Home(HomeMessage),
    LiveParking(LiveParkingMessage),
    History(HistoryMessage),
    Logout(LogoutMessage),

    // =========================================================================
    // Session
    // =========================================================================
    /// Side drawer
    Drawer(DrawerMessage),

    /// System back
    Back,

    /// Nothing to do
    Noop,
}

impl Message {
    /// Screen this intent is addressed to.
    ///
    /// `None` for task results and session messages.
    pub fn target(&self) -> Option<Route> {
        let (route, is_result) = match self {
            Self::Landing(_) => (Route::Landing, false),
            Self::Login(msg) => (Route::Login, matches!(msg, LoginMessage::SubmitFinished(_))),
            Self::SignUp(msg) => (Route::SignUp, matches!(msg, SignUpMessage::SubmitFinished(_))),
            Self::ResetPassword(msg) => (
                Route::EditPass,
                matches!(msg, ResetPasswordMessage::SubmitFinished(_)),
            ),
            Self::Home(msg) => (Route::Home, matches!(msg, HomeMessage::Loaded)),
            Self::LiveParking(msg) => (
                Route::LiveParking,
                matches!(msg, LiveParkingMessage::Loaded),
            ),
            Self::History(msg) => (Route::History, matches!(msg, HistoryMessage::Loaded)),
            Self::Logout(msg) => (
                Route::Logout,
                matches!(msg, LogoutMessage::ConfirmFinished(_)),
            ),
            Self::Drawer(_) | Self::Back | Self::Noop => return None,
        };
        (!is_result).then_some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::SubmitOutcome;

    #[test]
    fn intents_target_their_screen() {
        assert_eq!(
            Message::Login(LoginMessage::SubmitClicked).target(),
            Some(Route::Login)
        );
        assert_eq!(
            Message::LiveParking(LiveParkingMessage::RefreshClicked).target(),
            Some(Route::LiveParking)
        );
    }

    #[test]
    fn results_and_session_messages_have_no_target() {
        let finished = Message::Login(LoginMessage::SubmitFinished(SubmitOutcome::Succeeded));
        assert_eq!(finished.target(), None);
        assert_eq!(Message::History(HistoryMessage::Loaded).target(), None);
        assert_eq!(Message::Drawer(DrawerMessage::OpenRequested).target(), None);
        assert_eq!(Message::Back.target(), None);
    }
}
