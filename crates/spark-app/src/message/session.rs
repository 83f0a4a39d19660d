//! Session-wide messages: drawer and logout.

use crate::navigation::NavigateOutcome;
use crate::presenter::SubmitOutcome;
use crate::state::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerMessage {
    /// Menu button
    OpenRequested,
    /// Scrim tap or swipe
    CloseRequested,
    /// Drawer entry tapped
    ItemSelected(Route),
    /// Close-then-navigate finished
    Navigated {
        route: Route,
        outcome: NavigateOutcome,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutMessage {
    /// "Batal"
    CancelClicked,
    /// "Ya"
    ConfirmClicked,
    /// Logout finished
    ConfirmFinished(SubmitOutcome),
}
