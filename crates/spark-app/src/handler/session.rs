//! Session-wide handlers: drawer, logout and back.

use tracing::{debug, warn};

use super::{MessageHandler, submission_task};
use crate::app::{AppState, Screen, Task};
use crate::message::{DrawerMessage, LogoutMessage, Message};

/// Handler for the side drawer.
pub struct DrawerHandler;

impl MessageHandler<DrawerMessage> for DrawerHandler {
    fn handle(&self, state: &mut AppState, msg: DrawerMessage) -> Task {
        match msg {
            DrawerMessage::OpenRequested => {
                if state.router.current_route().is_private() {
                    state.drawer.open();
                } else {
                    debug!("drawer unavailable on public routes");
                }
                Task::none()
            }
            DrawerMessage::CloseRequested => {
                state.drawer.close();
                Task::none()
            }
            DrawerMessage::ItemSelected(route) => {
                if !state.router.current_route().is_private() {
                    debug!(route = %route, "drawer item ignored on a public route");
                    return Task::none();
                }
                if !route.is_private() {
                    warn!(route = %route, "drawer item for a public route ignored");
                    return Task::none();
                }
                let drawer = state.drawer.clone();
                Task::perform_detached(
                    async move { drawer.select_and_navigate(route).await },
                    move |outcome| Message::Drawer(DrawerMessage::Navigated { route, outcome }),
                )
            }
            DrawerMessage::Navigated { route, outcome } => {
                debug!(route = %route, ?outcome, "drawer navigation done");
                Task::none()
            }
        }
    }
}

/// Handler for the logout confirmation.
pub struct LogoutHandler;

impl MessageHandler<LogoutMessage> for LogoutHandler {
    fn handle(&self, state: &mut AppState, msg: LogoutMessage) -> Task {
        let Some(logout) = state.find_screen(Screen::as_logout).cloned() else {
            warn!("logout message without a logout screen");
            return Task::none();
        };

        match msg {
            LogoutMessage::CancelClicked => {
                if logout.cancel() {
                    let _ = state.router.go_back();
                }
                Task::none()
            }
            LogoutMessage::ConfirmClicked => submission_task(logout.confirm(), |outcome| {
                Message::Logout(LogoutMessage::ConfirmFinished(outcome))
            }),
            LogoutMessage::ConfirmFinished(outcome) => {
                if outcome.is_success() {
                    state.router.complete_logout();
                }
                Task::none()
            }
        }
    }
}

/// System back: closes an open drawer first, otherwise pops the stack.
pub fn handle_back(state: &mut AppState) -> Task {
    if state.drawer.close() {
        return Task::none();
    }
    let _ = state.router.go_back();
    Task::none()
}
