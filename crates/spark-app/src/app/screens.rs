//! Mounted screens, one per back-stack entry.

use tokio::task::AbortHandle;
use tracing::{debug, info};

use super::Task;
use crate::message::{HistoryMessage, HomeMessage, LiveParkingMessage, Message};
use crate::presenter::{
    HistoryPresenter, HomePresenter, LiveParkingPresenter, LoginMode, LoginPresenter,
    LogoutPresenter, ResetPasswordPresenter, SignUpPresenter,
};
use crate::service::Services;
use crate::settings::Settings;
use crate::state::Route;

/// A screen and its presenter.
#[derive(Clone)]
pub enum Screen {
    Landing,
    Login(LoginPresenter),
    SignUp(SignUpPresenter),
    ResetPassword(ResetPasswordPresenter),
    Home(HomePresenter),
    LiveParking(LiveParkingPresenter),
    History(HistoryPresenter),
    Information,
    Logout(LogoutPresenter),
}

impl Screen {
    /// Create the screen for `route` plus its initial load, if any.
    pub fn mount(route: Route, services: &Services, settings: &Settings) -> (Self, Task) {
        let timing = &settings.timing;
        match route {
            Route::Landing => (Self::Landing, Task::none()),
            Route::Login => (
                Self::Login(LoginPresenter::new(
                    services.auth.clone(),
                    LoginMode::from_settings(settings),
                )),
                Task::none(),
            ),
            Route::SignUp => (
                Self::SignUp(SignUpPresenter::new(services.auth.clone())),
                Task::none(),
            ),
            Route::EditPass => (
                Self::ResetPassword(ResetPasswordPresenter::new(
                    services.delay.clone(),
                    timing.reset_password(),
                )),
                Task::none(),
            ),
            Route::Home => {
                let home = HomePresenter::new(services.parking.clone(), &settings.profile.name);
                let task = Self::home_load(&home);
                (Self::Home(home), task)
            }
            Route::LiveParking => {
                let live = LiveParkingPresenter::new(services.parking.clone());
                let task = Self::live_parking_load(&live);
                (Self::LiveParking(live), task)
            }
            Route::History => {
                let history =
                    HistoryPresenter::new(services.parking.clone(), &settings.profile.name);
                let task = Self::history_load(&history);
                (Self::History(history), task)
            }
            Route::Information => (Self::Information, Task::none()),
            Route::Logout => (
                Self::Logout(LogoutPresenter::new(
                    services.delay.clone(),
                    timing.logout(),
                )),
                Task::none(),
            ),
        }
    }

    pub(crate) fn home_load(home: &HomePresenter) -> Task {
        match home.start_load() {
            Some(load) => Task::perform(load, |()| Message::Home(HomeMessage::Loaded)),
            None => {
                debug!("home fetch already running");
                Task::none()
            }
        }
    }

    pub(crate) fn live_parking_load(live: &LiveParkingPresenter) -> Task {
        match live.start_reload() {
            Some(load) => Task::perform(load, |()| {
                Message::LiveParking(LiveParkingMessage::Loaded)
            }),
            None => {
                debug!("live parking fetch already running");
                Task::none()
            }
        }
    }

    pub(crate) fn history_load(history: &HistoryPresenter) -> Task {
        match history.start_load() {
            Some(load) => Task::perform(load, |()| Message::History(HistoryMessage::Loaded)),
            None => {
                debug!("history fetch already running");
                Task::none()
            }
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Self::Landing => Route::Landing,
            Self::Login(_) => Route::Login,
            Self::SignUp(_) => Route::SignUp,
            Self::ResetPassword(_) => Route::EditPass,
            Self::Home(_) => Route::Home,
            Self::LiveParking(_) => Route::LiveParking,
            Self::History(_) => Route::History,
            Self::Information => Route::Information,
            Self::Logout(_) => Route::Logout,
        }
    }

    pub fn as_login(&self) -> Option<&LoginPresenter> {
        match self {
            Self::Login(presenter) => Some(presenter),
            _ => None,
        }
    }

    pub fn as_sign_up(&self) -> Option<&SignUpPresenter> {
        match self {
            Self::SignUp(presenter) => Some(presenter),
            _ => None,
        }
    }

    pub fn as_reset_password(&self) -> Option<&ResetPasswordPresenter> {
        match self {
            Self::ResetPassword(presenter) => Some(presenter),
            _ => None,
        }
    }

    pub fn as_home(&self) -> Option<&HomePresenter> {
        match self {
            Self::Home(presenter) => Some(presenter),
            _ => None,
        }
    }

    pub fn as_live_parking(&self) -> Option<&LiveParkingPresenter> {
        match self {
            Self::LiveParking(presenter) => Some(presenter),
            _ => None,
        }
    }

    pub fn as_history(&self) -> Option<&HistoryPresenter> {
        match self {
            Self::History(presenter) => Some(presenter),
            _ => None,
        }
    }

    pub fn as_logout(&self) -> Option<&LogoutPresenter> {
        match self {
            Self::Logout(presenter) => Some(presenter),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Screen({})", self.route())
    }
}

/// A screen bound to a back-stack entry.
///
/// Dropping it aborts every task the screen started.
pub(crate) struct MountedScreen {
    pub(crate) entry_id: u64,
    pub(crate) screen: Screen,
    tasks: Vec<AbortHandle>,
}

impl MountedScreen {
    pub(crate) fn new(entry_id: u64, screen: Screen) -> Self {
        info!(route = %screen.route(), entry = entry_id, "screen mounted");
        Self {
            entry_id,
            screen,
            tasks: Vec::new(),
        }
    }

    pub(crate) fn attach(&mut self, handle: AbortHandle) {
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(handle);
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }
}

impl Drop for MountedScreen {
    fn drop(&mut self) {
        let in_flight = self.in_flight();
        for task in &self.tasks {
            task.abort();
        }
        debug!(
            route = %self.screen.route(),
            entry = self.entry_id,
            aborted = in_flight,
            "screen unmounted"
        );
    }
}
