//! Snapshots handed to the renderer.

use super::screens::Screen;
use crate::navigation::{DrawerState, DrawerValue};
use crate::presenter::{
    HistoryState, HomeState, LiveParkingState, LoginState, LogoutState, ResetPasswordState,
    SignUpState,
};
use crate::settings::ProfileSettings;
use crate::state::{
    DRAWER_ITEMS, DrawerItem, INFORMATION, InformationContent, LANDING, LandingContent, Route,
};

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    /// Route on top of the back-stack.
    pub route: Route,
    /// Back-stack, bottom first.
    pub back_stack: Vec<Route>,
    /// Present only while a private route is on top.
    pub drawer: Option<DrawerView>,
    pub screen: ScreenSnapshot,
}

/// Drawer as drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerView {
    pub open: bool,
    pub selected: Route,
    pub items: &'static [DrawerItem],
    pub user_name: String,
    pub user_email: String,
}

impl DrawerView {
    pub(crate) fn new(state: DrawerState, profile: &ProfileSettings) -> Self {
        Self {
            open: state.value == DrawerValue::Open,
            selected: state.selected,
            items: &DRAWER_ITEMS,
            user_name: profile.name.clone(),
            user_email: profile.email.clone(),
        }
    }
}

/// State of the screen on top.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenSnapshot {
    Landing(LandingContent),
    Login(LoginState),
    SignUp(SignUpState),
    ResetPassword(ResetPasswordState),
    Home(HomeState),
    LiveParking(LiveParkingState),
    History(HistoryState),
    Information(InformationContent),
    Logout(LogoutState),
    /// The router moved on but the screen is not mounted yet.
    Transitioning(Route),
}

impl ScreenSnapshot {
    pub fn route(&self) -> Route {
        match self {
            Self::Landing(_) => Route::Landing,
            Self::Login(_) => Route::Login,
            Self::SignUp(_) => Route::SignUp,
            Self::ResetPassword(_) => Route::EditPass,
            Self::Home(_) => Route::Home,
            Self::LiveParking(_) => Route::LiveParking,
            Self::History(_) => Route::History,
            Self::Information(_) => Route::Information,
            Self::Logout(_) => Route::Logout,
            Self::Transitioning(route) => *route,
        }
    }
}

impl From<&Screen> for ScreenSnapshot {
    fn from(screen: &Screen) -> Self {
        match screen {
            Screen::Landing => Self::Landing(LANDING),
            Screen::Login(presenter) => Self::Login(presenter.state()),
            Screen::SignUp(presenter) => Self::SignUp(presenter.state()),
            Screen::ResetPassword(presenter) => Self::ResetPassword(presenter.state()),
            Screen::Home(presenter) => Self::Home(presenter.state()),
            Screen::LiveParking(presenter) => Self::LiveParking(presenter.state()),
            Screen::History(presenter) => Self::History(presenter.state()),
            Screen::Information => Self::Information(INFORMATION),
            Screen::Logout(presenter) => Self::Logout(presenter.state()),
        }
    }
}
