//! Route table.
//!
//! Every navigable screen maps to exactly one [`Route`]. Routes are split into
//! a public group (reachable before sign-in) and a private group (behind the
//! drawer, reachable after sign-in).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// ROUTE ENUM
// =============================================================================

/// Named navigable destination.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Brand splash screen, the start destination.
    #[default]
    Landing,

    /// Email/password sign-in.
    Login,

    /// Account registration.
    SignUp,

    /// Password reset form.
    EditPass,

    /// Dashboard with the faculty-wide parking status.
    Home,

    /// Live parking map with per-slot occupancy.
    LiveParking,

    /// Past parking sessions.
    History,

    /// Safety riding information.
    Information,

    /// Logout confirmation.
    Logout,
}

/// Public/private classification of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteGroup {
    /// Reachable without a session.
    Public,
    /// Requires an authenticated session.
    Private,
}

impl Route {
    /// Route the navigation graph starts at.
    pub const START: Route = Route::Landing;

    /// Stable route identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Login => "login",
            Self::SignUp => "signup",
            Self::EditPass => "edit_pass",
            Self::Home => "home",
            Self::LiveParking => "live_parking",
            Self::History => "history",
            Self::Information => "information",
            Self::Logout => "logout",
        }
    }

    /// Screen title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Landing => "Landing",
            Self::Login => "Login",
            Self::SignUp => "Sign Up",
            Self::EditPass => "Reset Password",
            Self::Home => "Home",
            Self::LiveParking => "Live Parking",
            Self::History => "History",
            Self::Information => "Information",
            Self::Logout => "Logout",
        }
    }

    /// Route group.
    pub fn group(&self) -> RouteGroup {
        match self {
            Self::Landing | Self::Login | Self::SignUp | Self::EditPass => RouteGroup::Public,
            Self::Home | Self::LiveParking | Self::History | Self::Information | Self::Logout => {
                RouteGroup::Private
            }
        }
    }

    /// Check if this route requires a session.
    pub fn is_private(&self) -> bool {
        self.group() == RouteGroup::Private
    }

    /// All routes in declaration order.
    pub const fn all() -> &'static [Route] {
        &[
            Self::Landing,
            Self::Login,
            Self::SignUp,
            Self::EditPass,
            Self::Home,
            Self::LiveParking,
            Self::History,
            Self::Information,
            Self::Logout,
        ]
    }

    /// Look a route up by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|route| route.id() == id)
    }

    /// Drawer entry for this route, if it has one.
    pub fn drawer_item(&self) -> Option<&'static DrawerItem> {
        DRAWER_ITEMS.iter().find(|item| item.route == *self)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when parsing an unknown route identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s.trim()).ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

// =============================================================================
// DRAWER ITEMS
// =============================================================================

/// Entry in the side drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerItem {
    /// Text shown in the drawer.
    pub label: &'static str,
    /// Destination.
    pub route: Route,
}

/// Drawer entries in display order.
pub const DRAWER_ITEMS: [DrawerItem; 5] = [
    DrawerItem {
        label: "Home",
        route: Route::Home,
    },
    DrawerItem {
        label: "Live Parking Map",
        route: Route::LiveParking,
    },
    DrawerItem {
        label: "History",
        route: Route::History,
    },
    DrawerItem {
        label: "Information",
        route: Route::Information,
    },
    DrawerItem {
        label: "Logout",
        route: Route::Logout,
    },
];
