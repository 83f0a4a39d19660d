//! Back-stack router.
//!
//! [`NavigationState`] holds the pure back-stack logic; [`Router`] publishes
//! it through a [`StateHolder`] so the shell and any renderer can observe
//! route changes.

use tracing::{debug, info, warn};

use super::NavigationError;
use crate::state::{Route, StateHolder};

// =============================================================================
// OPTIONS
// =============================================================================

/// Pop entries down to `route` before pushing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopUpTo {
    pub route: Route,
    /// Also pop `route` itself.
    pub inclusive: bool,
}

/// Options for [`Router::navigate`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavOptions {
    pub pop_up_to: Option<PopUpTo>,
    /// Do not push if the destination is already on top.
    pub launch_single_top: bool,
}

impl NavOptions {
    /// Plain push.
    pub fn push() -> Self {
        Self::default()
    }

    /// Sign-in, registration and sign-out: drop the whole pre-auth stack.
    pub fn auth_transition() -> Self {
        Self {
            pop_up_to: Some(PopUpTo {
                route: Route::Landing,
                inclusive: true,
            }),
            launch_single_top: true,
        }
    }

    /// Drawer navigation between private screens; Home stays as the floor.
    pub fn lateral() -> Self {
        Self {
            pop_up_to: Some(PopUpTo {
                route: Route::Home,
                inclusive: false,
            }),
            launch_single_top: true,
        }
    }

    #[must_use]
    pub fn pop_up_to(mut self, route: Route, inclusive: bool) -> Self {
        self.pop_up_to = Some(PopUpTo { route, inclusive });
        self
    }

    #[must_use]
    pub fn single_top(mut self) -> Self {
        self.launch_single_top = true;
        self
    }
}

/// Result of a navigate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// A new entry was pushed.
    Pushed,
    /// Single-top: the destination was already on top.
    AlreadyOnTop,
}

// =============================================================================
// NAVIGATION STATE
// =============================================================================

/// One back-stack entry.
///
/// Ids are unique per session, so two visits to the same route are distinct
/// entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackStackEntry {
    pub id: u64,
    pub route: Route,
}

/// The back-stack. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    entries: Vec<BackStackEntry>,
    next_id: u64,
}

impl NavigationState {
    /// Stack holding only `start`.
    pub fn new(start: Route) -> Self {
        Self {
            entries: vec![BackStackEntry {
                id: 0,
                route: start,
            }],
            next_id: 1,
        }
    }

    /// Entries, bottom first.
    pub fn entries(&self) -> &[BackStackEntry] {
        &self.entries
    }

    /// Routes, bottom first.
    pub fn routes(&self) -> Vec<Route> {
        self.entries.iter().map(|entry| entry.route).collect()
    }

    /// Top entry.
    pub fn top(&self) -> BackStackEntry {
        self.entries.last().copied().unwrap_or(BackStackEntry {
            id: 0,
            route: Route::START,
        })
    }

    /// Route on top of the stack.
    pub fn current(&self) -> Route {
        self.top().route
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, route: Route) -> bool {
        self.entries.iter().any(|entry| entry.route == route)
    }

    /// Apply a navigation.
    ///
    /// `popUpTo` runs first and pops down to the top-most matching entry. A
    /// target that is not on the stack leaves the stack untouched and is
    /// reported back, but the push still happens.
    pub fn navigate(
        &mut self,
        route: Route,
        options: NavOptions,
    ) -> (NavigateOutcome, Option<NavigationError>) {
        let mut missed = None;

        if let Some(PopUpTo {
            route: target,
            inclusive,
        }) = options.pop_up_to
        {
            match self.entries.iter().rposition(|entry| entry.route == target) {
                Some(index) => {
                    let keep = if inclusive { index } else { index + 1 };
                    self.entries.truncate(keep);
                }
                None => missed = Some(NavigationError::PopUpToMissing { target }),
            }
        }

        if options.launch_single_top
            && self.entries.last().is_some_and(|entry| entry.route == route)
        {
            return (NavigateOutcome::AlreadyOnTop, missed);
        }

        self.entries.push(BackStackEntry {
            id: self.next_id,
            route,
        });
        self.next_id += 1;
        (NavigateOutcome::Pushed, missed)
    }

    /// Pop the top entry and return the new current route.
    pub fn pop(&mut self) -> Result<Route, NavigationError> {
        if self.entries.len() <= 1 {
            return Err(NavigationError::AtStackFloor);
        }
        self.entries.pop();
        Ok(self.current())
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Route::START)
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Session router. Cloning yields another handle onto the same back-stack.
#[derive(Debug, Clone)]
pub struct Router {
    state: StateHolder<NavigationState>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            state: StateHolder::new(NavigationState::new(start)),
        }
    }

    pub fn current_route(&self) -> Route {
        self.state.with(NavigationState::current)
    }

    /// Clone of the back-stack.
    pub fn snapshot(&self) -> NavigationState {
        self.state.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<NavigationState> {
        self.state.subscribe()
    }

    /// Navigate to `route`.
    pub fn navigate(&self, route: Route, options: NavOptions) -> NavigateOutcome {
        let mut outcome = NavigateOutcome::AlreadyOnTop;
        let mut missed = None;
        self.state.update(|current| {
            let mut next = current.clone();
            (outcome, missed) = next.navigate(route, options);
            next
        });

        if let Some(err) = missed {
            warn!(route = %route, %err, "popUpTo target not on back-stack, nothing popped");
        }
        debug!(
            route = %route,
            ?outcome,
            depth = self.state.with(NavigationState::depth),
            "navigate"
        );
        outcome
    }

    /// Pop the top entry.
    ///
    /// With a single entry left this is a no-op that returns
    /// [`NavigationError::AtStackFloor`].
    pub fn go_back(&self) -> Result<Route, NavigationError> {
        let mut result = Err(NavigationError::AtStackFloor);
        self.state.update(|current| {
            let mut next = current.clone();
            result = next.pop();
            next
        });

        match &result {
            Ok(route) => debug!(route = %route, "back"),
            Err(err) => warn!(%err, "back ignored"),
        }
        result
    }

    pub fn complete_login(&self) -> NavigateOutcome {
        info!("login complete, entering private routes");
        self.navigate(Route::Home, NavOptions::auth_transition())
    }

    pub fn complete_registration(&self) -> NavigateOutcome {
        info!("registration complete, entering private routes");
        self.navigate(Route::Home, NavOptions::auth_transition())
    }

    pub fn complete_logout(&self) -> NavigateOutcome {
        info!("logged out");
        self.navigate(Route::Login, NavOptions::auth_transition())
    }

    /// Drawer navigation between private routes.
    pub fn navigate_lateral(&self, route: Route) -> NavigateOutcome {
        self.navigate(route, NavOptions::lateral())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::START)
    }
}
