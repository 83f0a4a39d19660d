//! Navigation: back-stack router and the side drawer.
//!
//! Both are session-scoped handles created by the [`crate::App`] shell and
//! shared with the handlers. Cloning a handle never copies state.

mod drawer;
mod router;

use thiserror::Error;

use crate::state::Route;

pub use drawer::{DrawerCoordinator, DrawerState, DrawerValue};
pub use router::{
    BackStackEntry, NavOptions, NavigateOutcome, NavigationState, PopUpTo, Router,
};

/// Navigation anomalies.
///
/// Neither is fatal: the router logs them and leaves the stack as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// `popUpTo` named a route that is not on the back-stack.
    #[error("popUpTo target '{target}' is not on the back-stack")]
    PopUpToMissing {
        /// Requested target.
        target: Route,
    },

    /// Back was requested with a single entry left.
    #[error("Back-stack is at its floor")]
    AtStackFloor,
}
