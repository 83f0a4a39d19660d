//! Side drawer coordinator.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::{NavigateOutcome, Router};
use crate::service::Delay;
use crate::state::{DRAWER_ITEMS, DrawerItem, Route, StateHolder};

/// Open/closed flag of the drawer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DrawerValue {
    Open,
    #[default]
    Closed,
}

/// Drawer snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerState {
    pub value: DrawerValue,
    /// Highlighted item.
    pub selected: Route,
}

impl Default for DrawerState {
    fn default() -> Self {
        Self {
            value: DrawerValue::Closed,
            selected: Route::Home,
        }
    }
}

/// The single drawer shared by all private screens.
///
/// Screens may only [`open`](Self::open) it. Closing together with
/// navigation goes through [`select_and_navigate`](Self::select_and_navigate)
/// so the drawer is gone before the destination mounts.
#[derive(Clone)]
pub struct DrawerCoordinator {
    state: StateHolder<DrawerState>,
    router: Router,
    delay: Arc<dyn Delay>,
    close_delay: Duration,
}

impl std::fmt::Debug for DrawerCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawerCoordinator")
            .field("state", &self.state)
            .field("close_delay", &self.close_delay)
            .finish_non_exhaustive()
    }
}

impl DrawerCoordinator {
    pub fn new(router: Router, delay: Arc<dyn Delay>, close_delay: Duration) -> Self {
        Self {
            state: StateHolder::new(DrawerState::default()),
            router,
            delay,
            close_delay,
        }
    }

    pub fn state(&self) -> DrawerState {
        self.state.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<DrawerState> {
        self.state.subscribe()
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|state| state.value == DrawerValue::Open)
    }

    pub fn selected(&self) -> Route {
        self.state.with(|state| state.selected)
    }

    /// Entries in display order.
    pub fn items(&self) -> &'static [DrawerItem] {
        &DRAWER_ITEMS
    }

    /// Open the drawer. Returns `false` if it was already open.
    pub fn open(&self) -> bool {
        self.set_value(DrawerValue::Open)
    }

    /// Close the drawer. Returns `false` if it was already closed.
    pub fn close(&self) -> bool {
        self.set_value(DrawerValue::Closed)
    }

    /// Highlight `route`.
    pub fn select(&self, route: Route) {
        self.state.update(|state| DrawerState {
            selected: route,
            ..*state
        });
    }

    /// Close, let the close transition settle, then navigate laterally.
    pub async fn select_and_navigate(&self, route: Route) -> NavigateOutcome {
        self.select(route);
        self.close();
        self.delay.sleep(self.close_delay).await;
        self.router.navigate_lateral(route)
    }

    fn set_value(&self, value: DrawerValue) -> bool {
        let changed = self.state.update(|state| DrawerState { value, ..*state });
        if changed {
            debug!(?value, "drawer");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavOptions;
    use crate::service::{InstantDelay, TokioDelay};

    fn drawer_on_home(delay: Arc<dyn Delay>) -> (Router, DrawerCoordinator) {
        let router = Router::new(Route::Home);
        let drawer = DrawerCoordinator::new(router.clone(), delay, Duration::from_millis(120));
        (router, drawer)
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let (_, drawer) = drawer_on_home(Arc::new(InstantDelay));

        assert!(drawer.open());
        let opened = drawer.state();
        assert!(!drawer.open());
        assert_eq!(drawer.state(), opened);

        assert!(drawer.close());
        let closed = drawer.state();
        assert!(!drawer.close());
        assert_eq!(drawer.state(), closed);
    }

    #[test]
    fn items_follow_display_order() {
        let (_, drawer) = drawer_on_home(Arc::new(InstantDelay));
        let labels: Vec<_> = drawer.items().iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            ["Home", "Live Parking Map", "History", "Information", "Logout"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn closes_before_navigating() {
        let (router, drawer) = drawer_on_home(Arc::new(TokioDelay));
        drawer.open();

        let task = tokio::spawn({
            let drawer = drawer.clone();
            async move { drawer.select_and_navigate(Route::History).await }
        });

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!drawer.is_open());
        assert_eq!(drawer.selected(), Route::History);
        assert_eq!(router.current_route(), Route::Home);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(task.await.unwrap(), NavigateOutcome::Pushed);
        assert_eq!(router.snapshot().routes(), vec![Route::Home, Route::History]);
    }

    #[tokio::test]
    async fn lateral_hop_keeps_home_floor() {
        let (router, drawer) = drawer_on_home(Arc::new(InstantDelay));
        router.navigate(Route::Information, NavOptions::push());

        drawer.select_and_navigate(Route::LiveParking).await;
        assert_eq!(
            router.snapshot().routes(),
            vec![Route::Home, Route::LiveParking]
        );

        let outcome = drawer.select_and_navigate(Route::LiveParking).await;
        assert_eq!(outcome, NavigateOutcome::AlreadyOnTop);
    }
}
