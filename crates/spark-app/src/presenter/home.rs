//! Dashboard presenter.

use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{debug, warn};

use super::{Load, LoadSlot, LoadState};
use crate::service::ParkingRepository;
use crate::state::{ParkingLocation, ParkingStatus, StateHolder};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    /// Greeting name.
    pub username: String,
    pub status: LoadState<ParkingStatus>,
    pub locations: Vec<ParkingLocation>,
}

#[derive(Clone)]
pub struct HomePresenter {
    state: StateHolder<HomeState>,
    parking: Arc<dyn ParkingRepository>,
    slot: LoadSlot,
}

impl HomePresenter {
    pub fn new(parking: Arc<dyn ParkingRepository>, username: &str) -> Self {
        Self {
            state: StateHolder::new(HomeState {
                username: username.to_string(),
                ..HomeState::default()
            }),
            parking,
            slot: LoadSlot::default(),
        }
    }

    pub fn state(&self) -> HomeState {
        self.state.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<HomeState> {
        self.state.subscribe()
    }

    pub fn set_username(&self, name: &str) {
        self.state.update(|state| HomeState {
            username: name.to_string(),
            ..state.clone()
        });
    }

    /// Check if a fetch is running.
    pub fn is_fetching(&self) -> bool {
        self.slot.is_taken()
    }

    /// Fetch the status card and the location table.
    pub async fn load(&self) {
        if let Some(load) = self.start_load() {
            load.await;
        }
    }

    /// Enter loading and return the fetch, unless one is already running.
    pub fn start_load(&self) -> Option<Load> {
        let claim = self.slot.claim()?;
        self.state.update(|state| HomeState {
            status: LoadState::Loading,
            ..state.clone()
        });

        let presenter = self.clone();
        Some(
            async move {
                let _claim = claim;
                presenter.fetch().await;
            }
            .boxed(),
        )
    }

    async fn fetch(&self) {
        let status = match self.parking.parking_status().await {
            Ok(status) => LoadState::Ready(status),
            Err(err) => {
                warn!(%err, "parking status unavailable");
                LoadState::Failed(err.user_message())
            }
        };
        let locations = self.parking.parking_locations().await.unwrap_or_else(|err| {
            warn!(%err, "parking locations unavailable");
            Vec::new()
        });

        debug!(locations = locations.len(), "dashboard loaded");
        self.state.update(|state| HomeState {
            status,
            locations,
            ..state.clone()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{FakeParkingRepository, InstantDelay};
    use crate::settings::TimingSettings;

    #[tokio::test]
    async fn load_fills_status_and_locations() {
        let parking = FakeParkingRepository::new(Arc::new(InstantDelay), TimingSettings::default());
        let home = HomePresenter::new(Arc::new(parking), "Barbara Neanake");
        assert!(home.state().status.is_loading());

        home.load().await;
        let state = home.state();
        assert_eq!(state.status.ready().map(ParkingStatus::free_slots), Some(82));
        assert_eq!(state.locations.len(), 16);
        assert_eq!(state.username, "Barbara Neanake");
    }

    #[tokio::test]
    async fn second_start_while_fetching_is_refused() {
        let parking = FakeParkingRepository::new(Arc::new(InstantDelay), TimingSettings::default());
        let home = HomePresenter::new(Arc::new(parking), "Barbara Neanake");

        let load = home.start_load().expect("first load starts");
        assert!(home.is_fetching());
        assert!(home.start_load().is_none());

        load.await;
        assert!(!home.is_fetching());
        assert!(home.start_load().is_some());
    }
}
