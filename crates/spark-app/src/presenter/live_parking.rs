//! Live parking map presenter.

use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{debug, warn};

use super::{Load, LoadSlot};
use crate::service::ParkingRepository;
use crate::state::{Lot, StateHolder};

#[derive(Debug, Clone, PartialEq)]
pub struct LiveParkingState {
    pub loading: bool,
    pub lots: Vec<Lot>,
    pub error: Option<String>,
}

impl Default for LiveParkingState {
    fn default() -> Self {
        Self {
            loading: true,
            lots: Vec::new(),
            error: None,
        }
    }
}

#[derive(Clone)]
pub struct LiveParkingPresenter {
    state: StateHolder<LiveParkingState>,
    parking: Arc<dyn ParkingRepository>,
    slot: LoadSlot,
}

impl LiveParkingPresenter {
    pub fn new(parking: Arc<dyn ParkingRepository>) -> Self {
        Self {
            state: StateHolder::new(LiveParkingState::default()),
            parking,
            slot: LoadSlot::default(),
        }
    }

    pub fn state(&self) -> LiveParkingState {
        self.state.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<LiveParkingState> {
        self.state.subscribe()
    }

    pub async fn load(&self) {
        self.reload().await;
    }

    /// Check if a fetch is running.
    pub fn is_fetching(&self) -> bool {
        self.slot.is_taken()
    }

    /// Reset to loading, then fetch the lots again.
    pub async fn reload(&self) {
        if let Some(load) = self.start_reload() {
            load.await;
        }
    }

    /// Reset to loading and return the fetch, unless one is already running.
    pub fn start_reload(&self) -> Option<Load> {
        let claim = self.slot.claim()?;
        self.state.replace(LiveParkingState::default());

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
        let next = match self.parking.live_lots().await {
            Ok(lots) => {
                debug!(lots = lots.len(), "live parking loaded");
                LiveParkingState {
                    loading: false,
                    lots,
                    error: None,
                }
            }
            Err(err) => {
                warn!(%err, "live parking unavailable");
                LiveParkingState {
                    loading: false,
                    lots: Vec::new(),
                    error: Some(err.user_message()),
                }
            }
        };
        self.state.replace(next);
    }

    /// Recompute occupancy locally: every third slot of every lot flips.
    pub fn refresh(&self) {
        self.state.update(|state| LiveParkingState {
            lots: state.lots.iter().map(Lot::with_refreshed_occupancy).collect(),
            ..state.clone()
        });
    }
}
