//! Parking history presenter.

use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{debug, warn};

use super::{Load, LoadSlot};
use crate::service::ParkingRepository;
use crate::state::{HistoryItem, StateHolder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryState {
    pub loading: bool,
    /// Owner of the history.
    pub name: String,
    pub items: Vec<HistoryItem>,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct HistoryPresenter {
    state: StateHolder<HistoryState>,
    parking: Arc<dyn ParkingRepository>,
    slot: LoadSlot,
}

impl HistoryPresenter {
    /// The presenter starts out loading.
    pub fn new(parking: Arc<dyn ParkingRepository>, name: &str) -> Self {
        Self {
            state: StateHolder::new(HistoryState {
                loading: true,
                name: name.to_string(),
                items: Vec::new(),
                error: None,
            }),
            parking,
            slot: LoadSlot::default(),
        }
    }

    pub fn state(&self) -> HistoryState {
        self.state.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<HistoryState> {
        self.state.subscribe()
    }

    /// Check if a fetch is running.
    pub fn is_fetching(&self) -> bool {
        self.slot.is_taken()
    }

    pub async fn load(&self) {
        if let Some(load) = self.start_load() {
            load.await;
        }
    }

    /// Enter loading and return the fetch, unless one is already running.
    pub fn start_load(&self) -> Option<Load> {
        let claim = self.slot.claim()?;
        self.state.update(|state| HistoryState {
            loading: true,
            error: None,
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
        match self.parking.history().await {
            Ok(record) => {
                debug!(items = record.items.len(), "history loaded");
                self.state.replace(HistoryState {
                    loading: false,
                    name: record.name,
                    items: record.items,
                    error: None,
                });
            }
            Err(err) => {
                warn!(%err, "history unavailable");
                self.state.update(|state| HistoryState {
                    loading: false,
                    error: Some(err.user_message()),
                    ..state.clone()
                });
            }
        }
    }
}
