//! Parking data screen handlers.

use tracing::{debug, warn};

use super::MessageHandler;
use crate::app::{AppState, Screen, Task};
use crate::message::{HistoryMessage, HomeMessage, LiveParkingMessage};

/// Handler for the dashboard.
pub struct HomeHandler;

impl MessageHandler<HomeMessage> for HomeHandler {
    fn handle(&self, state: &mut AppState, msg: HomeMessage) -> Task {
        match msg {
            HomeMessage::ReloadClicked => match state.find_screen(Screen::as_home) {
                Some(home) => Screen::home_load(home),
                None => {
                    warn!("home message without a home screen");
                    Task::none()
                }
            },
            HomeMessage::Loaded => {
                debug!("home ready");
                Task::none()
            }
        }
    }
}

/// Handler for the live parking map.
pub struct LiveParkingHandler;

impl MessageHandler<LiveParkingMessage> for LiveParkingHandler {
    fn handle(&self, state: &mut AppState, msg: LiveParkingMessage) -> Task {
        let Some(live) = state.find_screen(Screen::as_live_parking) else {
            warn!("live parking message without a live parking screen");
            return Task::none();
        };

        match msg {
            LiveParkingMessage::ReloadClicked => Screen::live_parking_load(live),
            LiveParkingMessage::RefreshClicked => {
                live.refresh();
                Task::none()
            }
            LiveParkingMessage::Loaded => {
                debug!("live parking ready");
                Task::none()
            }
        }
    }
}

/// Handler for the history list.
pub struct HistoryHandler;

impl MessageHandler<HistoryMessage> for HistoryHandler {
    fn handle(&self, state: &mut AppState, msg: HistoryMessage) -> Task {
        match msg {
            HistoryMessage::ReloadClicked => match state.find_screen(Screen::as_history) {
                Some(history) => Screen::history_load(history),
                None => {
                    warn!("history message without a history screen");
                    Task::none()
                }
            },
            HistoryMessage::Loaded => {
                debug!("history ready");
                Task::none()
            }
        }
    }
}
