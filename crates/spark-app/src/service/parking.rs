//! Parking data collaborator.

use std::sync::Arc;

use async_trait::async_trait;

use super::{Delay, ServiceError, fixtures};
use crate::settings::TimingSettings;
use crate::state::{HistoryRecord, Lot, ParkingLocation, ParkingStatus};

/// Backend contract for the private screens.
#[async_trait]
pub trait ParkingRepository: Send + Sync {
    async fn parking_status(&self) -> Result<ParkingStatus, ServiceError>;

    async fn parking_locations(&self) -> Result<Vec<ParkingLocation>, ServiceError>;

    async fn history(&self) -> Result<HistoryRecord, ServiceError>;

    async fn live_lots(&self) -> Result<Vec<Lot>, ServiceError>;
}

/// Serves the fixtures after the configured delays.
pub struct FakeParkingRepository {
    delay: Arc<dyn Delay>,
    timing: TimingSettings,
}

impl FakeParkingRepository {
    pub fn new(delay: Arc<dyn Delay>, timing: TimingSettings) -> Self {
        Self { delay, timing }
    }
}

#[async_trait]
impl ParkingRepository for FakeParkingRepository {
    async fn parking_status(&self) -> Result<ParkingStatus, ServiceError> {
        self.delay.sleep(self.timing.parking_status()).await;
        Ok(fixtures::PARKING_STATUS)
    }

    async fn parking_locations(&self) -> Result<Vec<ParkingLocation>, ServiceError> {
        self.delay.sleep(self.timing.parking_status()).await;
        Ok(fixtures::parking_locations())
    }

    async fn history(&self) -> Result<HistoryRecord, ServiceError> {
        self.delay.sleep(self.timing.history()).await;
        Ok(fixtures::history())
    }

    async fn live_lots(&self) -> Result<Vec<Lot>, ServiceError> {
        self.delay.sleep(self.timing.live_parking()).await;
        Ok(vec![fixtures::main_entrance_lot()])
    }
}
