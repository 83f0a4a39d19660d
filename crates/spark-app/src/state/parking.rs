//! Parking data shown by the private screens.

// =============================================================================
// DASHBOARD
// =============================================================================

/// Faculty-wide slot counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkingStatus {
    /// Total car slots across all locations.
    pub total_slots: u32,
    /// Slots currently in use.
    pub used_slots: u32,
}

impl ParkingStatus {
    /// Slots still available.
    pub fn free_slots(&self) -> u32 {
        self.total_slots.saturating_sub(self.used_slots)
    }
}

/// One parking location on the dashboard table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingLocation {
    /// Location code (e.g., "P1").
    pub code: String,
    /// Location or department name.
    pub name: String,
    /// Remaining free slots.
    pub remaining: u32,
}

// =============================================================================
// HISTORY
// =============================================================================

/// A past parking session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// Date as shown to the user ("13-09-2025").
    pub date: String,
    /// Time as shown to the user ("09.00 AM").
    pub time: String,
    /// Parking location.
    pub location: String,
}

impl HistoryItem {
    pub fn new(date: &str, time: &str, location: &str) -> Self {
        Self {
            date: date.to_string(),
            time: time.to_string(),
            location: location.to_string(),
        }
    }
}

/// History owner plus their sessions, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub name: String,
    pub items: Vec<HistoryItem>,
}

// =============================================================================
// LIVE PARKING
// =============================================================================

/// A slot overlay on the lot map.
///
/// Coordinates are fractions of the map image size.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRect {
    pub id: String,
    pub x_pct: f32,
    pub y_pct: f32,
    pub w_pct: f32,
    pub h_pct: f32,
    pub occupied: bool,
    /// Reserved for drivers with disabilities.
    pub accessible: bool,
}

/// A parking lot with its slots in fixture order.
#[derive(Debug, Clone, PartialEq)]
pub struct Lot {
    pub name: String,
    /// Asset identifier of the map image.
    pub map_asset: String,
    pub slots: Vec<SlotRect>,
}

impl Lot {
    /// Number of slots.
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    /// Occupied slots.
    pub fn used(&self) -> usize {
        self.slots.iter().filter(|slot| slot.occupied).count()
    }

    /// Free slots.
    pub fn free(&self) -> usize {
        self.total() - self.used()
    }

    /// Copy of this lot with occupancy toggled on every third slot
    /// (0-based indices 0, 3, 6, ...).
    pub fn with_refreshed_occupancy(&self) -> Self {
        let slots = self
            .slots
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                if index % 3 == 0 {
                    SlotRect {
                        occupied: !slot.occupied,
                        ..slot.clone()
                    }
                } else {
                    slot.clone()
                }
            })
            .collect();
        Self {
            slots,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str, occupied: bool) -> SlotRect {
        SlotRect {
            id: id.to_string(),
            x_pct: 0.0,
            y_pct: 0.0,
            w_pct: 0.1,
            h_pct: 0.1,
            occupied,
            accessible: false,
        }
    }

    #[test]
    fn free_slots_never_underflow() {
        let status = ParkingStatus {
            total_slots: 3,
            used_slots: 5,
        };
        assert_eq!(status.free_slots(), 0);
    }

    #[test]
    fn refresh_toggles_every_third_slot() {
        let lot = Lot {
            name: "Test".to_string(),
            map_asset: "map".to_string(),
            slots: (0..5).map(|i| slot(&format!("S{i}"), false)).collect(),
        };

        let refreshed = lot.with_refreshed_occupancy();
        let occupied: Vec<bool> = refreshed.slots.iter().map(|s| s.occupied).collect();

        assert_eq!(occupied, vec![true, false, false, true, false]);
        assert_eq!(refreshed.used(), 2);
        assert_eq!(refreshed.free(), 3);
        assert_eq!(refreshed.with_refreshed_occupancy(), lot);
    }
}
