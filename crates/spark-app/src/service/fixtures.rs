//! Hardcoded data served by the fake repositories.

use crate::state::{HistoryItem, HistoryRecord, Lot, ParkingLocation, ParkingStatus, SlotRect};

/// Faculty-wide slot counts.
pub const PARKING_STATUS: ParkingStatus = ParkingStatus {
    total_slots: 147,
    used_slots: 65,
};

const LOCATIONS: [(&str, &str, u32); 16] = [
    ("P1", "ERIC", 0),
    ("P2", "DTSL", 15),
    ("P3", "DTGD", 4),
    ("P4", "DTAP Arsitektur", 20),
    ("P5", "DTAP Perencanaan", 20),
    ("P6", "Lapangan Basket", 7),
    ("P7", "DTK Bawah", 5),
    ("P8", "DTK Taman Manufaktur", 7),
    ("P9", "DTETI Taman Manufaktur", 0),
    ("P10", "DTMI Taman Manufaktur", 0),
    ("P11", "DTMI Bawah", 50),
    ("P12", "DTETI Lingkar Teknik", 14),
    ("P13", "DTNTF", 8),
    ("P14", "DTGL Lingkar Teknik", 4),
    ("P15", "DTGL Dalam", 0),
    ("P16", "Satu Bumi", 0),
];

pub fn parking_locations() -> Vec<ParkingLocation> {
    LOCATIONS
        .iter()
        .map(|(code, name, remaining)| ParkingLocation {
            code: (*code).to_string(),
            name: (*name).to_string(),
            remaining: *remaining,
        })
        .collect()
}

/// Past sessions, newest first.
pub fn history() -> HistoryRecord {
    HistoryRecord {
        name: "Barbara Neanake".to_string(),
        items: vec![
            HistoryItem::new("13-09-2025", "09.00 AM", "B3 DTETI FT UGM"),
            HistoryItem::new("13-09-2025", "10.30 AM", "Lapangan Satu Bumi"),
            HistoryItem::new("12-09-2025", "01.15 PM", "DTGL Lingkar Teknik"),
            HistoryItem::new("11-09-2025", "08.45 AM", "DTMI Bawah"),
        ],
    }
}

fn slot(id: &str, x_pct: f32, w_pct: f32, occupied: bool) -> SlotRect {
    SlotRect {
        id: id.to_string(),
        x_pct,
        y_pct: 0.42,
        w_pct,
        h_pct: 0.46,
        occupied,
        accessible: false,
    }
}

/// The main-entrance lot, slots laid out over the `liveparkingmap` image.
pub fn main_entrance_lot() -> Lot {
    Lot {
        name: "Akses Utama FT UGM".to_string(),
        map_asset: "liveparkingmap".to_string(),
        slots: vec![
            slot("S1", 0.17, 0.11, false),
            slot("S2", 0.35, 0.11, true),
            slot("S3", 0.53, 0.11, false),
            slot("S4", 0.71, 0.11, false),
            slot("S5", 0.84, 0.07, true),
            slot("S6", 0.04, 0.11, false),
            SlotRect {
                id: "D1".to_string(),
                x_pct: 0.91,
                y_pct: 0.38,
                w_pct: 0.08,
                h_pct: 0.55,
                occupied: false,
                accessible: true,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_matches_dashboard() {
        assert_eq!(PARKING_STATUS.free_slots(), 82);
        assert_eq!(parking_locations().len(), 16);
    }

    #[test]
    fn lot_has_seven_slots_with_accessible_last() {
        let lot = main_entrance_lot();
        assert_eq!(lot.total(), 7);
        assert_eq!(lot.used(), 2);
        assert!(lot.slots[6].accessible);
        assert!(lot.slots[..6].iter().all(|slot| !slot.accessible));
    }
}
