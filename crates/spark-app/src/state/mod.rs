//! Application state types.
//!
//! - **Route**: the closed route table and drawer entries
//! - **StateHolder**: observable snapshot container shared by presenters
//! - **Parking data**: dashboard, history and live-lot records
//! - **Content**: static text for screens without a presenter

pub mod content;
mod holder;
mod parking;
mod route;

pub use content::{INFORMATION, InformationContent, LANDING, LandingContent};
pub use holder::StateHolder;
pub use parking::{
    HistoryItem, HistoryRecord, Lot, ParkingLocation, ParkingStatus, SlotRect,
};
pub use route::{DRAWER_ITEMS, DrawerItem, Route, RouteGroup, UnknownRoute};
