//! Messages of the parking data screens.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeMessage {
    /// Fetch the dashboard again
    ReloadClicked,
    /// Dashboard fetch finished
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveParkingMessage {
    /// Fetch the lots again
    ReloadClicked,
    /// Recompute occupancy locally
    RefreshClicked,
    /// Lot fetch finished
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryMessage {
    /// Fetch the history again
    ReloadClicked,
    /// History fetch finished
    Loaded,
}
