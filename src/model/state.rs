use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Coarse classification of delivery progress.
///
/// The simulator only classifies; how a tier looks on screen is decided by
/// [`crate::presentation::StatusDisplay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTier {
    /// Somewhere before the last leg.
    EnRoute,
    /// On the last leg, one waypoint away from the destination.
    Nearby,
    /// At the destination; terminal.
    Delivered,
}

impl Display for StatusTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusTier::EnRoute => "en_route",
            StatusTier::Nearby => "nearby",
            StatusTier::Delivered => "delivered",
        };
        f.write_str(name)
    }
}

/// Snapshot of the simulated delivery.
///
/// # Invariants
/// For a route of `N` waypoints:
/// - `current_index` is in `0..N`.
/// - `progress_percent == current_index / (N - 1) * 100`.
/// - `status == Delivered` iff `delivered`, `status == Nearby` iff
///   `current_index == N - 2`, otherwise `EnRoute`.
/// - `delivered` iff the destination has been reached; the state never changes
///   afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub current_index: usize,
    pub progress_percent: f64,
    pub eta_minutes: f64,
    pub status: StatusTier,
    pub delivered: bool,
}

impl SimulationState {
    /// Progress rounded to the nearest whole percent, as shown next to the bar.
    pub fn rounded_progress(&self) -> u8 {
        self.progress_percent.round().clamp(0.0, 100.0) as u8
    }
}
