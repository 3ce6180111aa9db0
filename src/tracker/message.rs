//! # Tracker Messages
//!
//! Requests sent from a [`TrackerClient`](crate::tracker::TrackerClient) to the
//! [`TrackerActor`](crate::tracker::TrackerActor). Each carries a one-shot
//! channel for the reply.

use crate::model::{Route, SimulationState};
use crate::simulator::TickOutcome;
use crate::tracker::error::TrackerError;
use tokio::sync::{oneshot, watch};

/// Type alias for the one-shot response channel used by the tracker.
pub type Response<T> = oneshot::Sender<Result<T, TrackerError>>;

/// Internal message type sent to the tracker.
#[derive(Debug)]
pub enum TrackerRequest {
    /// Read the current state.
    Snapshot { respond_to: Response<SimulationState> },
    /// Advance one step now, outside the timer cadence.
    Tick { respond_to: Response<TickOutcome> },
    /// Register for change notifications.
    Subscribe {
        respond_to: Response<watch::Receiver<SimulationState>>,
    },
    /// Read the (immutable) route.
    Route { respond_to: Response<Route> },
}
