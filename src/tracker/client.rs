//! # Tracker Client
//!
//! The cheap, cloneable handle used by everything outside the tracker task.

use crate::model::{Route, SimulationState};
use crate::simulator::TickOutcome;
use crate::tracker::error::TrackerError;
use crate::tracker::message::{Response, TrackerRequest};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

/// A type-safe client for interacting with a [`TrackerActor`](crate::tracker::TrackerActor).
///
/// Holds only a channel sender, so clones are inexpensive and can be handed to
/// any number of tasks. The tracker keeps running for as long as one clone is
/// alive.
#[derive(Clone, Debug)]
pub struct TrackerClient {
    sender: mpsc::Sender<TrackerRequest>,
}

impl TrackerClient {
    pub fn new(sender: mpsc::Sender<TrackerRequest>) -> Self {
        Self { sender }
    }

    /// Current simulation state.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<SimulationState, TrackerError> {
        debug!("Sending request");
        self.request(|respond_to| TrackerRequest::Snapshot { respond_to })
            .await
    }

    /// Advances the simulation one step immediately, independent of the timer.
    ///
    /// Useful for polling drivers and tests. A tick after delivery returns
    /// [`TickOutcome::Idle`].
    #[instrument(skip(self))]
    pub async fn tick(&self) -> Result<TickOutcome, TrackerError> {
        debug!("Sending request");
        self.request(|respond_to| TrackerRequest::Tick { respond_to })
            .await
    }

    /// Registers for change notifications.
    ///
    /// The returned receiver already holds the current state (marked as seen);
    /// `changed()` resolves on the next transition and errors once the tracker
    /// has shut down.
    #[instrument(skip(self))]
    pub async fn subscribe(&self) -> Result<watch::Receiver<SimulationState>, TrackerError> {
        debug!("Sending request");
        self.request(|respond_to| TrackerRequest::Subscribe { respond_to })
            .await
    }

    /// The route being simulated.
    #[instrument(skip(self))]
    pub async fn route(&self) -> Result<Route, TrackerError> {
        debug!("Sending request");
        self.request(|respond_to| TrackerRequest::Route { respond_to })
            .await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> TrackerRequest,
    ) -> Result<T, TrackerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| TrackerError::ActorClosed)?;
        response.await.map_err(|_| TrackerError::ActorDropped)?
    }
}
