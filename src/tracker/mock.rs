//! # Mock Tracker
//!
//! Utilities for testing code that holds a [`TrackerClient`] without running a
//! real [`TrackerActor`](crate::tracker::TrackerActor).
//!
//! | | Mock client | Real tracker |
//! |---|---|---|
//! | **Determinism** | Fully scripted replies | Timer-driven (use paused time) |
//! | **State** | Whatever the test sends back | Real simulation |
//! | **Error injection** | Drop the responder or the receiver | Hard |
//!
//! [`create_mock_client`] returns a client plus the receiving end of its
//! channel. The `expect_*` helpers pull the next request off that receiver and
//! hand back its responder, so the test decides what the "tracker" answers.
//!
//! ```rust
//! use order_tracker::tracker::mock::{create_mock_client, expect_tick};
//! use order_tracker::simulator::TickOutcome;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(4);
//!     let task = tokio::spawn(async move { client.tick().await });
//!
//!     let responder = expect_tick(&mut receiver).await.unwrap();
//!     responder.send(Ok(TickOutcome::Idle)).unwrap();
//!
//!     assert_eq!(task.await.unwrap(), Ok(TickOutcome::Idle));
//! }
//! ```

use crate::model::{Route, SimulationState};
use crate::simulator::TickOutcome;
use crate::tracker::client::TrackerClient;
use crate::tracker::message::{Response, TrackerRequest};
use tokio::sync::{mpsc, watch};

/// Creates a client wired to a bare channel instead of a tracker.
pub fn create_mock_client(buffer_size: usize) -> (TrackerClient, mpsc::Receiver<TrackerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (TrackerClient::new(sender), receiver)
}

/// Waits for the next request and returns its responder if it is a `Snapshot`.
pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<TrackerRequest>,
) -> Option<Response<SimulationState>> {
    match receiver.recv().await? {
        TrackerRequest::Snapshot { respond_to } => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next request and returns its responder if it is a `Tick`.
pub async fn expect_tick(
    receiver: &mut mpsc::Receiver<TrackerRequest>,
) -> Option<Response<TickOutcome>> {
    match receiver.recv().await? {
        TrackerRequest::Tick { respond_to } => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next request and returns its responder if it is a `Subscribe`.
pub async fn expect_subscribe(
    receiver: &mut mpsc::Receiver<TrackerRequest>,
) -> Option<Response<watch::Receiver<SimulationState>>> {
    match receiver.recv().await? {
        TrackerRequest::Subscribe { respond_to } => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next request and returns its responder if it is a `Route`.
pub async fn expect_route(receiver: &mut mpsc::Receiver<TrackerRequest>) -> Option<Response<Route>> {
    match receiver.recv().await? {
        TrackerRequest::Route { respond_to } => Some(respond_to),
        _ => None,
    }
}
