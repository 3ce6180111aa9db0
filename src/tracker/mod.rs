//! # Tracker
//!
//! Runs a [`RouteSimulator`](crate::simulator::RouteSimulator) inside its own
//! Tokio task and exposes it through a cloneable client.
//!
//! - [`TrackerActor`] - owns the simulation, the timer and the subscriber list
//! - [`TrackerClient`] - type-safe async handle (`snapshot`, `tick`, `subscribe`, `route`)
//! - [`TrackerRequest`] - the messages exchanged between the two
//! - [`TrackerError`] - channel and setup failures
//!
//! See [`mock`] for testing code around the client without a running tracker.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::TrackerActor;
pub use client::TrackerClient;
pub use error::TrackerError;
pub use message::{Response, TrackerRequest};
