//! # Tracker Errors
//!
//! Failures seen by code talking to a running tracker. The simulation itself
//! cannot fail; everything here is about channels, tasks and setup.

use crate::simulator::RouteError;

/// Errors that can occur while communicating with or managing a tracker.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum TrackerError {
    #[error("Tracker closed")]
    ActorClosed,
    #[error("Tracker dropped response channel")]
    ActorDropped,
    #[error("Invalid tracker setup: {0}")]
    InvalidRoute(#[from] RouteError),
    #[error("Task failed: {0}")]
    TaskFailed(String),
}
