//! Error types for route and tracker configuration.

use thiserror::Error;

/// Errors raised while building a route or validating a tracker configuration.
///
/// The simulator itself never fails once it has a valid route: running past
/// the destination is clamped, not reported.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RouteError {
    /// A route needs at least an origin and a destination.
    #[error("Route needs at least 2 waypoints, found {found}")]
    TooFewWaypoints { found: usize },

    /// A waypoint lies outside the valid coordinate ranges.
    #[error("Invalid coordinate at waypoint {index}: ({lat}, {lng})")]
    InvalidCoordinate { index: usize, lat: f64, lng: f64 },

    /// The tick period must be strictly positive.
    #[error("Tick period must be greater than zero")]
    ZeroPeriod,

    /// The request channel needs room for at least one message.
    #[error("Channel buffer size must be greater than zero")]
    ZeroBuffer,
}
