//! Plain data: the route and the simulation snapshot shared by every layer.

pub mod state;
pub mod waypoint;

pub use state::*;
pub use waypoint::*;
