//! # Route Simulator
//!
//! The synchronous state machine behind the tracker. It owns the route and the
//! current [`SimulationState`], and advances exactly one waypoint per
//! [`RouteSimulator::tick`].
//!
//! ## States
//!
//! The simulator walks the indices `0..N` of an `N`-waypoint route. The step
//! that reaches the destination (tick `N - 1`) is terminal: the state flips to
//! delivered and every later tick is a no-op.
//!
//! ```text
//! 0 ──tick──▶ 1 ──tick──▶ ... ──tick──▶ N-2 (Nearby) ──tick──▶ N-1 (Delivered) ─┐
//!                                                                    ▲        │
//!                                                                    └─tick───┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use order_tracker::model::{Route, StatusTier};
//! use order_tracker::simulator::{RouteSimulator, TickOutcome};
//!
//! let mut sim = RouteSimulator::new(Route::demo());
//! assert_eq!(sim.tick(), TickOutcome::Advanced { index: 1 });
//! assert_eq!(sim.state().eta_minutes, 4.5);
//!
//! while !sim.is_delivered() {
//!     sim.tick();
//! }
//! assert_eq!(sim.state().status, StatusTier::Delivered);
//! assert_eq!(sim.tick(), TickOutcome::Idle);
//! ```
//!
//! The simulator performs no I/O and knows nothing about timers; see
//! [`crate::tracker`] for the task that drives it.

pub mod error;

pub use error::*;

use crate::model::{Route, SimulationState, StatusTier, Waypoint};

/// Minutes of travel assumed per remaining leg.
pub const MINUTES_PER_STEP: f64 = 1.5;

/// Lower bound on the ETA while the courier is still moving.
pub const MIN_ETA_MINUTES: f64 = 1.0;

/// What a single call to [`RouteSimulator::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved to a new intermediate waypoint.
    Advanced { index: usize },
    /// Reached the destination on this tick. Returned exactly once.
    Arrived { index: usize },
    /// Already delivered; nothing changed.
    Idle,
}

impl TickOutcome {
    /// True when the tick changed the simulation state.
    pub fn changed(&self) -> bool {
        !matches!(self, TickOutcome::Idle)
    }
}

/// Walks a courier along a fixed route, one waypoint per tick.
#[derive(Debug, Clone)]
pub struct RouteSimulator {
    route: Route,
    state: SimulationState,
}

impl RouteSimulator {
    /// Starts a simulation at the origin of `route`.
    pub fn new(route: Route) -> Self {
        let state = en_route_state(0, route.last_index());
        Self { route, state }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_delivered(&self) -> bool {
        self.state.delivered
    }

    /// The waypoint the courier currently occupies.
    pub fn position(&self) -> Waypoint {
        // current_index is clamped to the route on every transition
        self.route.waypoints()[self.state.current_index]
    }

    /// Advances one waypoint.
    ///
    /// Once delivered the call is a no-op. The tick that reaches (or would run
    /// past) the destination clamps the index to `N - 1` and freezes the state.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.delivered {
            return TickOutcome::Idle;
        }

        let last = self.route.last_index();
        let next = self.state.current_index + 1;

        if next >= last {
            self.state = SimulationState {
                current_index: last,
                progress_percent: 100.0,
                eta_minutes: 0.0,
                status: StatusTier::Delivered,
                delivered: true,
            };
            return TickOutcome::Arrived { index: last };
        }

        self.state = en_route_state(next, last);
        TickOutcome::Advanced { index: next }
    }
}

/// Derives the non-terminal state for `index` on a route whose destination is
/// at `last`. Requires `index < last`.
fn en_route_state(index: usize, last: usize) -> SimulationState {
    let remaining_steps = (last - index - 1) as f64;
    let status = if index + 1 == last {
        StatusTier::Nearby
    } else {
        StatusTier::EnRoute
    };
    SimulationState {
        current_index: index,
        progress_percent: (index as f64 * 100.0) / last as f64,
        eta_minutes: (remaining_steps * MINUTES_PER_STEP).max(MIN_ETA_MINUTES),
        status,
        delivered: false,
    }
}
