//! # Order Tracker
//!
//! > **A live order-tracking screen driven by a simulated courier.**
//!
//! A courier walks a fixed route of waypoints, one waypoint per tick. Each
//! tick recomputes progress, ETA and a coarse status tier, and every change is
//! pushed to a view that moves the courier marker and redraws the dashboard.
//! There is no GPS and no backend: the route is a hard-coded list and the
//! "live" feed is a timer.
//!
//! ## 🏗️ Design
//!
//! ### Pure core, async shell
//! The [`simulator`] is a plain synchronous state machine with no I/O. The
//! [`tracker`] wraps it in a Tokio task that owns the timer and the subscriber
//! list, so the state machine can be tested without a runtime and the runtime
//! can be tested with paused time.
//!
//! ### Observer, not callbacks
//! The tracker publishes through a `watch` channel. Views pull the latest state
//! when notified; a slow view skips states rather than queueing them.
//!
//! ### Rendering at the edge
//! The tier → label/icon/colour table and all text live in [`presentation`].
//! The simulator only knows indices and numbers.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Waypoint`](model::Waypoint), [`Route`](model::Route),
//! [`SimulationState`](model::SimulationState), [`StatusTier`](model::StatusTier).
//!
//! ### 2. The State Machine ([`simulator`])
//! [`RouteSimulator::tick`](simulator::RouteSimulator::tick) advances one
//! waypoint; the step reaching the destination is terminal.
//!
//! ### 3. The Engine ([`tracker`])
//! [`TrackerActor`](tracker::TrackerActor) drives the simulator on a fixed
//! period; [`TrackerClient`](tracker::TrackerClient) is the cloneable handle.
//!
//! ### 4. The Screen ([`presentation`])
//! [`TrackerView`](presentation::TrackerView) renders onto a
//! [`MapSurface`](presentation::MapSurface) and a [`Panel`](presentation::Panel).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`TrackingSystem`](lifecycle::TrackingSystem) starts, wires and stops it all.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo order with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests (timer tests use paused time and finish instantly)
//! cargo test
//! ```

pub mod config;
pub mod lifecycle;
pub mod model;
pub mod presentation;
pub mod simulator;
pub mod tracker;
