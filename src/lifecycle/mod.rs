//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the tasks that make up a tracked order.
//!
//! ## The TrackingSystem Pattern
//!
//! ```rust,ignore
//! impl TrackingSystem {
//!     pub fn new(route, config, map, panel) -> Result<Self, TrackerError> {
//!         // 1. Create the tracker and its client
//!         let (actor, client) = TrackerActor::new(route, &config)?;
//!
//!         // 2. Start the tracker, then the view with its own client clone
//!         let tracker_handle = tokio::spawn(actor.run());
//!         let view_handle = tokio::spawn(TrackerView::new(map, panel, config).run(client.clone()));
//!
//!         Ok(Self { client, handles: vec![tracker_handle, view_handle] })
//!     }
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the request channel
//! 2. **Tracker detects closure** - `receiver.recv()` returns `None`, the loop
//!    exits and the timer is dropped with it
//! 3. **View detects closure** - the tracker's `watch` sender is gone, so
//!    `changed()` errors and the render loop ends
//! 4. **Await completion** - both task handles are joined
//!
//! The view drops its client clone right after subscribing, so it never keeps
//! the tracker alive on its own.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging for the process. See the
//! [`tracing`] module for what is logged at each level.

pub mod tracing;
pub mod tracking_system;

pub use self::tracing::*;
pub use self::tracking_system::*;
