//! # Tracker Actor
//!
//! The task that owns a [`RouteSimulator`] and drives it on a fixed cadence.
//! It implements the "server" side of the tracker: requests from clients and
//! timer ticks are handled one at a time in a single loop, so the simulation
//! state needs no locking.

use crate::config::TrackerConfig;
use crate::model::{Route, SimulationState};
use crate::simulator::{RouteSimulator, TickOutcome};
use crate::tracker::client::TrackerClient;
use crate::tracker::error::TrackerError;
use crate::tracker::message::TrackerRequest;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Owns the simulation and publishes every change to subscribers.
///
/// # Event Loop
///
/// [`run`](TrackerActor::run) selects between two sources:
///
/// * **Requests** from any [`TrackerClient`] clone (`Snapshot`, `Tick`,
///   `Subscribe`, `Route`).
/// * **The timer**, firing once per `tick_period`. The first tick happens one
///   full period after start. The timer branch is switched off as soon as the
///   courier arrives, so a delivered tracker does no more periodic work.
///
/// Each state change is pushed into a `watch` channel. Subscribers always see
/// the latest state; a slow subscriber skips intermediate ones instead of
/// queueing them.
///
/// # Shutdown
///
/// The loop ends when every client has been dropped. Dropping the actor drops
/// the `watch` sender, which in turn ends every subscriber's `changed()` loop.
///
/// ```rust
/// use order_tracker::config::TrackerConfig;
/// use order_tracker::model::Route;
/// use order_tracker::tracker::TrackerActor;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = TrackerActor::new(Route::demo(), &TrackerConfig::default()).unwrap();
///     tokio::spawn(actor.run());
///
///     client.tick().await.unwrap();
///     let state = client.snapshot().await.unwrap();
///     assert_eq!(state.current_index, 1);
/// }
/// ```
pub struct TrackerActor {
    receiver: mpsc::Receiver<TrackerRequest>,
    simulator: RouteSimulator,
    publisher: watch::Sender<SimulationState>,
    tick_period: Duration,
}

impl TrackerActor {
    /// Creates a tracker at the origin of `route` and the client that talks to it.
    ///
    /// Fails when the configuration has a zero tick period or a zero buffer.
    pub fn new(route: Route, config: &TrackerConfig) -> Result<(Self, TrackerClient), TrackerError> {
        config.validate()?;

        let (sender, receiver) = mpsc::channel(config.buffer_size);
        let simulator = RouteSimulator::new(route);
        let (publisher, _) = watch::channel(*simulator.state());
        let actor = Self {
            receiver,
            simulator,
            publisher,
            tick_period: config.tick_period,
        };
        Ok((actor, TrackerClient::new(sender)))
    }

    /// Runs the tracker until every client is dropped.
    pub async fn run(mut self) {
        info!(
            waypoints = self.simulator.route().len(),
            period_ms = self.tick_period.as_millis() as u64,
            "Tracker started"
        );

        let mut ticker = time::interval_at(Instant::now() + self.tick_period, self.tick_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(msg) => self.handle(msg),
                    None => break,
                },
                _ = ticker.tick(), if !self.simulator.is_delivered() => {
                    self.advance("timer");
                }
            }
        }

        let state = self.simulator.state();
        info!(
            index = state.current_index,
            delivered = state.delivered,
            "Shutdown"
        );
    }

    fn handle(&mut self, msg: TrackerRequest) {
        match msg {
            TrackerRequest::Snapshot { respond_to } => {
                debug!("Snapshot");
                let _ = respond_to.send(Ok(*self.simulator.state()));
            }
            TrackerRequest::Tick { respond_to } => {
                let outcome = self.advance("request");
                let _ = respond_to.send(Ok(outcome));
            }
            TrackerRequest::Subscribe { respond_to } => {
                debug!(subscribers = self.publisher.receiver_count() + 1, "Subscribe");
                let _ = respond_to.send(Ok(self.publisher.subscribe()));
            }
            TrackerRequest::Route { respond_to } => {
                debug!("Route");
                let _ = respond_to.send(Ok(self.simulator.route().clone()));
            }
        }
    }

    fn advance(&mut self, source: &'static str) -> TickOutcome {
        let outcome = self.simulator.tick();
        let state = *self.simulator.state();
        match outcome {
            TickOutcome::Advanced { index } => debug!(
                source,
                index,
                progress = state.progress_percent,
                eta = state.eta_minutes,
                status = %state.status,
                "Advanced"
            ),
            TickOutcome::Arrived { index } => info!(source, index, "Delivered, timer stopped"),
            TickOutcome::Idle => debug!(source, "Already delivered"),
        }
        if outcome.changed() {
            self.publisher.send_replace(state);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatusTier;

    fn config(period_ms: u64) -> TrackerConfig {
        TrackerConfig::default().with_tick_period(Duration::from_millis(period_ms))
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = TrackerActor::new(Route::demo(), &config(0));
        assert!(matches!(result, Err(TrackerError::InvalidRoute(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_drives_route_to_delivery() {
        let (actor, client) = TrackerActor::new(Route::demo(), &config(3000)).unwrap();
        let handle = tokio::spawn(actor.run());

        // nothing happens before the first period elapses
        time::sleep(Duration::from_millis(2900)).await;
        assert_eq!(client.snapshot().await.unwrap().current_index, 0);

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(client.snapshot().await.unwrap().current_index, 1);

        time::sleep(Duration::from_secs(12)).await;
        let state = client.snapshot().await.unwrap();
        assert!(state.delivered);
        assert_eq!(state.status, StatusTier::Delivered);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_frozen_after_delivery() {
        let (actor, client) = TrackerActor::new(Route::demo(), &config(1000)).unwrap();
        tokio::spawn(actor.run());

        time::sleep(Duration::from_millis(5500)).await;
        let delivered = client.snapshot().await.unwrap();
        assert!(delivered.delivered);

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(client.snapshot().await.unwrap(), delivered);
        assert_eq!(client.tick().await.unwrap(), TickOutcome::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_ticks_publish_to_subscribers() {
        let (actor, client) = TrackerActor::new(Route::demo(), &config(60_000)).unwrap();
        tokio::spawn(actor.run());

        let mut updates = client.subscribe().await.unwrap();
        assert_eq!(updates.borrow_and_update().current_index, 0);

        assert_eq!(client.tick().await.unwrap(), TickOutcome::Advanced { index: 1 });
        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().current_index, 1);
    }

    #[tokio::test]
    async fn test_subscribers_end_when_tracker_stops() {
        let (actor, client) = TrackerActor::new(Route::demo(), &config(60_000)).unwrap();
        let handle = tokio::spawn(actor.run());

        let mut updates = client.subscribe().await.unwrap();
        drop(client);
        handle.await.unwrap();

        assert!(updates.changed().await.is_err());
    }
}
