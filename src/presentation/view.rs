//! # Tracker View
//!
//! The consumer side of the tracker. It subscribes once, draws the static parts
//! of the map (path, bounds, origin and destination markers), then redraws the
//! courier marker and the dashboard every time the state changes.

use crate::config::TrackerConfig;
use crate::model::{Route, SimulationState};
use crate::presentation::dashboard::Dashboard;
use crate::presentation::surface::{MapSurface, MarkerKind, Panel};
use crate::tracker::{TrackerClient, TrackerError};
use tracing::{debug, info, warn};

/// Renders a tracker onto a map surface and a dashboard panel.
pub struct TrackerView<M, P> {
    map: M,
    panel: P,
    config: TrackerConfig,
}

impl<M: MapSurface, P: Panel> TrackerView<M, P> {
    pub fn new(map: M, panel: P, config: TrackerConfig) -> Self {
        Self { map, panel, config }
    }

    /// Mounts the view and re-renders on every change until the order is
    /// delivered or the tracker shuts down.
    ///
    /// The client is only used to fetch the route and subscribe; it is dropped
    /// before rendering starts so the view never keeps the tracker alive.
    pub async fn run(mut self, client: TrackerClient) -> Result<(), TrackerError> {
        let route = client.route().await?;
        let mut updates = client.subscribe().await?;
        drop(client);

        self.mount(&route);

        let mut state = *updates.borrow_and_update();
        self.render(&route, &state);
        while !state.delivered {
            if updates.changed().await.is_err() {
                debug!("Tracker gone");
                break;
            }
            state = *updates.borrow_and_update();
            self.render(&route, &state);
        }

        info!(
            index = state.current_index,
            delivered = state.delivered,
            "View closed"
        );
        Ok(())
    }

    fn mount(&mut self, route: &Route) {
        self.map.draw_path(route.waypoints());
        self.map.fit_bounds(route.bounds());
        self.map.place_marker(MarkerKind::Origin, route.origin());
        self.map.place_marker(MarkerKind::Destination, route.destination());
    }

    fn render(&mut self, route: &Route, state: &SimulationState) {
        let Some(position) = route.get(state.current_index) else {
            warn!(index = state.current_index, "Index outside route");
            return;
        };
        self.map.place_marker(MarkerKind::Courier, position);

        let dashboard = Dashboard::new(state, position, &self.config);
        if let Err(e) = self.panel.show(&dashboard) {
            warn!(error = %e, "Panel write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StatusTier, Waypoint};
    use crate::presentation::surface::{MapCommand, RecordingMap, RecordingPanel};
    use crate::tracker::mock::{create_mock_client, expect_route, expect_subscribe};
    use tokio::sync::watch;

    fn state(index: usize, last: usize) -> SimulationState {
        let delivered = index == last;
        SimulationState {
            current_index: index,
            progress_percent: index as f64 * 100.0 / last as f64,
            eta_minutes: if delivered { 0.0 } else { 1.0 },
            status: if delivered {
                StatusTier::Delivered
            } else {
                StatusTier::EnRoute
            },
            delivered,
        }
    }

    async fn wait_for_frames(panel: &RecordingPanel, count: usize) {
        while panel.frames().len() < count {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_view_mounts_then_follows_updates() {
        let route = Route::new(vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(1.0, 1.0),
            Waypoint::new(2.0, 2.0),
        ])
        .unwrap();
        let (client, mut receiver) = create_mock_client(4);
        let map = RecordingMap::new();
        let panel = RecordingPanel::new();
        let view = TrackerView::new(map.clone(), panel.clone(), TrackerConfig::default());
        let task = tokio::spawn(view.run(client));

        expect_route(&mut receiver)
            .await
            .expect("Expected Route request")
            .send(Ok(route.clone()))
            .unwrap();
        let (publisher, subscriber) = watch::channel(state(0, 2));
        expect_subscribe(&mut receiver)
            .await
            .expect("Expected Subscribe request")
            .send(Ok(subscriber))
            .unwrap();

        wait_for_frames(&panel, 1).await;
        publisher.send_replace(state(1, 2));
        wait_for_frames(&panel, 2).await;
        publisher.send_replace(state(2, 2));

        task.await.unwrap().unwrap();

        let commands = map.commands();
        assert_eq!(commands[0], MapCommand::DrawPath(route.waypoints().to_vec()));
        assert_eq!(commands[1], MapCommand::FitBounds(route.bounds()));
        assert_eq!(
            commands[2],
            MapCommand::PlaceMarker(MarkerKind::Origin, route.origin())
        );
        assert_eq!(
            commands[3],
            MapCommand::PlaceMarker(MarkerKind::Destination, route.destination())
        );

        assert_eq!(map.courier_trail(), route.waypoints().to_vec());

        let frames = panel.frames();
        assert_eq!(frames.len(), 3);
        assert!(frames[0].contact.enabled && frames[1].contact.enabled);
        assert!(frames[2].delivered);
        assert!(!frames[2].contact.enabled);
        assert_eq!(frames[2].badge(), "✓ FINALIZADO");
    }

    #[tokio::test]
    async fn test_view_stops_when_tracker_drops() {
        let (client, mut receiver) = create_mock_client(4);
        let panel = RecordingPanel::new();
        let view = TrackerView::new(RecordingMap::new(), panel.clone(), TrackerConfig::default());
        let task = tokio::spawn(view.run(client));

        expect_route(&mut receiver)
            .await
            .unwrap()
            .send(Ok(Route::demo()))
            .unwrap();
        let (publisher, subscriber) = watch::channel(state(0, 5));
        expect_subscribe(&mut receiver)
            .await
            .unwrap()
            .send(Ok(subscriber))
            .unwrap();
        drop(publisher);

        task.await.unwrap().unwrap();
        assert_eq!(panel.frames().len(), 1);
    }

    #[tokio::test]
    async fn test_view_reports_closed_tracker() {
        let (client, receiver) = create_mock_client(4);
        drop(receiver);

        let view = TrackerView::new(RecordingMap::new(), RecordingPanel::new(), TrackerConfig::default());
        assert_eq!(view.run(client).await, Err(TrackerError::ActorClosed));
    }
}
