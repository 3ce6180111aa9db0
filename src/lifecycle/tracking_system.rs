use crate::config::TrackerConfig;
use crate::model::{Route, SimulationState};
use crate::presentation::{MapSurface, Panel, TrackerView};
use crate::tracker::{TrackerActor, TrackerClient, TrackerError};
use tracing::{error, info};

/// The runtime orchestrator for one tracked order.
///
/// `TrackingSystem` is responsible for:
/// - **Lifecycle Management**: starting the tracker and its view, and stopping both
/// - **Wiring**: handing the view a client so it can subscribe to state changes
///
/// # Example
///
/// ```rust
/// use order_tracker::config::TrackerConfig;
/// use order_tracker::lifecycle::TrackingSystem;
/// use order_tracker::model::Route;
/// use order_tracker::presentation::{RecordingMap, RecordingPanel};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = TrackerConfig::default().with_tick_period(Duration::from_millis(10));
///     let panel = RecordingPanel::new();
///     let system = TrackingSystem::new(Route::demo(), config, RecordingMap::new(), panel.clone())?;
///
///     let state = system.wait_until_delivered().await?;
///     assert!(state.delivered);
///
///     system.shutdown().await?;
///     assert!(panel.frames().last().unwrap().delivered);
///     Ok(())
/// }
/// ```
pub struct TrackingSystem {
    /// Client for interacting with the tracker
    pub client: TrackerClient,

    /// Task handles for the tracker and the view (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TrackingSystem {
    /// Starts a tracker for `route` and a view rendering it onto `map` and `panel`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new<M, P>(route: Route, config: TrackerConfig, map: M, panel: P) -> Result<Self, TrackerError>
    where
        M: MapSurface + Send + 'static,
        P: Panel + Send + 'static,
    {
        let (actor, client) = TrackerActor::new(route, &config)?;
        let tracker_handle = tokio::spawn(actor.run());

        let view = TrackerView::new(map, panel, config);
        let view_client = client.clone();
        let view_handle = tokio::spawn(async move {
            if let Err(e) = view.run(view_client).await {
                error!(error = %e, "View failed");
            }
        });

        Ok(Self {
            client,
            handles: vec![tracker_handle, view_handle],
        })
    }

    /// Starts a tracker without any view attached.
    pub fn headless(route: Route, config: TrackerConfig) -> Result<Self, TrackerError> {
        let (actor, client) = TrackerActor::new(route, &config)?;
        let handle = tokio::spawn(actor.run());
        Ok(Self {
            client,
            handles: vec![handle],
        })
    }

    /// Waits until the courier reaches the destination and returns the final state.
    pub async fn wait_until_delivered(&self) -> Result<SimulationState, TrackerError> {
        let mut updates = self.client.subscribe().await?;
        let state = *updates
            .wait_for(|s| s.delivered)
            .await
            .map_err(|_| TrackerError::ActorDropped)?;
        info!(index = state.current_index, "Order delivered");
        Ok(state)
    }

    /// Gracefully shuts down the tracker and its view.
    ///
    /// Dropping the client closes the tracker's request channel; the tracker
    /// exits its loop and drops its publisher, which ends the view. Returns an
    /// error if either task panicked.
    pub async fn shutdown(self) -> Result<(), TrackerError> {
        info!("Shutting down tracker...");

        drop(self.client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(TrackerError::TaskFailed(e.to_string()));
            }
        }

        info!("Tracker shutdown complete.");
        Ok(())
    }
}
