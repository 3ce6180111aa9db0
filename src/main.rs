//! Runs the demo order: a courier crossing Manhattan, one waypoint every three
//! seconds, with the dashboard printed to stdout on every update.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use order_tracker::config::TrackerConfig;
use order_tracker::lifecycle::{setup_tracing, TrackingSystem};
use order_tracker::model::Route;
use order_tracker::presentation::{TextPanel, TracingMap};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = TrackerConfig::default();
    info!(order = %config.order_reference, "Starting live order tracking");

    let system = TrackingSystem::new(
        Route::demo(),
        config,
        TracingMap::new(),
        TextPanel::stdout(),
    )?;

    let span = tracing::info_span!("delivery");
    let state = async {
        info!("Waiting for the courier");
        system.wait_until_delivered().await
    }
    .instrument(span)
    .await?;

    info!(index = state.current_index, "Order completed");

    system.shutdown().await?;
    Ok(())
}
