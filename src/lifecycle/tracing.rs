//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate for the whole process.
//!
//! ## Configuration
//!
//! The compact format hides the module prefix (`with_target(false)`) and shows
//! spans inline, so a client call reads as `snapshot: Sending request`.
//! Verbosity comes from `RUST_LOG`; without it nothing is logged.
//!
//! ```bash
//! # Lifecycle only: start, delivery, shutdown, markers
//! RUST_LOG=info cargo run
//!
//! # Every tick with progress, ETA and tier
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Tracker lifecycle**: `Tracker started`, `Delivered, timer stopped`, `Shutdown`
//! - **Ticks**: `Advanced index=2 progress=40 eta=3 status=en_route` (debug)
//! - **Client requests**: one span per call (`snapshot`, `tick`, `subscribe`, `route`)
//! - **Map operations**: `Marker marker="Repartidor" glyph="🛵" at=(40.7400, -73.9600) moved=true`
//!
//! With `RUST_LOG=debug` a full run of the demo route looks like:
//!
//! ```text
//! INFO Tracker started waypoints=6 period_ms=3000
//! INFO Path points=6
//! INFO Fit bounds south_west=(40.7128, -74.0060) north_east=(40.7600, -73.9400)
//! DEBUG Advanced source="timer" index=1 progress=20 eta=4.5 status=en_route
//! ...
//! DEBUG Advanced source="timer" index=4 progress=80 eta=1 status=nearby
//! INFO Delivered, timer stopped source="timer" index=5
//! INFO View closed index=5 delivered=true
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
