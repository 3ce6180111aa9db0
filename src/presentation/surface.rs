//! # Drawing Surfaces
//!
//! The presentation layer draws through two small traits so the tracker never
//! depends on a particular rendering technology:
//!
//! - [`MapSurface`]: place or move a marker, draw a path, fit the view.
//! - [`Panel`]: show a [`Dashboard`].
//!
//! [`TracingMap`] and [`TextPanel`] are the terminal implementations used by
//! the binary. [`RecordingMap`] and [`RecordingPanel`] capture every call for
//! tests; their handles are shared, so a test can keep a clone and inspect it
//! after moving the surface into a [`TrackerView`](crate::presentation::TrackerView).

use crate::model::{Bounds, Waypoint};
use crate::presentation::dashboard::Dashboard;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

/// The markers the tracker places on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// The restaurant the order leaves from.
    Origin,
    /// The customer's address.
    Destination,
    /// The courier's live position.
    Courier,
}

impl MarkerKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            MarkerKind::Origin => "🍔",
            MarkerKind::Destination => "🏠",
            MarkerKind::Courier => "🛵",
        }
    }

    /// Popup title and subtitle.
    pub fn popup(&self) -> (&'static str, &'static str) {
        match self {
            MarkerKind::Origin => ("Restaurante", "Punto de origen"),
            MarkerKind::Destination => ("Tu Ubicación", "Destino de entrega"),
            MarkerKind::Courier => ("Repartidor", "En camino"),
        }
    }
}

/// Map drawing primitive.
///
/// Placing a marker of a kind that is already on the map moves it.
pub trait MapSurface {
    fn place_marker(&mut self, kind: MarkerKind, at: Waypoint);
    fn draw_path(&mut self, path: &[Waypoint]);
    fn fit_bounds(&mut self, bounds: Bounds);
}

/// Dashboard output.
pub trait Panel {
    fn show(&mut self, dashboard: &Dashboard) -> io::Result<()>;
}

/// A map that reports its operations as structured log events and remembers
/// where each marker is.
#[derive(Debug, Default)]
pub struct TracingMap {
    markers: HashMap<MarkerKind, Waypoint>,
}

impl TracingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker(&self, kind: MarkerKind) -> Option<Waypoint> {
        self.markers.get(&kind).copied()
    }
}

impl MapSurface for TracingMap {
    fn place_marker(&mut self, kind: MarkerKind, at: Waypoint) {
        let (title, _) = kind.popup();
        let moved = self.markers.insert(kind, at).is_some();
        info!(marker = title, glyph = kind.glyph(), %at, moved, "Marker");
    }

    fn draw_path(&mut self, path: &[Waypoint]) {
        info!(points = path.len(), "Path");
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        info!(
            south_west = %bounds.south_west,
            north_east = %bounds.north_east,
            "Fit bounds"
        );
    }
}

/// Writes each dashboard as a text block to any writer (stdout in the binary).
pub struct TextPanel<W> {
    out: W,
}

impl<W: Write> TextPanel<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextPanel<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Panel for TextPanel<W> {
    fn show(&mut self, dashboard: &Dashboard) -> io::Result<()> {
        writeln!(self.out, "{dashboard}")?;
        writeln!(self.out, "{}", "─".repeat(48))?;
        self.out.flush()
    }
}

/// A call received by a [`RecordingMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    PlaceMarker(MarkerKind, Waypoint),
    DrawPath(Vec<Waypoint>),
    FitBounds(Bounds),
}

/// Records every map call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingMap {
    commands: Arc<Mutex<Vec<MapCommand>>>,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<MapCommand> {
        self.commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Successive positions of the courier marker.
    pub fn courier_trail(&self) -> Vec<Waypoint> {
        self.commands()
            .into_iter()
            .filter_map(|c| match c {
                MapCommand::PlaceMarker(MarkerKind::Courier, at) => Some(at),
                _ => None,
            })
            .collect()
    }

    fn record(&self, command: MapCommand) {
        self.commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(command);
    }
}

impl MapSurface for RecordingMap {
    fn place_marker(&mut self, kind: MarkerKind, at: Waypoint) {
        self.record(MapCommand::PlaceMarker(kind, at));
    }

    fn draw_path(&mut self, path: &[Waypoint]) {
        self.record(MapCommand::DrawPath(path.to_vec()));
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.record(MapCommand::FitBounds(bounds));
    }
}

/// Records every dashboard frame in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPanel {
    frames: Arc<Mutex<Vec<Dashboard>>>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<Dashboard> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Panel for RecordingPanel {
    fn show(&mut self, dashboard: &Dashboard) -> io::Result<()> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(dashboard.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerConfig;
    use crate::model::{Route, SimulationState, StatusTier};

    #[test]
    fn test_tracing_map_moves_markers() {
        let mut map = TracingMap::new();
        map.place_marker(MarkerKind::Courier, Waypoint::new(1.0, 2.0));
        map.place_marker(MarkerKind::Courier, Waypoint::new(3.0, 4.0));

        assert_eq!(map.marker(MarkerKind::Courier), Some(Waypoint::new(3.0, 4.0)));
        assert_eq!(map.marker(MarkerKind::Origin), None);
    }

    #[test]
    fn test_text_panel_writes_dashboard() {
        let state = SimulationState {
            current_index: 4,
            progress_percent: 80.0,
            eta_minutes: 1.0,
            status: StatusTier::Nearby,
            delivered: false,
        };
        let dashboard = Dashboard::new(&state, Route::demo().waypoints()[4], &TrackerConfig::default());

        let mut panel = TextPanel::new(Vec::new());
        panel.show(&dashboard).unwrap();
        let text = String::from_utf8(panel.into_inner()).unwrap();

        assert!(text.contains("Pedido #000123456"));
        assert!(text.contains("🚨 ¡Muy cerca!"));
        assert!(text.contains("1 min"));
        assert!(text.contains("80%"));
    }

    #[test]
    fn test_recording_map_shares_handle() {
        let recorder = RecordingMap::new();
        let mut surface = recorder.clone();
        surface.draw_path(&[Waypoint::new(0.0, 0.0), Waypoint::new(1.0, 1.0)]);
        surface.place_marker(MarkerKind::Courier, Waypoint::new(0.5, 0.5));

        assert_eq!(recorder.commands().len(), 2);
        assert_eq!(recorder.courier_trail(), vec![Waypoint::new(0.5, 0.5)]);
    }
}
