use crate::simulator::RouteError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

/// A fixed geographic coordinate on the delivery route.
///
/// Latitude and longitude are in decimal degrees. Waypoints are plain values:
/// once a [`Route`] is built nothing can move them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl Display for Waypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

/// The south-west / north-east corners enclosing a set of waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: Waypoint,
    pub north_east: Waypoint,
}

impl Bounds {
    /// Returns true when `point` lies inside (or on the edge of) the box.
    pub fn contains(&self, point: Waypoint) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }

    pub fn center(&self) -> Waypoint {
        Waypoint::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// The ordered, immutable sequence of waypoints a courier follows.
///
/// The first waypoint is the origin (the restaurant), the last one the
/// destination (the customer). A route always has at least two waypoints.
///
/// Cloning is cheap: the waypoints live behind an [`Arc`] and are shared
/// read-only between the simulator and the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    waypoints: Arc<[Waypoint]>,
}

impl Route {
    /// Minimum number of waypoints: an origin and a destination.
    pub const MIN_WAYPOINTS: usize = 2;

    /// Builds a route, rejecting sequences shorter than two waypoints and
    /// coordinates outside the valid latitude/longitude ranges.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, RouteError> {
        if waypoints.len() < Self::MIN_WAYPOINTS {
            return Err(RouteError::TooFewWaypoints {
                found: waypoints.len(),
            });
        }
        if let Some(index) = waypoints.iter().position(|w| !w.is_valid()) {
            let w = waypoints[index];
            return Err(RouteError::InvalidCoordinate {
                index,
                lat: w.lat,
                lng: w.lng,
            });
        }
        Ok(Self {
            waypoints: waypoints.into(),
        })
    }

    /// The six-stop demo route through Manhattan, from the restaurant to the
    /// customer.
    pub fn demo() -> Self {
        Self {
            waypoints: Arc::new(DEMO_ROUTE),
        }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Index of the destination (`len() - 1`).
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<Waypoint> {
        self.waypoints.get(index).copied()
    }

    pub fn origin(&self) -> Waypoint {
        self.waypoints[0]
    }

    pub fn destination(&self) -> Waypoint {
        self.waypoints[self.last_index()]
    }

    /// Smallest box enclosing every waypoint.
    pub fn bounds(&self) -> Bounds {
        let first = self.origin();
        let (mut south, mut west) = (first.lat, first.lng);
        let (mut north, mut east) = (first.lat, first.lng);
        for w in self.waypoints.iter().skip(1) {
            south = south.min(w.lat);
            north = north.max(w.lat);
            west = west.min(w.lng);
            east = east.max(w.lng);
        }
        Bounds {
            south_west: Waypoint::new(south, west),
            north_east: Waypoint::new(north, east),
        }
    }
}

const DEMO_ROUTE: [Waypoint; 6] = [
    Waypoint::new(40.7600, -73.9800),
    Waypoint::new(40.7500, -73.9700),
    Waypoint::new(40.7400, -73.9600),
    Waypoint::new(40.7300, -73.9500),
    Waypoint::new(40.7200, -73.9400),
    Waypoint::new(40.7128, -74.0060),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_rejects_single_waypoint() {
        let result = Route::new(vec![Waypoint::new(1.0, 1.0)]);
        assert_eq!(result, Err(RouteError::TooFewWaypoints { found: 1 }));
    }

    #[test]
    fn test_route_rejects_out_of_range_coordinate() {
        let result = Route::new(vec![Waypoint::new(0.0, 0.0), Waypoint::new(91.0, 0.0)]);
        assert!(matches!(
            result,
            Err(RouteError::InvalidCoordinate { index: 1, .. })
        ));

        let result = Route::new(vec![Waypoint::new(f64::NAN, 0.0), Waypoint::new(0.0, 0.0)]);
        assert!(matches!(
            result,
            Err(RouteError::InvalidCoordinate { index: 0, .. })
        ));
    }

    #[test]
    fn test_demo_route_endpoints() {
        let route = Route::demo();
        assert_eq!(route.len(), 6);
        assert_eq!(route.last_index(), 5);
        assert_eq!(route.origin(), Waypoint::new(40.7600, -73.9800));
        assert_eq!(route.destination(), Waypoint::new(40.7128, -74.0060));
        assert_eq!(route.get(6), None);
    }

    #[test]
    fn test_bounds_enclose_every_waypoint() {
        let route = Route::demo();
        let bounds = route.bounds();

        assert_eq!(bounds.south_west, Waypoint::new(40.7128, -74.0060));
        assert_eq!(bounds.north_east, Waypoint::new(40.7600, -73.9400));
        assert!(route.waypoints().iter().all(|w| bounds.contains(*w)));
        assert!(bounds.contains(bounds.center()));
    }

    #[test]
    fn test_waypoint_display() {
        assert_eq!(Waypoint::new(40.76, -73.98).to_string(), "(40.7600, -73.9800)");
    }
}
