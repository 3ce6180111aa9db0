//! # Presentation
//!
//! Everything the user sees. This layer reads the simulation state and the
//! route; it never changes either.
//!
//! - [`StatusDisplay`] - tier → label / icon / colour table
//! - [`Dashboard`] - the per-state view model and its text rendering
//! - [`MapSurface`] / [`Panel`] - the drawing primitives the view depends on
//! - [`TrackerView`] - subscribes to a tracker and re-renders on every change

pub mod dashboard;
pub mod status;
pub mod surface;
pub mod view;

pub use dashboard::*;
pub use status::*;
pub use surface::*;
pub use view::*;
