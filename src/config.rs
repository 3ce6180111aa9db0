//! # Tracker Configuration
//!
//! Everything the tracker needs besides the route. Defaults reproduce the demo
//! order: a three-second refresh and the courier shown on the dashboard.
//!
//! The configuration is plain data (`serde` derives) so callers can build it in
//! code or deserialize it from whatever format they already use.

use crate::simulator::RouteError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default period between two simulated position updates.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(3);

/// Default capacity of the tracker's request channel.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// The courier card shown next to the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierProfile {
    pub name: String,
    pub rating: f32,
    pub deliveries: u32,
}

impl Default for CourierProfile {
    fn default() -> Self {
        Self {
            name: "Juan Pérez".to_string(),
            rating: 4.9,
            deliveries: 1234,
        }
    }
}

/// Runtime settings for a [`TrackingSystem`](crate::lifecycle::TrackingSystem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Time between two ticks of the simulation.
    pub tick_period: Duration,
    /// Capacity of the request channel between clients and the tracker.
    pub buffer_size: usize,
    /// Order reference displayed in the header.
    pub order_reference: String,
    pub courier: CourierProfile,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            buffer_size: DEFAULT_BUFFER_SIZE,
            order_reference: "#000123456".to_string(),
            courier: CourierProfile::default(),
        }
    }
}

impl TrackerConfig {
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn with_order_reference(mut self, reference: impl Into<String>) -> Self {
        self.order_reference = reference.into();
        self
    }

    /// Rejects settings the tracker cannot run with.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.tick_period.is_zero() {
            return Err(RouteError::ZeroPeriod);
        }
        if self.buffer_size == 0 {
            return Err(RouteError::ZeroBuffer);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_order() {
        let config = TrackerConfig::default();
        assert_eq!(config.tick_period, Duration::from_secs(3));
        assert_eq!(config.buffer_size, 32);
        assert_eq!(config.order_reference, "#000123456");
        assert_eq!(config.courier.name, "Juan Pérez");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_period() {
        let config = TrackerConfig::default().with_tick_period(Duration::ZERO);
        assert_eq!(config.validate(), Err(RouteError::ZeroPeriod));
    }

    #[test]
    fn test_validate_rejects_zero_buffer() {
        let config = TrackerConfig {
            buffer_size: 0,
            ..TrackerConfig::default()
        };
        assert_eq!(config.validate(), Err(RouteError::ZeroBuffer));
    }
}
