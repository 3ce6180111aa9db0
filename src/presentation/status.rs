//! Tier → label / icon / colour lookup.

use crate::model::StatusTier;
use serde::Serialize;
use std::fmt::Display;

/// Accent colour associated with a status tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Accent {
    Blue,
    Orange,
    Green,
}

impl Display for Accent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Accent::Blue => "blue",
            Accent::Orange => "orange",
            Accent::Green => "green",
        })
    }
}

/// How a [`StatusTier`] is shown on the status card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

const EN_ROUTE: StatusDisplay = StatusDisplay {
    label: "En camino hacia ti",
    icon: "🚗",
    accent: Accent::Blue,
};

const NEARBY: StatusDisplay = StatusDisplay {
    label: "¡Muy cerca!",
    icon: "🚨",
    accent: Accent::Orange,
};

const DELIVERED: StatusDisplay = StatusDisplay {
    label: "¡Entregado!",
    icon: "🎉",
    accent: Accent::Green,
};

impl StatusDisplay {
    pub fn for_tier(tier: StatusTier) -> Self {
        match tier {
            StatusTier::EnRoute => EN_ROUTE,
            StatusTier::Nearby => NEARBY,
            StatusTier::Delivered => DELIVERED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_table() {
        let en_route = StatusDisplay::for_tier(StatusTier::EnRoute);
        assert_eq!(en_route.label, "En camino hacia ti");
        assert_eq!(en_route.icon, "🚗");
        assert_eq!(en_route.accent, Accent::Blue);

        let nearby = StatusDisplay::for_tier(StatusTier::Nearby);
        assert_eq!(nearby.label, "¡Muy cerca!");
        assert_eq!(nearby.accent, Accent::Orange);

        let delivered = StatusDisplay::for_tier(StatusTier::Delivered);
        assert_eq!(delivered.icon, "🎉");
        assert_eq!(delivered.accent.to_string(), "green");
    }
}
