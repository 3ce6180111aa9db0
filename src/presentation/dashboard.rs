//! # Dashboard
//!
//! The view model rendered next to the map: header, progress bar, status,
//! ETA and courier cards, and the delivered footer. It is rebuilt from scratch
//! on every state change; nothing here is mutable.

use crate::config::{CourierProfile, TrackerConfig};
use crate::model::{SimulationState, Waypoint};
use crate::presentation::status::StatusDisplay;
use serde::Serialize;
use std::fmt::Display;
use std::time::Duration;

/// Width of the text progress bar, in cells.
pub const PROGRESS_BAR_WIDTH: usize = 20;

/// The "call the courier" button. Disabled once the order is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactAction {
    pub enabled: bool,
    pub label: &'static str,
}

/// Everything the panel shows for one simulation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub order_reference: String,
    pub delivered: bool,
    pub status: StatusDisplay,
    pub progress_percent: f64,
    pub eta_minutes: f64,
    pub position: Waypoint,
    pub courier: CourierProfile,
    pub contact: ContactAction,
    pub refresh_period: Duration,
}

impl Dashboard {
    pub fn new(state: &SimulationState, position: Waypoint, config: &TrackerConfig) -> Self {
        let contact = if state.delivered {
            ContactAction {
                enabled: false,
                label: "¡Disfruta!",
            }
        } else {
            ContactAction {
                enabled: true,
                label: "Llamar Ahora",
            }
        };
        Self {
            order_reference: config.order_reference.clone(),
            delivered: state.delivered,
            status: StatusDisplay::for_tier(state.status),
            progress_percent: state.progress_percent,
            eta_minutes: state.eta_minutes,
            position,
            courier: config.courier.clone(),
            contact,
            refresh_period: config.tick_period,
        }
    }

    /// Header badge: live while moving, finished once delivered.
    pub fn badge(&self) -> &'static str {
        if self.delivered {
            "✓ FINALIZADO"
        } else {
            "● EN VIVO"
        }
    }

    /// Progress rounded to a whole percent.
    pub fn progress_label(&self) -> String {
        format!("{}%", self.progress_percent.round().clamp(0.0, 100.0))
    }

    /// Fixed-width bar, `█` for the covered part and `░` for the rest.
    pub fn progress_bar(&self, width: usize) -> String {
        let ratio = (self.progress_percent / 100.0).clamp(0.0, 1.0);
        let filled = (ratio * width as f64).round() as usize;
        let mut bar = "█".repeat(filled);
        bar.push_str(&"░".repeat(width - filled));
        bar
    }

    /// ETA in minutes, without a trailing `.0` for whole numbers.
    pub fn eta_text(&self) -> String {
        format!("{} min", self.eta_minutes)
    }

    pub fn eta_caption(&self) -> &'static str {
        if self.delivered {
            "¡Ya llegó!"
        } else {
            "Tiempo restante aproximado"
        }
    }

    pub fn refresh_caption(&self) -> String {
        format!("Actualización cada {} seg", self.refresh_period.as_secs_f64())
    }

    /// Confirmation shown under the map once the order arrived.
    pub fn footer(&self) -> Option<&'static str> {
        self.delivered.then_some("¡Pedido Entregado! Esperamos que disfrutes tu comida 🎉")
    }
}

impl Display for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Seguimiento en Vivo · Pedido {}  [{}]",
            self.order_reference,
            self.badge()
        )?;
        writeln!(
            f,
            "Progreso de Entrega {} {}",
            self.progress_bar(PROGRESS_BAR_WIDTH),
            self.progress_label()
        )?;
        writeln!(
            f,
            "Estado: {} {} ({})",
            self.status.icon, self.status.label, self.status.accent
        )?;
        writeln!(
            f,
            "Tiempo Estimado: {} · {} · {}",
            self.eta_text(),
            self.eta_caption(),
            self.refresh_caption()
        )?;
        writeln!(
            f,
            "Repartidor: {} ⭐ {} · {} entregas · [{}{}]",
            self.courier.name,
            self.courier.rating,
            self.courier.deliveries,
            self.contact.label,
            if self.contact.enabled { "" } else { " (deshabilitado)" }
        )?;
        write!(f, "Posición actual: {}", self.position)?;
        if let Some(footer) = self.footer() {
            write!(f, "\n{footer}")?;
        }
        Ok(())
    }
}
