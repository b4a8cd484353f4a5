//! Thermostat — a power switch plus a temperature setting.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

use super::{PowerState, impl_switchable};

/// A simulated thermostat holding a temperature in °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thermostat {
    id: DeviceId,
    power: PowerState,
    temperature: f64,
}

impl Thermostat {
    /// Create a thermostat with the given power state and temperature.
    #[must_use]
    pub fn new(id: impl Into<DeviceId>, power: PowerState, temperature: f64) -> Self {
        Self {
            id: id.into(),
            power,
            temperature,
        }
    }

    /// Current temperature in °C.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Set the temperature in °C.
    ///
    /// The documented range is 0–100 inclusive; values outside it are stored
    /// as given, like every property setter in the simulation.
    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    /// Formatted label, e.g. `"Living Room Thermostat - 21.5°C"`.
    #[must_use]
    pub fn label_text(&self) -> String {
        format!("{} - {}°C", self.id, format_celsius(self.temperature))
    }

    /// Sensor log message for the current temperature.
    #[must_use]
    pub fn log_message(&self) -> String {
        format!(
            "{} temperature set to {}°C",
            self.id,
            format_celsius(self.temperature)
        )
    }
}

/// Render a temperature for labels and log lines. Whole degrees keep a
/// trailing `.0` (`22.0`), fractional values print as stored (`22.25`).
fn format_celsius(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

impl_switchable!(Thermostat);
