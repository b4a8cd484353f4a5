//! Smart light — a power switch plus a brightness level.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

use super::{PowerState, impl_switchable};

/// A simulated dimmable light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartLight {
    id: DeviceId,
    power: PowerState,
    brightness: i32,
}

impl SmartLight {
    /// Create a light with the given power state and brightness level.
    #[must_use]
    pub fn new(id: impl Into<DeviceId>, power: PowerState, brightness: i32) -> Self {
        Self {
            id: id.into(),
            power,
            brightness,
        }
    }

    /// Current brightness level in percent.
    #[must_use]
    pub fn brightness(&self) -> i32 {
        self.brightness
    }

    /// Set the brightness level.
    ///
    /// The documented range is 0–100 inclusive. Values outside it are stored
    /// as given; the range is a contract with callers, not an enforced
    /// invariant.
    pub fn set_brightness(&mut self, brightness: i32) {
        self.brightness = brightness;
    }

    /// Formatted label, e.g. `"Living Room Light - 80%"`.
    #[must_use]
    pub fn label_text(&self) -> String {
        format!("{} - {}%", self.id, self.brightness)
    }

    /// Sensor log message for the current brightness.
    #[must_use]
    pub fn log_message(&self) -> String {
        format!("{} brightness set to {}%", self.id, self.brightness)
    }
}

impl_switchable!(SmartLight);

#[cfg(test)]
mod tests {
    use super::*;

    fn living_room_light() -> SmartLight {
        SmartLight::new("Living Room Light", PowerState::Off, 40)
    }

    #[test]
    fn should_report_on_after_turn_on() {
        let mut light = living_room_light();
        light.turn_on();
        assert!(light.is_on());
    }

    #[test]
    fn should_report_off_after_turn_off() {
        let mut light = living_room_light();
        light.turn_on();
        light.turn_off();
        assert!(!light.is_on());
    }

    #[test]
    fn should_flip_prior_state_when_toggling_power() {
        let mut light = living_room_light();
        light.toggle_power();
        assert!(light.is_on());
        light.toggle_power();
        assert!(!light.is_on());
    }

    #[test]
    fn should_store_brightness_as_given() {
        let mut light = living_room_light();
        light.set_brightness(100);
        assert_eq!(light.brightness(), 100);
    }

    #[test]
    fn should_accept_out_of_range_brightness_unchanged() {
        // The 0–100 range is a documented contract, not enforced.
        let mut light = living_room_light();
        light.set_brightness(-5);
        assert_eq!(light.brightness(), -5);
        light.set_brightness(250);
        assert_eq!(light.brightness(), 250);
    }

    #[test]
    fn should_format_status_text() {
        let mut light = living_room_light();
        assert_eq!(light.status_text(), "SmartLight Status: Off");
        light.turn_on();
        assert_eq!(light.status_text(), "SmartLight Status: On");
    }

    #[test]
    fn should_format_label_text() {
        let light = living_room_light();
        assert_eq!(light.label_text(), "Living Room Light - 40%");
    }

    #[test]
    fn should_format_log_message() {
        let light = living_room_light();
        assert_eq!(
            light.log_message(),
            "Living Room Light brightness set to 40%"
        );
    }
}
