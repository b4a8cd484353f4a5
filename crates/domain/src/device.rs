//! Device model — the closed set of simulated device kinds.
//!
//! Every device carries an identifier and an on/off power state; each kind
//! adds exactly one domain-specific property (brightness, temperature, or a
//! motion reading). Dispatch over kinds is by pattern matching on [`Device`].

mod camera;
mod light;
mod thermostat;

pub use camera::{MotionState, SecurityCamera};
pub use light::SmartLight;
pub use thermostat::Thermostat;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

/// On/off state shared by every device kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    /// The flipped state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    /// Whether this is the on state.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("On"),
            Self::Off => f.write_str("Off"),
        }
    }
}

/// Implements the power-switch capability shared by all device kinds.
///
/// Expects the annotated struct to have `id: DeviceId` and
/// `power: PowerState` fields. The struct name is interpolated into the
/// status text, e.g. `"SmartLight Status: On"`.
macro_rules! impl_switchable {
    ($device:ident) => {
        impl $device {
            /// The identifier assigned at discovery.
            #[must_use]
            pub fn id(&self) -> &crate::id::DeviceId {
                &self.id
            }

            /// Current power state.
            #[must_use]
            pub fn power(&self) -> crate::device::PowerState {
                self.power
            }

            /// Whether the device is powered on.
            #[must_use]
            pub fn is_on(&self) -> bool {
                self.power.is_on()
            }

            /// Switch the device on.
            pub fn turn_on(&mut self) {
                self.power = crate::device::PowerState::On;
            }

            /// Switch the device off.
            pub fn turn_off(&mut self) {
                self.power = crate::device::PowerState::Off;
            }

            /// Flip the power state.
            pub fn toggle_power(&mut self) {
                self.power = self.power.toggled();
            }

            #[doc = concat!("Formatted status, e.g. `\"", stringify!($device), " Status: On\"`.")]
            #[must_use]
            pub fn status_text(&self) -> String {
                format!(concat!(stringify!($device), " Status: {}"), self.power)
            }
        }
    };
}

pub(crate) use impl_switchable;

/// A controllable device in the simulation.
///
/// The set of kinds is closed; adding a kind means adding a variant and the
/// match arms that go with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Device {
    Light(SmartLight),
    Thermostat(Thermostat),
    Camera(SecurityCamera),
}

impl Device {
    /// The identifier assigned at discovery.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        match self {
            Self::Light(d) => d.id(),
            Self::Thermostat(d) => d.id(),
            Self::Camera(d) => d.id(),
        }
    }

    /// Current power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        match self {
            Self::Light(d) => d.power(),
            Self::Thermostat(d) => d.power(),
            Self::Camera(d) => d.power(),
        }
    }

    /// Whether the device is powered on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power().is_on()
    }

    /// Switch the device on.
    pub fn turn_on(&mut self) {
        match self {
            Self::Light(d) => d.turn_on(),
            Self::Thermostat(d) => d.turn_on(),
            Self::Camera(d) => d.turn_on(),
        }
    }

    /// Switch the device off.
    pub fn turn_off(&mut self) {
        match self {
            Self::Light(d) => d.turn_off(),
            Self::Thermostat(d) => d.turn_off(),
            Self::Camera(d) => d.turn_off(),
        }
    }

    /// Flip the power state.
    pub fn toggle_power(&mut self) {
        match self {
            Self::Light(d) => d.toggle_power(),
            Self::Thermostat(d) => d.toggle_power(),
            Self::Camera(d) => d.toggle_power(),
        }
    }

    /// Formatted on/off status for the device list.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self {
            Self::Light(d) => d.status_text(),
            Self::Thermostat(d) => d.status_text(),
            Self::Camera(d) => d.status_text(),
        }
    }

    /// Formatted identifier-plus-property label.
    #[must_use]
    pub fn label_text(&self) -> String {
        match self {
            Self::Light(d) => d.label_text(),
            Self::Thermostat(d) => d.label_text(),
            Self::Camera(d) => d.label_text(),
        }
    }

    /// Sensor log message describing the device's current property value.
    #[must_use]
    pub fn log_message(&self) -> String {
        match self {
            Self::Light(d) => d.log_message(),
            Self::Thermostat(d) => d.log_message(),
            Self::Camera(d) => d.log_message(),
        }
    }
}
