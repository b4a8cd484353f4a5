//! Snapshots — read-only views handed to the presentation layer.
//!
//! A snapshot captures everything a dashboard needs to render: the
//! automation flag plus, for each device in discovery order, its power
//! state, typed property value, and pre-formatted status/label strings.

use serde::{Deserialize, Serialize};

use crate::automation::AutomationStatus;
use crate::device::{Device, MotionState, PowerState};
use crate::id::DeviceId;

/// The variant-specific property of a device, typed for presentation
/// widgets (sliders, toggles, motion indicators).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceProperty {
    Brightness { percent: i32 },
    Temperature { celsius: f64 },
    Motion { state: MotionState },
}

/// Presentation view of a single device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub id: DeviceId,
    pub power: PowerState,
    pub property: DeviceProperty,
    pub status_text: String,
    pub label_text: String,
}

impl From<&Device> for DeviceSnapshot {
    fn from(device: &Device) -> Self {
        let property = match device {
            Device::Light(light) => DeviceProperty::Brightness {
                percent: light.brightness(),
            },
            Device::Thermostat(thermostat) => DeviceProperty::Temperature {
                celsius: thermostat.temperature(),
            },
            Device::Camera(camera) => DeviceProperty::Motion {
                state: camera.motion(),
            },
        };
        Self {
            id: device.id().clone(),
            power: device.power(),
            property,
            status_text: device.status_text(),
            label_text: device.label_text(),
        }
    }
}

/// Presentation view of the whole controller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub automation: AutomationStatus,
    pub devices: Vec<DeviceSnapshot>,
}
