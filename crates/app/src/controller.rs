//! Controller — owns the device list, the automation flag, and the rule.
//!
//! All device mutation in the system flows through this type. It is driven
//! either directly (tests, embedding) or through the single-writer command
//! queue in [`runtime`](crate::runtime).

use homesim_domain::automation::AutomationStatus;
use homesim_domain::device::{Device, MotionState, PowerState, SecurityCamera, SmartLight, Thermostat};
use homesim_domain::error::HomeSimError;
use homesim_domain::event::Event;
use homesim_domain::log::LogEntry;
use homesim_domain::snapshot::{ControllerSnapshot, DeviceSnapshot};

use crate::ports::{EventPublisher, LogSink, ValueSource};

/// Central automation controller over the simulated device collection.
///
/// Devices keep their discovery order for the whole run; indices handed to
/// the per-device operations refer to that order. Every logged change goes
/// to the persistent sink and is mirrored on the event bus.
pub struct Controller<S, V, P> {
    automation: AutomationStatus,
    devices: Vec<Device>,
    sink: S,
    values: V,
    events: P,
}

impl<S, V, P> Controller<S, V, P>
where
    S: LogSink,
    V: ValueSource,
    P: EventPublisher,
{
    /// Create a controller with no devices and automation off.
    pub fn new(sink: S, values: V, events: P) -> Self {
        Self {
            automation: AutomationStatus::Off,
            devices: Vec::new(),
            sink,
            values,
            events,
        }
    }

    /// Set the initial automation status.
    #[must_use]
    pub fn with_automation(mut self, status: AutomationStatus) -> Self {
        self.automation = status;
        self
    }

    /// Current automation status.
    #[must_use]
    pub fn automation(&self) -> AutomationStatus {
        self.automation
    }

    /// The devices in discovery order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Build the presentation view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            automation: self.automation,
            devices: self.devices.iter().map(DeviceSnapshot::from).collect(),
        }
    }

    /// Flip the automation flag and return the resulting status.
    pub fn toggle_automation(&mut self) -> AutomationStatus {
        self.automation = self.automation.toggled();
        tracing::info!(status = %self.automation, "automation toggled");
        self.automation
    }

    /// Discover the fixed device set and append it to the collection.
    ///
    /// Each discovered device is powered on with a property value drawn from
    /// the value source: brightness 1–100, temperature 10–30 °C (whole
    /// degrees), motion uniformly chosen. Discovery never replaces existing
    /// entries; calling twice appends a second trio.
    pub fn discover_devices(&mut self) {
        let light = SmartLight::new(
            "Living Room Light",
            PowerState::On,
            self.values.int_in_range(1..=100),
        );
        let thermostat = Thermostat::new(
            "Living Room Thermostat",
            PowerState::On,
            f64::from(self.values.int_in_range(10..=30)),
        );
        let camera = SecurityCamera::new("Front Door Camera", PowerState::On, self.values.motion());

        self.devices.extend([
            Device::Light(light),
            Device::Thermostat(thermostat),
            Device::Camera(camera),
        ]);
        tracing::info!(total = self.devices.len(), "discovered devices");
    }

    /// Evaluate the motion rule: a powered camera reporting motion turns
    /// every light on at full brightness.
    ///
    /// The lights are re-applied (and re-logged) once per detecting camera;
    /// with several detecting cameras the updates are idempotent but the log
    /// receives duplicate entries.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when appending a log entry fails.
    pub async fn apply_automation_rule(&mut self) -> Result<(), HomeSimError> {
        let detecting = self
            .devices
            .iter()
            .filter(|device| {
                matches!(device, Device::Camera(camera) if camera.is_on() && camera.motion_detected())
            })
            .count();

        for _ in 0..detecting {
            for index in 0..self.devices.len() {
                let updated = if let Device::Light(light) = &mut self.devices[index] {
                    light.turn_on();
                    light.set_brightness(100);
                    true
                } else {
                    false
                };
                if updated {
                    self.log_device(index).await?;
                }
            }
        }

        if detecting > 0 {
            tracing::debug!(cameras = detecting, "motion rule fired");
        }
        Ok(())
    }

    /// Assign every device a fresh random property value and log it.
    ///
    /// Does nothing while automation is off. While on, each device gets
    /// exactly one new in-range value (brightness 10–80, temperature
    /// 20–30 °C, motion re-chosen) and exactly one log entry.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when appending a log entry fails.
    pub async fn randomize_device_states(&mut self) -> Result<(), HomeSimError> {
        if !self.automation.is_on() {
            return Ok(());
        }

        for index in 0..self.devices.len() {
            match &mut self.devices[index] {
                Device::Light(light) => {
                    let brightness = self.values.int_in_range(10..=80);
                    light.set_brightness(brightness);
                }
                Device::Thermostat(thermostat) => {
                    let temperature = f64::from(self.values.int_in_range(20..=30));
                    thermostat.set_temperature(temperature);
                }
                Device::Camera(camera) => {
                    let motion = self.values.motion();
                    camera.set_motion(motion);
                }
            }
            self.log_device(index).await?;
        }
        Ok(())
    }

    /// Append one timestamped log entry for the device at `index` and
    /// mirror it on the event bus.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds. Index validity is the caller's
    /// contract; a bad index is a programming error, not a recoverable
    /// condition.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when the sink append fails.
    pub async fn log_device(&self, index: usize) -> Result<(), HomeSimError> {
        let entry = LogEntry::new(self.devices[index].log_message());
        self.sink.append(&entry).await?;
        // Fire-and-forget: an observerless bus is not an error.
        let _ = self.events.publish(Event::new(index, entry)).await;
        Ok(())
    }

    /// Append one log entry per device, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when a sink append fails.
    pub async fn log_all_devices(&self) -> Result<(), HomeSimError> {
        for index in 0..self.devices.len() {
            self.log_device(index).await?;
        }
        Ok(())
    }

    /// Set the brightness of the light at `index`, then log the device.
    ///
    /// When the device at `index` is not a light its state is left
    /// unchanged, but its current reading is still logged: the edit path
    /// records one entry per interaction regardless of kind.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds (caller contract).
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when the sink append fails.
    pub async fn set_brightness(&mut self, index: usize, value: i32) -> Result<(), HomeSimError> {
        if let Device::Light(light) = &mut self.devices[index] {
            light.set_brightness(value);
        }
        self.log_device(index).await
    }

    /// Set the temperature of the thermostat at `index`, then log the device.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds (caller contract).
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when the sink append fails.
    pub async fn set_temperature(&mut self, index: usize, value: f64) -> Result<(), HomeSimError> {
        if let Device::Thermostat(thermostat) = &mut self.devices[index] {
            thermostat.set_temperature(value);
        }
        self.log_device(index).await
    }

    /// Record a motion reading on the camera at `index`, then log the device.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds (caller contract).
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when the sink append fails.
    pub async fn set_motion(&mut self, index: usize, motion: MotionState) -> Result<(), HomeSimError> {
        if let Device::Camera(camera) = &mut self.devices[index] {
            camera.set_motion(motion);
        }
        self.log_device(index).await
    }

    /// Flip the power state of the device at `index`. Not logged.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds (caller contract).
    pub fn toggle_device(&mut self, index: usize) {
        self.devices[index].toggle_power();
    }
}
