//! Security camera — a power switch plus a motion reading.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

use super::{PowerState, impl_switchable};

/// Motion reading reported by a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionState {
    MotionDetected,
    #[default]
    NoMotion,
}

impl MotionState {
    /// Whether this reading reports motion.
    #[must_use]
    pub fn is_detected(self) -> bool {
        matches!(self, Self::MotionDetected)
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MotionDetected => f.write_str("MotionDetected"),
            Self::NoMotion => f.write_str("NoMotion"),
        }
    }
}

/// A simulated security camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityCamera {
    id: DeviceId,
    power: PowerState,
    motion: MotionState,
}

impl SecurityCamera {
    /// Create a camera with the given power state and motion reading.
    #[must_use]
    pub fn new(id: impl Into<DeviceId>, power: PowerState, motion: MotionState) -> Self {
        Self {
            id: id.into(),
            power,
            motion,
        }
    }

    /// Current motion reading.
    #[must_use]
    pub fn motion(&self) -> MotionState {
        self.motion
    }

    /// Record a new motion reading.
    pub fn set_motion(&mut self, motion: MotionState) {
        self.motion = motion;
    }

    /// Whether the camera is currently reporting motion.
    #[must_use]
    pub fn motion_detected(&self) -> bool {
        self.motion.is_detected()
    }

    /// Formatted label, e.g. `"Front Door Camera - Motion: YES"`.
    #[must_use]
    pub fn label_text(&self) -> String {
        let motion = if self.motion_detected() { "YES" } else { "NO" };
        format!("{} - Motion: {}", self.id, motion)
    }

    /// Sensor log message for the current motion reading.
    #[must_use]
    pub fn log_message(&self) -> String {
        format!("{} security status set to {}", self.id, self.motion)
    }
}

impl_switchable!(SecurityCamera);
