//! # homesim-adapter-rand
//!
//! `rand`-backed implementation of the [`ValueSource`] port.
//!
//! The thread-local RNG is acquired per call rather than held in the
//! struct, so the source stays `Send` and can live inside the controller
//! task.
//!
//! ## Dependency rule
//!
//! Depends on `homesim-app` (port traits) and `homesim-domain` only.

use std::ops::RangeInclusive;

use rand::Rng;

use homesim_app::ports::ValueSource;
use homesim_domain::device::MotionState;

/// Value source drawing from the thread-local random number generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl ValueSource for ThreadRngSource {
    fn int_in_range(&mut self, range: RangeInclusive<i32>) -> i32 {
        rand::thread_rng().gen_range(range)
    }

    fn motion(&mut self) -> MotionState {
        if rand::thread_rng().gen_bool(0.5) {
            MotionState::MotionDetected
        } else {
            MotionState::NoMotion
        }
    }
}
