//! Value source port — pluggable randomness for the simulation.

use std::ops::RangeInclusive;

use homesim_domain::device::MotionState;

/// Source of simulated sensor values.
///
/// The controller never reaches for a random number generator directly;
/// production wires an RNG-backed implementation while tests supply scripted
/// sequences to make every run deterministic.
pub trait ValueSource {
    /// Uniformly distributed integer within the inclusive range.
    fn int_in_range(&mut self, range: RangeInclusive<i32>) -> i32;

    /// Uniformly chosen motion reading.
    fn motion(&mut self) -> MotionState;
}
