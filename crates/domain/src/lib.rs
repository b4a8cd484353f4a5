//! # homesim-domain
//!
//! Pure domain model for the homesim home-automation simulator.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, error conventions, timestamps
//! - Define the simulated **devices** (smart light, thermostat, security
//!   camera) and the closed [`Device`](device::Device) union over them
//! - Define the **automation switch** state returned by the controller
//! - Define **log entries** (timestamped property records) and their exact
//!   on-disk line format
//! - Define **events** (broadcast records of logged changes)
//! - Define **snapshots** (the read half of the presentation contract)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod automation;
pub mod device;
pub mod event;
pub mod log;
pub mod snapshot;
