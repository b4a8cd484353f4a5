//! # homesim-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `LogSink` — append-only persistence for sensor log entries
//!   - `ValueSource` — pluggable randomness for the simulation
//!   - `EventPublisher` — broadcast of logged changes to live observers
//! - Provide the [`Controller`](controller::Controller) — device discovery,
//!   the motion rule, state randomization, and sensor logging
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Provide the single-writer [`runtime`] — the command queue, the task that
//!   owns the controller, and the periodic automation loop
//!
//! ## Dependency rule
//! Depends on `homesim-domain` only (plus `tokio::sync`/`tokio::time` for
//! channels and timers). Never imports adapter crates. Adapters depend on
//! *this* crate, not the reverse.

pub mod controller;
pub mod event_bus;
pub mod ports;
pub mod runtime;
