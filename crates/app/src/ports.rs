//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the controller and
//! the adapter layer can depend on them without circular dependencies.

pub mod event_bus;
pub mod log_sink;
pub mod value_source;

pub use event_bus::EventPublisher;
pub use log_sink::LogSink;
pub use value_source::ValueSource;
