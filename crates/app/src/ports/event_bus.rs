//! Event bus port — publishing logged device changes to live observers.

use std::future::Future;

use homesim_domain::error::HomeSimError;
use homesim_domain::event::Event;

/// Publisher half of the event bus.
///
/// Publishing is fire-and-forget from the controller's point of view:
/// implementations succeed even when nobody is listening.
pub trait EventPublisher {
    /// Publish a single event.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), HomeSimError>> + Send;
}
