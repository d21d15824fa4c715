//! Change-notification plumbing for the store.
//!
//! The store mutates state synchronously and publishes an [`Event`] describing
//! each change; the presentation layer holds a [`Subscription`] and re-renders
//! on receipt (observer pattern). Delivery is best-effort fan-out: the bus is
//! for notification, not storage, and the store itself stays the source of
//! truth.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
