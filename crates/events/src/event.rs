use chrono::{DateTime, Utc};

/// A domain-agnostic change notification.
///
/// Events are immutable facts about a state change that already happened.
/// Consumers use them as a re-render trigger and read current state back from
/// the store, so delivery may be best-effort.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. `"cart.item.added"`).
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the change happened (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
