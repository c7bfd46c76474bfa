// Ports define what callers can do with an event store, without implementing it.
//
// Purpose
// - Describe the store and its query cursor as traits.
//
// Responsibilities
// - Keep callers independent of how events are held by coding against traits.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits in the adapters layer.

use crate::core::event::EventRecord;
use crate::core::query::EventQuery;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("cursor is not positioned on an event")]
    InvalidCursorState,
}

#[async_trait]
pub trait EventStore: Send + Sync {
    type Cursor: EventIterator;

    async fn insert(&self, event: EventRecord);

    /// Removes every event of the given type. A type with no events is a no-op.
    async fn remove_all(&self, event_type: &str);

    /// Snapshots the events selected by `query` into a new cursor.
    async fn find(&self, query: EventQuery) -> Self::Cursor;

    /// `start_time` is inclusive, `end_time` exclusive.
    async fn query(&self, event_type: &str, start_time: i64, end_time: i64) -> Self::Cursor {
        self.find(EventQuery::new(event_type, start_time, end_time))
            .await
    }
}

/// Single pass cursor over the result of a query.
///
/// `current` and `remove_current` are only valid after `advance` returned true.
#[async_trait]
pub trait EventIterator: Send {
    /// Moves to the next event. Returns false once the results are exhausted.
    fn advance(&mut self) -> bool;

    fn current(&self) -> Result<&EventRecord, EventStoreError>;

    /// Removes the current event from the store it came from.
    async fn remove_current(&mut self) -> Result<(), EventStoreError>;

    fn close(self)
    where
        Self: Sized;
}
