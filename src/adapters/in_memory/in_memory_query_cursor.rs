// Cursor handed out by the in memory event store.
//
// Purpose
// - Walk a filtered snapshot without holding the store lock.
//
// Responsibilities
// - Track whether the cursor is positioned, and whether the current event was already removed.
// - Route removals back to the live store through its lock.
//
// Boundaries
// - Holds a weak handle only. A dropped store turns removals into no-ops.

use crate::adapters::in_memory::in_memory_event_store::SharedEvents;
use crate::core::event::EventRecord;
use crate::core::ports::{EventIterator, EventStoreError};
use std::sync::Weak;
use tokio::sync::Mutex;

#[derive(Debug)]
enum Position {
    Unpositioned,
    Positioned { event: EventRecord, removed: bool },
}

pub struct InMemoryQueryCursor {
    pending: std::vec::IntoIter<EventRecord>,
    store: Weak<Mutex<Vec<EventRecord>>>,
    position: Position,
}

impl InMemoryQueryCursor {
    pub(crate) fn new(matched: Vec<EventRecord>, store: Weak<Mutex<Vec<EventRecord>>>) -> Self {
        Self {
            pending: matched.into_iter(),
            store,
            position: Position::Unpositioned,
        }
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    fn live_store(&self) -> Option<SharedEvents> {
        self.store.upgrade()
    }
}

#[async_trait::async_trait]
impl EventIterator for InMemoryQueryCursor {
    fn advance(&mut self) -> bool {
        match self.pending.next() {
            Some(event) => {
                self.position = Position::Positioned {
                    event,
                    removed: false,
                };
                true
            }
            None => {
                self.position = Position::Unpositioned;
                false
            }
        }
    }

    fn current(&self) -> Result<&EventRecord, EventStoreError> {
        match &self.position {
            Position::Positioned { event, .. } => Ok(event),
            Position::Unpositioned => Err(EventStoreError::InvalidCursorState),
        }
    }

    async fn remove_current(&mut self) -> Result<(), EventStoreError> {
        let live = self.live_store();
        let Position::Positioned { event, removed } = &mut self.position else {
            return Err(EventStoreError::InvalidCursorState);
        };
        if *removed {
            return Err(EventStoreError::InvalidCursorState);
        }
        *removed = true;

        let Some(events) = live else {
            tracing::debug!(%event, "store dropped before removal");
            return Ok(());
        };
        let mut guard = events.lock().await;
        match guard.iter().position(|stored| *stored == *event) {
            Some(index) => {
                guard.remove(index);
                tracing::trace!(%event, "removed current event");
            }
            None => tracing::debug!(%event, "current event already gone from store"),
        }
        Ok(())
    }

    fn close(self) {
        tracing::trace!(remaining = self.pending.len(), "cursor closed");
    }
}
