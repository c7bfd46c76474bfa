// In memory implementation of the EventStore port.
//
// Purpose
// - Hold typed, timestamped events for concurrent producers and consumers.
//
// Responsibilities
// - Guard the single event list with one store wide lock.
// - Hand out cursors over a filtered snapshot taken under that lock.

use crate::adapters::in_memory::in_memory_query_cursor::InMemoryQueryCursor;
use crate::core::event::EventRecord;
use crate::core::ports::EventStore;
use crate::core::query::EventQuery;
use crate::shell::config::StoreConfig;
use std::sync::Arc;
use tokio::sync::Mutex;

pub(crate) type SharedEvents = Arc<Mutex<Vec<EventRecord>>>;

#[derive(Default)]
pub struct InMemoryEventStore {
    events: SharedEvents,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::with_capacity(capacity))),
        }
    }

    pub fn with_config(config: &StoreConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    pub async fn len(&self) -> usize {
        self.events.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.lock().await.is_empty()
    }

    /// All events sorted by (type, timestamp). Sorts the backing list in place.
    pub async fn sorted_events(&self) -> Vec<EventRecord> {
        let mut guard = self.events.lock().await;
        guard.sort();
        guard.clone()
    }

    /// One `"<type>, <timestamp>"` line per event, sorted by (type, timestamp).
    pub async fn dump(&self) -> String {
        let mut guard = self.events.lock().await;
        guard.sort();
        guard.iter().map(|event| format!("{event}\n")).collect()
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    type Cursor = InMemoryQueryCursor;

    async fn insert(&self, event: EventRecord) {
        tracing::trace!(%event, "inserting event");
        self.events.lock().await.push(event);
    }

    async fn remove_all(&self, event_type: &str) {
        let mut guard = self.events.lock().await;
        let (matched, kept): (Vec<EventRecord>, Vec<EventRecord>) = guard
            .drain(..)
            .partition(|event| event.event_type() == event_type);
        *guard = kept;
        tracing::debug!(event_type, removed = matched.len(), "removed events by type");
    }

    async fn find(&self, query: EventQuery) -> InMemoryQueryCursor {
        let matched: Vec<EventRecord> = if query.is_empty_range() {
            Vec::new()
        } else {
            let guard = self.events.lock().await;
            guard.iter().filter(|event| query.matches(event)).cloned().collect()
        };
        tracing::debug!(
            event_type = %query.event_type,
            start_time = query.start_time,
            end_time = query.end_time,
            matched = matched.len(),
            "query snapshot taken"
        );
        InMemoryQueryCursor::new(matched, Arc::downgrade(&self.events))
    }
}
