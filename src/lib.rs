// Crate entry point. Re-export modules so tests and embedding hosts can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No storage logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod core {
    pub mod event;
    pub mod ports;
    pub mod query;
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_event_store;
        pub mod in_memory_query_cursor;
    }
}

pub mod shell {
    pub mod config;
    pub mod telemetry;
}

pub use crate::adapters::in_memory::in_memory_event_store::InMemoryEventStore;
pub use crate::adapters::in_memory::in_memory_query_cursor::InMemoryQueryCursor;
pub use crate::core::event::EventRecord;
pub use crate::core::ports::{EventIterator, EventStore, EventStoreError};
pub use crate::core::query::EventQuery;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures;
}
