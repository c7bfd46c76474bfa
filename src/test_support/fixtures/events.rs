// Shared event fixtures for unit tests.
// Records are read from JSON so the same data set can be reused across modules.

use crate::core::event::EventRecord;
use std::fs;

const EVENT_RECORDS_JSON: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/test_support/fixtures/events/json/event_records.json"
);

pub fn load_event_records() -> Vec<EventRecord> {
    let json_str = fs::read_to_string(EVENT_RECORDS_JSON).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub fn sorted(mut events: Vec<EventRecord>) -> Vec<EventRecord> {
    events.sort();
    events
}
