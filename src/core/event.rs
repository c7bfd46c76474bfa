// The event value kept by the store.
//
// Purpose
// - Carry a type tag and a timestamp, nothing else.
//
// Responsibilities
// - Value semantics: two records are equal iff type and timestamp are equal.
// - Order by (type, timestamp) for display and comparison.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    event_type: String,
    timestamp: i64,
}

impl EventRecord {
    pub fn new(event_type: impl Into<String>, timestamp: i64) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp,
        }
    }

    /// Builds a record stamped with the current UTC time in milliseconds.
    pub fn now(event_type: impl Into<String>) -> Self {
        Self::new(event_type, Utc::now().timestamp_millis())
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.event_type, self.timestamp)
    }
}

#[cfg(test)]
mod event_record_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_expose_type_and_timestamp() {
        let event = EventRecord::new("some_type", 123);
        assert_eq!(event.event_type(), "some_type");
        assert_eq!(event.timestamp(), 123);
    }

    #[rstest]
    #[case(EventRecord::new("a", 1), EventRecord::new("a", 1), true)]
    #[case(EventRecord::new("a", 1), EventRecord::new("a", 2), false)]
    #[case(EventRecord::new("a", 1), EventRecord::new("b", 1), false)]
    fn it_should_compare_by_value(
        #[case] left: EventRecord,
        #[case] right: EventRecord,
        #[case] equal: bool,
    ) {
        assert_eq!(left == right, equal);
    }

    #[rstest]
    fn it_should_order_by_type_then_timestamp() {
        let mut events = vec![
            EventRecord::new("b", 1),
            EventRecord::new("a", 300),
            EventRecord::new("a", 20),
        ];
        events.sort();
        assert_eq!(
            events,
            vec![
                EventRecord::new("a", 20),
                EventRecord::new("a", 300),
                EventRecord::new("b", 1),
            ]
        );
    }

    #[rstest]
    fn it_should_display_as_type_comma_timestamp() {
        assert_eq!(EventRecord::new("some_type", 123).to_string(), "some_type, 123");
    }

    #[rstest]
    fn it_should_stamp_the_current_time() {
        let before = Utc::now().timestamp_millis();
        let event = EventRecord::now("heartbeat");
        let after = Utc::now().timestamp_millis();
        assert_eq!(event.event_type(), "heartbeat");
        assert!(event.timestamp() >= before && event.timestamp() <= after);
    }

    #[rstest]
    fn it_should_serialize_the_type_field_as_type() {
        let json = serde_json::to_value(EventRecord::new("some_type", 5)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "some_type", "timestamp": 5 }));
    }
}
