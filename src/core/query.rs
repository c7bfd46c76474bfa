use crate::core::event::EventRecord;

/// Selects records of one type whose timestamp lies in `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub event_type: String,
    pub start_time: i64,
    pub end_time: i64,
}

impl EventQuery {
    pub fn new(event_type: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            event_type: event_type.into(),
            start_time,
            end_time,
        }
    }

    pub fn is_empty_range(&self) -> bool {
        self.start_time >= self.end_time
    }

    pub fn matches(&self, event: &EventRecord) -> bool {
        event.event_type() == self.event_type
            && self.start_time <= event.timestamp()
            && event.timestamp() < self.end_time
    }
}

#[cfg(test)]
mod event_query_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EventRecord::new("a", 100), true)]
    #[case(EventRecord::new("a", 199), true)]
    #[case(EventRecord::new("a", 99), false)]
    #[case(EventRecord::new("a", 200), false)]
    #[case(EventRecord::new("b", 150), false)]
    fn it_should_match_type_and_half_open_interval(#[case] event: EventRecord, #[case] expected: bool) {
        let query = EventQuery::new("a", 100, 200);
        assert_eq!(query.matches(&event), expected);
    }

    #[rstest]
    #[case(100, 100)]
    #[case(200, 100)]
    fn it_should_match_nothing_when_the_range_is_empty(#[case] start: i64, #[case] end: i64) {
        let query = EventQuery::new("a", start, end);
        assert!(query.is_empty_range());
        assert!(!query.matches(&EventRecord::new("a", start)));
        assert!(!query.matches(&EventRecord::new("a", end)));
    }

    #[rstest]
    fn it_should_accept_the_full_i64_range() {
        let query = EventQuery::new("a", i64::MIN, i64::MAX);
        assert!(query.matches(&EventRecord::new("a", i64::MIN)));
        assert!(!query.matches(&EventRecord::new("a", i64::MAX)));
    }
}
