// Store settings read from the environment.
//
// Responsibilities
// - Provide defaults so an embedding host can start without any variables set.
// - Reject malformed values instead of silently falling back.

use anyhow::Context;

pub const INITIAL_CAPACITY_VAR: &str = "EVENT_STORE_INITIAL_CAPACITY";
pub const LOG_FILTER_VAR: &str = "EVENT_STORE_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub initial_capacity: usize,
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StoreConfig {
    /// Reads settings through `lookup`, e.g. `|key| std::env::var(key).ok()`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let initial_capacity = match lookup(INITIAL_CAPACITY_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("invalid {INITIAL_CAPACITY_VAR}: {raw:?}"))?,
            None => defaults.initial_capacity,
        };
        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            initial_capacity,
            log_filter,
        })
    }
}
