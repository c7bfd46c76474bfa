use crate::shell::config::StoreConfig;
use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global `fmt` subscriber. `RUST_LOG` wins over the configured filter.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &StoreConfig) -> anyhow::Result<()> {
    let filter = build_filter(std::env::var("RUST_LOG").ok(), &config.log_filter)?;
    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}

fn build_filter(rust_log: Option<String>, fallback: &str) -> anyhow::Result<EnvFilter> {
    let directives = rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    EnvFilter::try_new(&directives).with_context(|| format!("invalid log filter: {directives:?}"))
}
