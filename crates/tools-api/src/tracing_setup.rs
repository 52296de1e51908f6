//! Structured logging setup

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` when set, otherwise the configured directives.
pub fn env_filter(config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.filter)?),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let json_layer = config.json.then(|| fmt::layer().json().with_target(false));
    let text_layer = (!config.json).then(|| fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    tracing::info!(json = config.json, filter = %config.filter, "Logging initialized");
    Ok(())
}
