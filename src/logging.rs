use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;

/// Install the tracing subscriber. Logs go to stderr so the menu dialogue on
/// stdout stays untouched. Repeated calls are no-ops.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .ok();
}
