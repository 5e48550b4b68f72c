pub mod constants;
pub mod settings;

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::settings::LoggerConfig;

/// Installs the global tracing subscriber. Call once per process; embedding
/// applications that bring their own subscriber can skip this.
pub fn setup_tracing(logger: &LoggerConfig) {
    let filter = tracing_subscriber::EnvFilter::new(&logger.level);
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
