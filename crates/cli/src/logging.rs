use tracing_log::LogTracer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Setup tracing + log integration. Diagnostics go to stderr so piped audio
/// metadata on stdout stays clean; verbosity is driven by RUST_LOG.
pub fn setup_logging() {
    LogTracer::init().expect("Failed to set LogTracer");
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter = EnvFilter::from_default_env();
    let subscriber = Registry::default().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}
