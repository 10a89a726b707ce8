use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::settings::TracingSettings;

/// Initialize tracing: apply an `EnvFilter` using the `RUST_LOG` environment variable to define the
/// log levels, falling back on the configured level, and add a formatter layer writing to stderr,
/// as JSON if requested.
///
/// Calling this more than once is harmless: only the first subscriber is installed.
pub fn init_tracing(settings: TracingSettings) {
    let TracingSettings { level, json } = settings;

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = Registry::default().with(filter_layer);

    // log records from dependencies are forwarded to tracing.
    let _ = LogTracer::init();

    let result = if json {
        let subscriber = registry.with(fmt::layer().json().with_writer(std::io::stderr));
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = registry.with(fmt::layer().with_writer(std::io::stderr));
        tracing::subscriber::set_global_default(subscriber)
    };

    if result.is_err() {
        tracing::debug!("A global tracing subscriber was already installed");
    }
}
