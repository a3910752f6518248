//! Subscriber setup connecting `tracing` to the file exporter.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "shopping-list-otlp.json";

/// Level used when the configuration does not name one.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: an [`EnvFilter`] built from
/// `config.trace_level` in front of an OpenTelemetry layer that writes to
/// `<data dir>/shopping-list-otlp.json`.
///
/// Tracing is optional. When the data directory can not be created nothing is
/// installed, and only the first successful call has any effect.
///
/// ```rust,no_run
/// use shopping_list::observability::init_tracing;
/// use shopping_list::Config;
///
/// init_tracing(&Config::default());
/// tracing::debug!("recorded if the trace file is writable");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let resource = Resource::new(vec![
        KeyValue::new("service.name", "shopping-list"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(OpenTelemetryLayer::new(provider.tracer("shopping-list")))
        .try_init();
}
