//! Subscriber and tracer provider setup driven by `[observability]` config

use crate::attributes::SYSTEM_NAME;
use mcpb_core::ObservabilityConfig;
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static TRACER_PROVIDER: OnceLock<TracerProvider> = OnceLock::new();

/// Service name reported on spans; `mcpb` unless configured.
pub fn service_name(config: &ObservabilityConfig) -> &str {
    config
        .service_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(SYSTEM_NAME)
}

/// `RUST_LOG` when set, otherwise the configured filter. A filter that does
/// not parse falls back to `info`; the parse error is returned for logging.
fn env_filter(config: &ObservabilityConfig) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_filter)) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e.to_string())),
    }
}

/// Initialize telemetry with default settings.
///
/// ```rust,no_run
/// mcpb_telemetry::init_telemetry();
/// ```
pub fn init_telemetry() {
    init_from_config(&ObservabilityConfig::default());
}

/// Install the global `tracing` subscriber from configuration.
///
/// The subscriber combines an OpenTelemetry layer, whose tracer provider
/// carries `service.name`, with line-numbered fmt output. The first call wins;
/// later calls keep the installed provider and subscriber.
pub fn init_from_config(config: &ObservabilityConfig) {
    let name = service_name(config).to_string();

    let provider = TRACER_PROVIDER.get_or_init(|| {
        TracerProvider::builder()
            .with_config(
                Config::default()
                    .with_resource(Resource::new(vec![KeyValue::new("service.name", name.clone())])),
            )
            .build()
    });

    let (filter, filter_error) = env_filter(config);

    let installed = tracing_subscriber::registry()
        .with(tracing_opentelemetry::layer().with_tracer(provider.tracer(name.clone())))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    match installed {
        Ok(()) => tracing::info!(service = %name, "Telemetry initialized"),
        Err(e) => tracing::debug!(error = %e, "Tracing subscriber already installed"),
    }

    if let Some(error) = filter_error {
        tracing::warn!(filter = %config.log_filter, error = %error, "Invalid log filter, using info");
    }
}

/// Tracer provider installed by [`init_from_config`], if any
pub fn tracer_provider() -> Option<&'static TracerProvider> {
    TRACER_PROVIDER.get()
}
