//! OpenTelemetry span export.

use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");
const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installed tracer provider; shut down (and flushed) on drop.
#[derive(Debug)]
pub(crate) struct Telemetry {
    provider: SdkTracerProvider,
}

impl Telemetry {
    /// Install tracing with an OpenTelemetry bridge exporting spans to stdout.
    pub(crate) fn install(
        filter: EnvFilter,
        json_logs: bool,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let resource = Resource::builder()
            .with_service_name(SERVICE_NAME)
            .with_attributes(vec![KeyValue::new("service.version", SERVICE_VERSION)])
            .build();

        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_resource(resource)
            .build();
        global::set_tracer_provider(provider.clone());

        let otel_layer = tracing_opentelemetry::layer().with_tracer(provider.tracer(SERVICE_NAME));

        let fmt_layer = if json_logs {
            tracing_subscriber::fmt::layer().json().with_target(true).boxed()
        } else {
            tracing_subscriber::fmt::layer().with_target(true).boxed()
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .with(otel_layer)
            .try_init()?;

        Ok(Self { provider })
    }
}

impl Drop for Telemetry {
    fn drop(&mut self) {
        if let Err(e) = self.provider.shutdown() {
            eprintln!("Failed to flush telemetry: {}", e);
        }
    }
}
