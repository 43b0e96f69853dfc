use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{trace as sdktrace, Resource};
use opentelemetry_semantic_conventions::resource;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat};

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to install OpenTelemetry tracer: {0}")]
    Otlp(#[from] opentelemetry::trace::TraceError),
    #[error("tracing subscriber already set: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber: env filter, text or flattened JSON
/// output, and an OTLP span exporter when an endpoint is configured.
pub fn init_telemetry(service_name: &str, config: &AppConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_new(&config.log_filter)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let otel_layer = match &config.otlp_endpoint {
        Some(endpoint) => {
            let resource = Resource::new(vec![KeyValue::new(
                resource::SERVICE_NAME,
                service_name.to_string(),
            )]);

            let tracer = opentelemetry_otlp::new_pipeline()
                .tracing()
                .with_exporter(
                    opentelemetry_otlp::new_exporter()
                        .tonic()
                        .with_endpoint(endpoint.clone()),
                )
                .with_trace_config(
                    sdktrace::config()
                        .with_resource(resource)
                        .with_sampler(sdktrace::Sampler::AlwaysOn),
                )
                .install_batch(opentelemetry_sdk::runtime::Tokio)?;

            Some(tracing_opentelemetry::layer().with_tracer(tracer))
        }
        None => None,
    };

    match config.log_format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .without_time();
            registry.with(otel_layer).with(fmt_layer).try_init()?;
        }
        LogFormat::Text => {
            registry
                .with(otel_layer)
                .with(tracing_subscriber::fmt::layer())
                .try_init()?;
        }
    }

    Ok(())
}
