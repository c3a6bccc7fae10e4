//! Tracing subscriber setup with optional OpenTelemetry export.

use opentelemetry::trace::TracerProvider;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::env;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

const SERVICE_NAME: &str = "kitem-server";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Quick TCP check to see if the collector is up (resolve hostname first)
fn is_reachable(endpoint: &str) -> bool {
    let host_port = endpoint
        .trim_start_matches("http://")
        .trim_start_matches("https://");
    host_port
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .map(|addr| TcpStream::connect_timeout(&addr, Duration::from_millis(100)).is_ok())
        .unwrap_or(false)
}

/// Trace and log export layers for an OTLP collector.
fn otlp_layers(endpoint: &str, service_name: &str) -> anyhow::Result<Vec<BoxedLayer>> {
    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name.to_string())
        .build();

    let trace_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;
    let trace_provider = SdkTracerProvider::builder()
        .with_batch_exporter(trace_exporter)
        .with_resource(resource.clone())
        .build();
    let tracer = trace_provider.tracer(SERVICE_NAME);
    opentelemetry::global::set_tracer_provider(trace_provider);

    let log_exporter = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;
    let log_provider = SdkLoggerProvider::builder()
        .with_batch_exporter(log_exporter)
        .with_resource(resource)
        .build();

    Ok(vec![
        tracing_opentelemetry::layer().with_tracer(tracer).boxed(),
        OpenTelemetryTracingBridge::new(&log_provider).boxed(),
    ])
}

/// Installs the global subscriber: `RUST_LOG` filtering and console output,
/// plus OTLP export when `OTEL_EXPORTER_OTLP_ENDPOINT` is set and reachable.
/// Export problems fall back to console logging only.
pub fn init_telemetry() {
    let endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();
    let service_name =
        env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.to_string());

    let (otel_layers, status) = match endpoint.as_deref() {
        None => (None, "OTEL_EXPORTER_OTLP_ENDPOINT not set, using console logging only".to_string()),
        Some(endpoint) if !is_reachable(endpoint) => (
            None,
            format!("OpenTelemetry endpoint {endpoint} not reachable, using console logging only"),
        ),
        Some(endpoint) => match otlp_layers(endpoint, &service_name) {
            Ok(layers) => (
                Some(layers),
                format!(
                    "OpenTelemetry enabled, exporting traces and logs to {endpoint} as {service_name}"
                ),
            ),
            Err(e) => (
                None,
                format!("Failed to create OTLP exporters ({e}), using console logging only"),
            ),
        },
    };
    let exporting = otel_layers.is_some();

    tracing_subscriber::registry()
        .with(otel_layers)
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    if exporting {
        tracing::info!("{}", status);
    } else {
        tracing::debug!("{}", status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolvable_endpoint_is_unreachable() {
        assert!(!is_reachable("http://collector.invalid:4317"));
        assert!(!is_reachable("not a host"));
    }
}
