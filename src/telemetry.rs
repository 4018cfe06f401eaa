use color_eyre::eyre::{Result, WrapErr};
use opentelemetry::{global, trace::TracerProvider};
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::{LogExporter, MetricExporter, Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use std::sync::LazyLock;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

static RESOURCE: LazyLock<Resource> =
    LazyLock::new(|| Resource::builder().with_service_name("landgen").build());

/// OTLP providers that must be flushed before the process exits.
pub struct Telemetry {
    providers: Option<(SdkLoggerProvider, SdkTracerProvider, SdkMeterProvider)>,
}

fn init_logs() -> Result<SdkLoggerProvider> {
    let exporter = LogExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .build()
        .wrap_err("Failed to create log exporter")?;

    Ok(SdkLoggerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(RESOURCE.clone())
        .build())
}

fn init_traces() -> Result<SdkTracerProvider> {
    let exporter = SpanExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .build()
        .wrap_err("Failed to create trace exporter")?;

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(RESOURCE.clone())
        .build())
}

fn init_metrics() -> Result<SdkMeterProvider> {
    let exporter = MetricExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .build()
        .wrap_err("Failed to create metric exporter")?;

    Ok(SdkMeterProvider::builder()
        .with_periodic_exporter(exporter)
        .with_resource(RESOURCE.clone())
        .build())
}

/// Installs the global subscriber. Console output is always on; OTLP export is
/// added when `otlp` is set, with endpoints taken from the standard
/// `OTEL_EXPORTER_OTLP_*` variables.
pub fn init(otlp: bool) -> Result<Telemetry> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .wrap_err("Failed to create EnvFilter")?;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    let providers = if otlp {
        let logger_provider = init_logs()?;
        let tracer_provider = init_traces()?;
        let meter_provider = init_metrics()?;
        global::set_tracer_provider(tracer_provider.clone());
        global::set_meter_provider(meter_provider.clone());
        Some((logger_provider, tracer_provider, meter_provider))
    } else {
        None
    };

    let log_bridge = providers
        .as_ref()
        .map(|(logger_provider, _, _)| OpenTelemetryTracingBridge::new(logger_provider));
    let span_layer = providers.as_ref().map(|(_, tracer_provider, _)| {
        tracing_opentelemetry::layer().with_tracer(tracer_provider.tracer("landgen"))
    });

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .with(log_bridge)
        .with(span_layer)
        .try_init()
        .wrap_err("Failed to set up global tracing subscriber")?;

    Ok(Telemetry { providers })
}

impl Telemetry {
    pub fn shutdown(self) -> Result<()> {
        if let Some((logger_provider, tracer_provider, meter_provider)) = self.providers {
            tracer_provider.shutdown()?;
            meter_provider.shutdown()?;
            logger_provider.shutdown()?;
        }
        Ok(())
    }
}
