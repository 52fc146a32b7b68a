//! Telemetry initialization - structured logging via tracing.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// Service name attached to the startup event.
    pub service_name: String,
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            json_logs: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            service_name: std::env::var("SERVICE_NAME").unwrap_or_else(|_| "blog-api".to_string()),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,blog_api=debug,blog_infra=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
}
