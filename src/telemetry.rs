use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::ObservabilityConfig;

/// Initialize structured logging.
///
/// RUST_LOG takes precedence over the configured level. Logs go to stderr so
/// command output on stdout stays clean.
pub fn init_telemetry(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    tracing::debug!(level = %config.log_level, json = config.json_logs, "Telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking related operations
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span around a single repository operation
pub fn operation_span(operation: &str, equipment_id: Option<i64>) -> tracing::Span {
    tracing::info_span!(
        "equipment_operation",
        operation = operation,
        equipment.id = equipment_id,
    )
}

/// Create the top-level span for one CLI invocation
pub fn create_command_span(command: &str, correlation_id: &str) -> tracing::Span {
    tracing::info_span!("command", command = command, correlation.id = correlation_id)
}
