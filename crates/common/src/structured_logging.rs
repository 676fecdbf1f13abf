use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::io::{self, Write};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

/// One log line in JSON mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredLogEntry {
    /// ISO 8601 timestamp
    pub timestamp: String,
    pub level: String,
    /// Module that emitted the event
    pub target: String,
    pub message: String,
    /// Remaining event fields (agent, dataset, duration_ms, ...)
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ExecutionContext>,
}

/// Process information attached to JSON log lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionContext {
    pub app_version: String,
    pub hostname: String,
    pub pid: u32,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            hostname: hostname::get()
                .map(|h| h.to_string_lossy().to_string())
                .unwrap_or_else(|_| "unknown".to_string()),
            pid: std::process::id(),
        }
    }
}

/// Layer writing every event as a JSON line on stderr.
///
/// Stdout stays reserved for agent responses.
pub struct JsonFormatter {
    include_context: bool,
}

impl JsonFormatter {
    pub fn new(include_context: bool) -> Self {
        Self { include_context }
    }

    fn entry_for(&self, event: &Event<'_>) -> StructuredLogEntry {
        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        StructuredLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            level: level_name(event.metadata().level()).to_string(),
            target: event.metadata().target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
            context: self.include_context.then(ExecutionContext::default),
        }
    }
}

impl<S> Layer<S> for JsonFormatter
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let entry = self.entry_for(event);
        if let Ok(json) = serde_json::to_string(&entry) {
            let _ = writeln!(io::stderr(), "{}", json);
        }
    }
}

fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARN",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Collects event fields into JSON values
#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: HashMap<String, Value>,
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.insert(
                field.name().to_string(),
                Value::String(format!("{:?}", value)),
            );
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields
                .insert(field.name().to_string(), Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), Value::Number(value.into()));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.fields.insert(field.name().to_string(), Value::Number(n));
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), Value::Bool(value));
    }
}

/// Logging setup
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level when `RUST_LOG` is not set
    pub level: Level,
    /// JSON lines instead of human readable output
    pub json_output: bool,
    /// ANSI colors (human readable mode only)
    pub color_output: bool,
    /// Attach process information to JSON lines
    pub include_context: bool,
    pub include_line_numbers: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json_output: false,
            color_output: true,
            include_context: true,
            include_line_numbers: cfg!(debug_assertions),
        }
    }
}

impl LoggingConfig {
    /// Build from a textual level ("warn", "info", ...) and output mode
    pub fn from_level_str(level: &str, json_output: bool) -> anyhow::Result<Self> {
        let level = level
            .parse::<Level>()
            .map_err(|_| anyhow::anyhow!("Unknown log level: {}", level))?;
        Ok(Self {
            level,
            json_output,
            ..Self::default()
        })
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init_structured_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    if config.json_output {
        let subscriber = Registry::default()
            .with(env_filter)
            .with(JsonFormatter::new(config.include_context));

        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_line_number(config.include_line_numbers)
            .with_ansi(config.color_output);

        let subscriber = Registry::default().with(env_filter).with(fmt_layer);

        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

/// Measures and logs one named operation
pub struct OperationTimer {
    start: std::time::Instant,
    operation_name: String,
    fields: HashMap<String, Value>,
}

impl OperationTimer {
    pub fn new(operation_name: impl Into<String>) -> Self {
        Self {
            start: std::time::Instant::now(),
            operation_name: operation_name.into(),
            fields: HashMap::new(),
        }
    }

    pub fn add_field(&mut self, key: impl Into<String>, value: impl Serialize) {
        if let Ok(v) = serde_json::to_value(value) {
            self.fields.insert(key.into(), v);
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish(self) {
        tracing::info!(
            operation = %self.operation_name,
            duration_ms = self.elapsed_ms(),
            success = true,
            fields = ?self.fields,
            "Operation completed"
        );
    }

    pub fn finish_with_result<T>(self, result: Result<T, impl std::fmt::Display>) {
        let duration_ms = self.elapsed_ms();

        match result {
            Ok(_) => {
                tracing::info!(
                    operation = %self.operation_name,
                    duration_ms = duration_ms,
                    success = true,
                    fields = ?self.fields,
                    "Operation completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    operation = %self.operation_name,
                    duration_ms = duration_ms,
                    success = false,
                    error = %e,
                    fields = ?self.fields,
                    "Operation failed"
                );
            }
        }
    }
}

/// Correlates the log lines of one coordinator request
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub start_time: std::time::Instant,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            start_time: std::time::Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_log_entry_flattens_fields() {
        let mut fields = HashMap::new();
        fields.insert("agent".to_string(), Value::String("training".to_string()));

        let entry = StructuredLogEntry {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            level: "WARN".to_string(),
            target: "application::loader".to_string(),
            message: "Missing file".to_string(),
            fields,
            context: None,
        };

        let json: Value = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["agent"], "training");
        assert_eq!(json["level"], "WARN");
        assert!(json.get("context").is_none());
    }

    #[test]
    fn test_level_parsing() {
        let config = LoggingConfig::from_level_str("info", true).unwrap();
        assert_eq!(config.level, Level::INFO);
        assert!(config.json_output);

        assert!(LoggingConfig::from_level_str("chatty", false).is_err());
    }

    #[test]
    fn test_operation_timer() {
        let mut timer = OperationTimer::new("deploy_agents");
        timer.add_field("agents", 5);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(timer.elapsed_ms() >= 5);
        timer.finish();
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestContext::new().request_id, RequestContext::new().request_id);
    }
}
