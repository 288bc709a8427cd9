use serde::Serialize;
use serde_json::Value;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str, context: Option<Value>);
}

fn emit_tracing(level: LogLevel, message: &str, context: Option<&Value>) {
    match (level, context) {
        (LogLevel::Debug, None) => tracing::debug!("{}", message),
        (LogLevel::Info, None) => tracing::info!("{}", message),
        (LogLevel::Warn, None) => tracing::warn!("{}", message),
        (LogLevel::Error, None) => tracing::error!("{}", message),
        (LogLevel::Debug, Some(ctx)) => tracing::debug!(context = %ctx, "{}", message),
        (LogLevel::Info, Some(ctx)) => tracing::info!(context = %ctx, "{}", message),
        (LogLevel::Warn, Some(ctx)) => tracing::warn!(context = %ctx, "{}", message),
        (LogLevel::Error, Some(ctx)) => tracing::error!(context = %ctx, "{}", message),
    }
}

/// Forwards every event to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, context: Option<Value>) {
        emit_tracing(level, message, context.as_ref());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub context: Option<Value>,
}

/// Forwards to `tracing` and keeps a copy of every event.
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn entries_at(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level == level)
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str, context: Option<Value>) {
        emit_tracing(level, message, context.as_ref());
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(LogEntry {
                level,
                message: message.to_string(),
                context,
            });
        }
    }
}

/// `info!(ctx, "...", args)` where `ctx` exposes a `logger: &dyn Logger` field.
/// `info!(ctx, context: json, "...", args)` attaches structured context.
#[macro_export]
macro_rules! info {
    ($ctx:expr, context: $context:expr, $($arg:tt)+) => {
        $ctx.logger.log(
            $crate::runtime::logging::LogLevel::Info,
            &format!($($arg)+),
            Some($context),
        )
    };
    ($ctx:expr, $($arg:tt)+) => {
        $ctx.logger.log(
            $crate::runtime::logging::LogLevel::Info,
            &format!($($arg)+),
            None,
        )
    };
}

#[macro_export]
macro_rules! warn {
    ($ctx:expr, context: $context:expr, $($arg:tt)+) => {
        $ctx.logger.log(
            $crate::runtime::logging::LogLevel::Warn,
            &format!($($arg)+),
            Some($context),
        )
    };
    ($ctx:expr, $($arg:tt)+) => {
        $ctx.logger.log(
            $crate::runtime::logging::LogLevel::Warn,
            &format!($($arg)+),
            None,
        )
    };
}

#[macro_export]
macro_rules! error {
    ($ctx:expr, context: $context:expr, $($arg:tt)+) => {
        $ctx.logger.log(
            $crate::runtime::logging::LogLevel::Error,
            &format!($($arg)+),
            Some($context),
        )
    };
    ($ctx:expr, $($arg:tt)+) => {
        $ctx.logger.log(
            $crate::runtime::logging::LogLevel::Error,
            &format!($($arg)+),
            None,
        )
    };
}

#[macro_export]
macro_rules! debug {
    ($ctx:expr, context: $context:expr, $($arg:tt)+) => {
        $ctx.logger.log(
            $crate::runtime::logging::LogLevel::Debug,
            &format!($($arg)+),
            Some($context),
        )
    };
    ($ctx:expr, $($arg:tt)+) => {
        $ctx.logger.log(
            $crate::runtime::logging::LogLevel::Debug,
            &format!($($arg)+),
            None,
        )
    };
}
