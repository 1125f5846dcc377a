// SPDX-License-Identifier: MPL-2.0
//! Logger sink abstraction.
//!
//! A [`Logger`] receives messages that already passed the diagnostics
//! filter. The default sink forwards to `tracing`, so hosts decide where the
//! output goes by installing a subscriber.

use std::fmt;

/// Severity category of a diagnostics message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogType {
    /// Routine trace, such as a view being dispatched.
    Info,
    /// Recoverable misuse, such as replacing an existing container.
    Warning,
    /// A request that was dropped, such as showing into a missing container.
    Error,
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogType::Info => "info",
            LogType::Warning => "warning",
            LogType::Error => "error",
        };
        f.write_str(label)
    }
}

/// Destination for diagnostics messages.
///
/// Implementations must be cheap and must not panic; they are called while
/// overlay requests are being processed.
pub trait Logger: Send + Sync {
    /// Records one message.
    fn log(&self, log_type: LogType, message: &str);
}

/// Default sink that forwards to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, log_type: LogType, message: &str) {
        match log_type {
            LogType::Info => tracing::info!(target: "overlay_container", "{message}"),
            LogType::Warning => tracing::warn!(target: "overlay_container", "{message}"),
            LogType::Error => tracing::error!(target: "overlay_container", "{message}"),
        }
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _log_type: LogType, _message: &str) {}
}

impl<F> Logger for F
where
    F: Fn(LogType, &str) + Send + Sync,
{
    fn log(&self, log_type: LogType, message: &str) {
        self(log_type, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn log_type_display_is_lowercase() {
        assert_eq!(LogType::Info.to_string(), "info");
        assert_eq!(LogType::Warning.to_string(), "warning");
        assert_eq!(LogType::Error.to_string(), "error");
    }

    #[test]
    fn closures_are_loggers() {
        let calls = AtomicUsize::new(0);
        let logger = |_: LogType, message: &str| {
            assert_eq!(message, "hello");
            calls.fetch_add(1, Ordering::Relaxed);
        };
        logger.log(LogType::Info, "hello");
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn builtin_sinks_accept_every_type() {
        for log_type in [LogType::Info, LogType::Warning, LogType::Error] {
            TracingLogger.log(log_type, "message");
            NullLogger.log(log_type, "message");
        }
    }
}
