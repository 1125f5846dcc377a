// SPDX-License-Identifier: MPL-2.0
//! Filtered, swappable diagnostics endpoint.
//!
//! The handle owns the active [`Logger`] plus two independent switches: a
//! global enable flag and a verbosity threshold. Every call site passes a
//! detail level and the handle decides whether the sink sees the message.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::logger::{LogType, Logger, TracingLogger};
use crate::domain::diagnostics::DebugLevel;

struct Inner {
    logger: RwLock<Arc<dyn Logger>>,
    enabled: AtomicBool,
    debug_level: AtomicU8,
}

/// Handle for writing diagnostics messages.
///
/// This handle is cheap to clone and can be shared across threads. All
/// clones observe the same logger and switches.
#[derive(Clone)]
pub struct DiagnosticsHandle {
    inner: Arc<Inner>,
}

impl DiagnosticsHandle {
    /// Creates a handle with the given sink, enabled, at the default level.
    pub fn new(logger: impl Logger + 'static) -> Self {
        Self::with_settings(Arc::new(logger), true, DebugLevel::default())
    }

    /// Creates a handle with explicit settings.
    #[must_use]
    pub fn with_settings(logger: Arc<dyn Logger>, enabled: bool, level: DebugLevel) -> Self {
        Self {
            inner: Arc::new(Inner {
                logger: RwLock::new(logger),
                enabled: AtomicBool::new(enabled),
                debug_level: AtomicU8::new(level.value()),
            }),
        }
    }

    /// Writes a message if logging is enabled and `detail` passes the threshold.
    pub fn send_message(&self, log_type: LogType, message: &str, detail: u8) {
        if !self.is_enabled() || !self.debug_level().allows(detail) {
            return;
        }
        let logger = Arc::clone(
            &self
                .inner
                .logger
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        );
        logger.log(log_type, message);
    }

    /// Replaces the active sink.
    pub fn set_logger(&self, logger: impl Logger + 'static) {
        self.set_shared_logger(Arc::new(logger));
    }

    /// Replaces the active sink with an already shared one.
    pub fn set_shared_logger(&self, logger: Arc<dyn Logger>) {
        *self
            .inner
            .logger
            .write()
            .unwrap_or_else(PoisonError::into_inner) = logger;
    }

    /// Turns all logging on or off.
    pub fn set_enabled(&self, enabled: bool) {
        self.inner.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Returns whether logging is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.load(Ordering::Relaxed)
    }

    /// Sets the verbosity threshold.
    ///
    /// [`DebugLevel`] is clamped to `0..=3` on construction, so
    /// `DebugLevel::new(10)` arrives here as 3, which already lets every
    /// message through.
    pub fn set_debug_level(&self, level: DebugLevel) {
        self.inner.debug_level.store(level.value(), Ordering::Relaxed);
    }

    /// Returns the verbosity threshold.
    #[must_use]
    pub fn debug_level(&self) -> DebugLevel {
        DebugLevel::new(self.inner.debug_level.load(Ordering::Relaxed))
    }
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(TracingLogger)
    }
}

impl std::fmt::Debug for DiagnosticsHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsHandle")
            .field("enabled", &self.is_enabled())
            .field("debug_level", &self.debug_level())
            .finish_non_exhaustive()
    }
}
