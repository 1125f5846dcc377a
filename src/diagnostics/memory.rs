// SPDX-License-Identifier: MPL-2.0
//! In-memory logger keeping the most recent records.
//!
//! Useful for hosts that surface a log panel, and for asserting on
//! diagnostics in tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use super::buffer::CircularBuffer;
use super::logger::{LogType, Logger};
use crate::config::DEFAULT_MEMORY_LOG_CAPACITY;

/// A single recorded message.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Severity category.
    pub log_type: LogType,
    /// Message text.
    pub message: String,
    /// Wall-clock time the record was written.
    pub timestamp: DateTime<Utc>,
}

/// Logger that stores records in a bounded ring buffer.
///
/// Clones share the same buffer, so a test can keep one handle and install
/// another into the manager.
#[derive(Debug, Clone)]
pub struct MemoryLogger {
    records: Arc<Mutex<CircularBuffer<LogRecord>>>,
}

impl MemoryLogger {
    /// Creates a logger keeping at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CircularBuffer<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of the stored records, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().iter().cloned().collect()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns how many stored records have the given severity.
    #[must_use]
    pub fn count_of(&self, log_type: LogType) -> usize {
        self.lock()
            .iter()
            .filter(|record| record.log_type == log_type)
            .count()
    }

    /// Drops all stored records.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_LOG_CAPACITY)
    }
}

impl Logger for MemoryLogger {
    fn log(&self, log_type: LogType, message: &str) {
        self.lock().push(LogRecord {
            log_type,
            message: message.to_string(),
            timestamp: Utc::now(),
        });
    }
}
