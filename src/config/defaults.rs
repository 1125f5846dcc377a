// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Diagnostics**: Log verbosity and in-memory log capacity
//! - **Registry**: Broadcast channel sizing
//! - **Queue**: Visible view limits and dismissal cleanup timing

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default verbosity threshold. Only messages with a detail level at or
/// below this value reach the logger.
pub const DEFAULT_DEBUG_LEVEL: u8 = 1;

/// Minimum verbosity threshold (errors and warnings only).
pub const MIN_DEBUG_LEVEL: u8 = 0;

/// Maximum verbosity threshold.
pub const MAX_DEBUG_LEVEL: u8 = 3;

/// Logging is enabled unless the host turns it off.
pub const DEFAULT_LOG_ENABLED: bool = true;

/// Default number of records kept by the in-memory logger.
pub const DEFAULT_MEMORY_LOG_CAPACITY: usize = 256;

// ==========================================================================
// Registry Defaults
// ==========================================================================

/// Default number of undelivered events buffered per container channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Minimum channel capacity.
pub const MIN_CHANNEL_CAPACITY: usize = 1;

/// Maximum channel capacity.
pub const MAX_CHANNEL_CAPACITY: usize = 4096;

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default delay between a dismissal and the final removal of a view (ms).
///
/// Matches the default transition animation length so content stays alive
/// until the view has animated out.
pub const DEFAULT_CLEANUP_DELAY_MS: u64 = 350;

/// Minimum cleanup delay (ms).
pub const MIN_CLEANUP_DELAY_MS: u64 = 0;

/// Maximum cleanup delay (ms).
pub const MAX_CLEANUP_DELAY_MS: u64 = 5_000;

/// Default maximum number of simultaneously visible views in `Multiple` mode.
pub const DEFAULT_MAX_VISIBLE: usize = 10;

/// Minimum visible view limit.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum visible view limit.
pub const MAX_MAX_VISIBLE: usize = 100;
