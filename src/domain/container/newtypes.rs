// SPDX-License-Identifier: MPL-2.0
//! Container newtypes.
//!
//! Identifiers for containers and presented views, plus bounded settings
//! that enforce validity at the type level.

use std::borrow::Borrow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

// =============================================================================
// ContainerName
// =============================================================================

/// Unique name of an overlay container.
///
/// At most one live channel exists per name in a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerName(String);

impl ContainerName {
    /// Creates a container name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ContainerName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&ContainerName> for ContainerName {
    fn from(name: &ContainerName) -> Self {
        name.clone()
    }
}

impl Borrow<str> for ContainerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// ViewId
// =============================================================================

/// Unique identity of a presented view envelope.
///
/// Drawn from a process-wide counter, so identities are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    /// Creates a new unique view ID.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric identifier.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

// =============================================================================
// MaxVisible
// =============================================================================

/// Visible view limit bounds (1 to 100 views).
pub mod max_visible_bounds {
    /// Minimum visible view limit.
    pub const MIN: usize = 1;
    /// Maximum visible view limit.
    pub const MAX: usize = 100;
    /// Default visible view limit.
    pub const DEFAULT: usize = 10;
}

/// Maximum number of views a `Multiple` queue keeps visible at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new limit, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_visible_bounds::MIN, max_visible_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(max_visible_bounds::DEFAULT)
    }
}

// =============================================================================
// CleanupDelay
// =============================================================================

/// Cleanup delay bounds in milliseconds (0 to 5000).
pub mod cleanup_delay_bounds {
    /// Minimum delay (immediate cleanup).
    pub const MIN_MS: u64 = 0;
    /// Maximum delay.
    pub const MAX_MS: u64 = 5_000;
    /// Default delay, the length of the default dismiss transition.
    pub const DEFAULT_MS: u64 = 350;
}

/// Time between a view being dismissed and its final removal.
///
/// During this window the view is still rendered so its exit transition can
/// play; afterwards its binding is reset and its content released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupDelay(Duration);

impl CleanupDelay {
    /// Creates a new delay from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(Duration::from_millis(value.clamp(
            cleanup_delay_bounds::MIN_MS,
            cleanup_delay_bounds::MAX_MS,
        )))
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns true if cleanup happens immediately.
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0.is_zero()
    }
}

impl Default for CleanupDelay {
    fn default() -> Self {
        Self(Duration::from_millis(cleanup_delay_bounds::DEFAULT_MS))
    }
}

// =============================================================================
// ChannelCapacity
// =============================================================================

/// Channel capacity bounds (1 to 4096 events).
pub mod channel_capacity_bounds {
    /// Minimum capacity.
    pub const MIN: usize = 1;
    /// Maximum capacity.
    pub const MAX: usize = 4096;
    /// Default capacity.
    pub const DEFAULT: usize = 64;
}

/// Number of undelivered events a container channel buffers per subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelCapacity(usize);

impl ChannelCapacity {
    /// Creates a new capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(channel_capacity_bounds::MIN, channel_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for ChannelCapacity {
    fn default() -> Self {
        Self(channel_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
