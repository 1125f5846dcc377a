// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.
//!
//! This module provides type-safe wrappers for diagnostics values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Debug Level Bounds
// =============================================================================

/// Debug level bounds (0 to 3).
pub mod debug_level_bounds {
    /// Minimum level. Only detail-0 messages pass.
    pub const MIN: u8 = 0;
    /// Maximum level. Every message passes.
    pub const MAX: u8 = 3;
    /// Default level. Coarse operational messages only.
    pub const DEFAULT: u8 = 1;
}

// =============================================================================
// DebugLevel
// =============================================================================

/// Verbosity threshold for the diagnostics sink.
///
/// A message carrying detail level `n` is forwarded only when
/// `n <= threshold`. Higher thresholds let fine-grained traces through.
///
/// # Example
///
/// ```ignore
/// let level = DebugLevel::new(2);
/// assert!(level.allows(1));
/// assert!(level.allows(2));
/// assert!(!level.allows(3));
///
/// // Values outside range are clamped
/// assert_eq!(DebugLevel::new(200).value(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DebugLevel(u8);

impl DebugLevel {
    /// Creates a new debug level, clamping to valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(debug_level_bounds::MIN, debug_level_bounds::MAX))
    }

    /// Returns the value as u8.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true if a message with the given detail level passes this threshold.
    #[must_use]
    pub fn allows(self, detail: u8) -> bool {
        detail <= self.0
    }
}

impl Default for DebugLevel {
    fn default() -> Self {
        Self(debug_level_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
