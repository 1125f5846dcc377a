// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! This module provides pure domain types for diagnostics:
//! - [`DebugLevel`]: Verbosity threshold for the diagnostics sink

mod newtypes;

pub use newtypes::{debug_level_bounds, DebugLevel};
