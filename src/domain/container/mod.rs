// SPDX-License-Identifier: MPL-2.0
//! Container domain types.
//!
//! This module contains the identifiers and bounded settings shared by the
//! registry, the dispatch layer and container queues.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{
    channel_capacity_bounds, cleanup_delay_bounds, max_visible_bounds, ChannelCapacity,
    CleanupDelay, ContainerName, MaxVisible, ViewId,
};
