// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and their validity rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`container`]: Container types ([`ContainerName`](container::ContainerName),
//!   [`ViewId`](container::ViewId), [`MaxVisible`](container::MaxVisible),
//!   [`CleanupDelay`](container::CleanupDelay), [`ChannelCapacity`](container::ChannelCapacity))
//! - [`diagnostics`]: Diagnostics types ([`DebugLevel`](diagnostics::DebugLevel))

pub mod container;
pub mod diagnostics;
