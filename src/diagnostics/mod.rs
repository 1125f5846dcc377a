// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the overlay pipeline.
//!
//! Operational warnings (a container name registered twice, a show request
//! aimed at a missing container) are written through a pluggable sink
//! instead of being returned as errors.
//!
//! # Architecture
//!
//! - [`Logger`]: Sink trait, implemented by [`TracingLogger`] (default),
//!   [`MemoryLogger`], [`NullLogger`] and any `Fn(LogType, &str)`
//! - [`DiagnosticsHandle`]: Enable flag, verbosity threshold and active sink
//! - [`CircularBuffer`]: Bounded storage behind [`MemoryLogger`]
//!
//! # Detail levels
//!
//! Every message carries a detail level. Failures and misuse use level 1 so
//! they pass the default threshold; per-dispatch traces use level 2.

mod buffer;
mod handle;
mod logger;
mod memory;

pub use buffer::CircularBuffer;
pub use handle::DiagnosticsHandle;
pub use logger::{LogType, Logger, NullLogger, TracingLogger};
pub use memory::{LogRecord, MemoryLogger};

/// Detail level for failures and misuse.
pub const DETAIL_COARSE: u8 = 1;

/// Detail level for routine traces such as successful dispatch.
pub const DETAIL_TRACE: u8 = 2;
