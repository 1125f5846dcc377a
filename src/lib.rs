// SPDX-License-Identifier: MPL-2.0
//! `overlay_container` routes overlay views (sheets, toasts, popups) to named
//! containers.
//!
//! Any part of an application can ask a [`ContainerManager`] to show a view in
//! a container registered elsewhere, identified only by its name. Each
//! container consumes its event stream through a [`ContainerQueue`], which
//! applies the display type, queue policy, auto-dismiss timers and the
//! deferred cleanup that leaves room for exit transitions.
//!
//! Rendering is left to the host: views travel as opaque payloads together
//! with a [`configuration::CompositeConfiguration`] describing how they should
//! look. Diagnostics go through a swappable [`diagnostics::Logger`] that
//! defaults to `tracing`.

#![doc(html_root_url = "https://docs.rs/overlay_container/0.1.0")]

pub mod config;
pub mod configuration;
pub mod container;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod presenter;

pub use container::{
    ContainerEvent, ContainerManager, ContainerQueue, ContainerSubscription, ContainerView,
    PresentationBinding, PresentedView,
};
pub use error::{Error, Result};
pub use presenter::OverlayPresenter;
