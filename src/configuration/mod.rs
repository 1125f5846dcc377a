// SPDX-License-Identifier: MPL-2.0
//! Display configuration for containers and the views shown in them.
//!
//! # Components
//!
//! - [`style`] - Presentation descriptors (alignment, shadow, gesture, transition, animation)
//! - [`background`] - [`ContainerBackgroundStyle`] and its merge policy
//! - [`view`] - [`ContainerViewConfiguration`], the per-view settings
//! - [`container`] - [`ContainerConfiguration`], display and queue policy
//! - [`composite`] - [`CompositeConfiguration`], the resolved result
//!
//! # Precedence
//!
//! Per-view settings are optional and defer to the container. Background,
//! alignment and tap-to-dismiss are only taken from the view in stacking
//! containers, because horizontal and vertical layouts share one background
//! behind every view.

pub mod background;
pub mod composite;
pub mod container;
pub mod style;
pub mod view;

pub use background::{ContainerBackgroundStyle, CustomBackground};
pub use composite::CompositeConfiguration;
pub use container::{ContainerConfiguration, DisplayType, QueueType};
pub use style::{
    Alignment, Animation, BackgroundTransition, DismissGesture, Edge, Material, ShadowStyle,
    Transition,
};
pub use view::{Action, ContainerViewConfiguration};
