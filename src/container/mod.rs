// SPDX-License-Identifier: MPL-2.0
//! Named overlay containers and the channels feeding them.
//!
//! Producers talk to a [`ContainerManager`], which keeps one broadcast
//! channel per registered container name. Each container consumes its
//! [`ContainerSubscription`], usually through a [`ContainerQueue`] that
//! applies the display and queue policy.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use overlay_container::configuration::{ContainerConfiguration, ContainerViewConfiguration};
//! use overlay_container::container::{ContainerManager, ContainerQueue};
//!
//! let manager = ContainerManager::new();
//! let mut subscription = manager.register_container("toasts");
//! let mut queue = ContainerQueue::new(ContainerConfiguration::default());
//!
//! let id = manager
//!     .show("Saved", "toasts", ContainerViewConfiguration::default())
//!     .expect("container is registered");
//! queue.pump(&mut subscription, Instant::now());
//! assert!(queue.is_visible(id));
//! ```

pub mod event;
pub mod manager;
pub mod presented;
pub mod queue;
pub mod scheduler;
pub mod subscription;
pub mod view;

pub use event::ContainerEvent;
pub use manager::ContainerManager;
pub use presented::PresentedView;
pub use queue::{ContainerQueue, PresentedEntry};
pub use scheduler::DismissScheduler;
pub use subscription::ContainerSubscription;
pub use view::{
    split_container_view, ContainerView, IdentifiableContainerView, PresentationBinding,
    ViewPayload,
};
