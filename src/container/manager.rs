// SPDX-License-Identifier: MPL-2.0
//! Container registry and show/dismiss dispatch.
//!
//! The `ContainerManager` maps container names to broadcast channels.
//! Containers register themselves to obtain a [`ContainerSubscription`];
//! producers push views into them by name. Every failure is fail-soft: a bad
//! container name is logged and the request becomes a no-op.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast::{self, Sender};

use super::event::ContainerEvent;
use super::subscription::ContainerSubscription;
use super::view::{
    split_container_view, ContainerView, IdentifiableContainerView, PresentationBinding,
    ViewPayload,
};
use crate::config::Config;
use crate::configuration::ContainerViewConfiguration;
use crate::diagnostics::{DiagnosticsHandle, LogType, TracingLogger, DETAIL_COARSE, DETAIL_TRACE};
use crate::domain::container::{ChannelCapacity, ContainerName, ViewId};

/// Registry of named containers and entry point for showing views.
///
/// All methods take `&self`; share the manager between threads with `Arc`.
#[derive(Debug)]
pub struct ContainerManager {
    publishers: Mutex<HashMap<ContainerName, Sender<ContainerEvent>>>,
    diagnostics: DiagnosticsHandle,
    channel_capacity: ChannelCapacity,
}

impl ContainerManager {
    /// Creates an empty registry logging through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_diagnostics(DiagnosticsHandle::default(), ChannelCapacity::default())
    }

    /// Creates an empty registry with explicit diagnostics and channel sizing.
    #[must_use]
    pub fn with_diagnostics(diagnostics: DiagnosticsHandle, channel_capacity: ChannelCapacity) -> Self {
        Self {
            publishers: Mutex::new(HashMap::new()),
            diagnostics,
            channel_capacity,
        }
    }

    /// Creates an empty registry from persisted settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let diagnostics = DiagnosticsHandle::with_settings(
            Arc::new(TracingLogger),
            config.log_enabled(),
            config.debug_level(),
        );
        Self::with_diagnostics(diagnostics, config.channel_capacity())
    }

    /// Returns the diagnostics handle used by this registry.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsHandle {
        &self.diagnostics
    }

    fn publishers(&self) -> MutexGuard<'_, HashMap<ContainerName, Sender<ContainerEvent>>> {
        self.publishers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ==========================================================================
    // Container management
    // ==========================================================================

    /// Registers a container and returns the stream of events sent to it.
    ///
    /// If the name is already registered, the old channel is replaced: its
    /// subscribers receive nothing published from now on.
    pub fn register_container(&self, name: impl Into<ContainerName>) -> ContainerSubscription {
        let name = name.into();
        let (sender, receiver) = broadcast::channel(self.channel_capacity.value());
        let replaced = self.publishers().insert(name.clone(), sender);

        if replaced.is_some() {
            self.diagnostics.send_message(
                LogType::Warning,
                &format!(
                    "Container `{name}` already exists. The new container will replace the old one."
                ),
                DETAIL_COARSE,
            );
        }
        ContainerSubscription::new(name, receiver, self.diagnostics.clone())
    }

    /// Removes a container. Unknown names are ignored.
    ///
    /// Existing subscriptions end once they have drained buffered events.
    pub fn remove_container(&self, name: &str) {
        self.publishers().remove(name);
    }

    /// Subscribes to an already registered container.
    ///
    /// The new subscriber only sees events published after this call.
    #[must_use]
    pub fn subscribe(&self, name: &str) -> Option<ContainerSubscription> {
        let publishers = self.publishers();
        let (name, sender) = publishers.get_key_value(name)?;
        Some(ContainerSubscription::new(
            name.clone(),
            sender.subscribe(),
            self.diagnostics.clone(),
        ))
    }

    /// Returns true if a container with this name is registered.
    #[must_use]
    pub fn contains_container(&self, name: &str) -> bool {
        self.publishers().contains_key(name)
    }

    /// Number of registered containers.
    #[must_use]
    pub fn container_count(&self) -> usize {
        self.publishers().len()
    }

    /// Names of registered containers, sorted.
    #[must_use]
    pub fn container_names(&self) -> Vec<ContainerName> {
        let mut names: Vec<_> = self.publishers().keys().cloned().collect();
        names.sort();
        names
    }

    // ==========================================================================
    // View management
    // ==========================================================================

    /// Shows `view` in `container` using an explicit configuration.
    ///
    /// Returns the identity of the published view, or `None` if the
    /// container does not exist.
    pub fn show<V: Any + Send + Sync>(
        &self,
        view: V,
        container: &str,
        configuration: ContainerViewConfiguration,
    ) -> Option<ViewId> {
        self.show_shared(ViewPayload::new(view), container, Arc::new(configuration), None)
    }

    /// Like [`show`](Self::show), and the container resets `binding` to
    /// `false` once the view has been removed.
    pub fn show_with_binding<V: Any + Send + Sync>(
        &self,
        view: V,
        container: &str,
        configuration: ContainerViewConfiguration,
        binding: PresentationBinding,
    ) -> Option<ViewId> {
        self.show_shared(
            ViewPayload::new(view),
            container,
            Arc::new(configuration),
            Some(binding),
        )
    }

    /// Shows a view that carries its own configuration.
    pub fn show_container_view<V: ContainerView>(&self, view: V, container: &str) -> Option<ViewId> {
        let (payload, configuration) = split_container_view(view);
        self.show_shared(payload, container, Arc::new(configuration), None)
    }

    /// Shows a self-configured view bound to a presentation flag.
    pub fn show_container_view_with_binding<V: ContainerView>(
        &self,
        view: V,
        container: &str,
        binding: PresentationBinding,
    ) -> Option<ViewId> {
        let (payload, configuration) = split_container_view(view);
        self.show_shared(payload, container, Arc::new(configuration), Some(binding))
    }

    /// Publishes an already built payload and configuration.
    pub fn show_shared(
        &self,
        payload: ViewPayload,
        container: &str,
        configuration: Arc<ContainerViewConfiguration>,
        binding: Option<PresentationBinding>,
    ) -> Option<ViewId> {
        let sender = self.sender(container)?;
        let type_name = payload.type_name();
        let view = IdentifiableContainerView::new(payload, configuration, binding);
        let id = view.id();

        // No live subscriber is not an error; the view is simply not seen.
        let _ = sender.send(ContainerEvent::Show(view));
        self.diagnostics.send_message(
            LogType::Info,
            &format!("send view `{type_name}` to container: `{container}`"),
            DETAIL_TRACE,
        );
        Some(id)
    }

    /// Asks `container` to dismiss the view with identity `id`.
    pub fn dismiss(&self, id: ViewId, container: &str, animated: bool) {
        self.publish(container, ContainerEvent::Dismiss { id, animated });
    }

    /// Asks each container to dismiss its topmost view.
    pub fn dismiss_topmost_view(&self, containers: &[&str], animated: bool) {
        for container in containers {
            self.publish(container, ContainerEvent::DismissTopmost { animated });
        }
    }

    /// Asks each container to dismiss all of its views.
    pub fn dismiss_all_views(&self, containers: &[&str], animated: bool) {
        for container in containers {
            self.publish(container, ContainerEvent::DismissAll { animated });
        }
    }

    fn publish(&self, container: &str, event: ContainerEvent) {
        if let Some(sender) = self.sender(container) {
            let _ = sender.send(event);
        }
    }

    /// Looks up the sender for `container`, logging when it is missing.
    fn sender(&self, container: &str) -> Option<Sender<ContainerEvent>> {
        let sender = self.publishers().get(container).cloned();
        if sender.is_none() {
            self.diagnostics.send_message(
                LogType::Error,
                &format!("Can't get view publisher for `{container}`"),
                DETAIL_COARSE,
            );
        }
        sender
    }
}

impl Default for ContainerManager {
    fn default() -> Self {
        Self::new()
    }
}
