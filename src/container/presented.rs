// SPDX-License-Identifier: MPL-2.0
//! Drives a container from a host-owned "is presented" flag.

use std::sync::Arc;

use super::manager::ContainerManager;
use super::view::{split_container_view, ContainerView, PresentationBinding, ViewPayload};
use crate::configuration::ContainerViewConfiguration;
use crate::domain::container::{ContainerName, ViewId};

/// Mirrors a [`PresentationBinding`] into show and dismiss requests.
///
/// Call [`update`](Self::update) whenever the host may have changed the
/// binding. Changes are detected through the binding's generation, so a
/// container-side reset followed by the host presenting again is not lost
/// even when both happen between two calls. Whenever the binding ends up
/// `true` after a change, a fresh envelope is shown; whenever it ends up
/// `false`, the outstanding one is dismissed. Dismissing an identity the
/// container already removed is a no-op on its side.
#[derive(Debug)]
pub struct PresentedView {
    container: ContainerName,
    payload: ViewPayload,
    configuration: Arc<ContainerViewConfiguration>,
    binding: PresentationBinding,
    current: Option<ViewId>,
    generation: u64,
}

impl PresentedView {
    /// Creates a driver. The current binding value is taken as the starting
    /// point, so nothing is shown until it changes.
    #[must_use]
    pub fn new(
        container: impl Into<ContainerName>,
        payload: ViewPayload,
        configuration: ContainerViewConfiguration,
        binding: PresentationBinding,
    ) -> Self {
        let (_, generation) = binding.snapshot();
        Self {
            container: container.into(),
            payload,
            configuration: Arc::new(configuration),
            binding,
            current: None,
            generation,
        }
    }

    /// Creates a driver for a view that carries its own configuration.
    #[must_use]
    pub fn from_container_view<V: ContainerView>(
        container: impl Into<ContainerName>,
        view: V,
        binding: PresentationBinding,
    ) -> Self {
        let (payload, configuration) = split_container_view(view);
        Self::new(container, payload, configuration, binding)
    }

    /// Reacts to a change of the binding since the last call.
    pub fn update(&mut self, manager: &ContainerManager) {
        let (presented, generation) = self.binding.snapshot();
        if generation == self.generation {
            return;
        }
        self.generation = generation;

        if let Some(id) = self.current.take() {
            manager.dismiss(id, self.container.as_str(), true);
        }
        if presented {
            self.current = manager.show_shared(
                self.payload.clone(),
                self.container.as_str(),
                Arc::clone(&self.configuration),
                Some(self.binding.clone()),
            );
        }
    }

    /// Sets the binding and applies the change immediately.
    pub fn set_presented(&mut self, presented: bool, manager: &ContainerManager) {
        self.binding.set(presented);
        self.update(manager);
    }

    /// Identity of the envelope shown on the last rising edge, if any.
    #[must_use]
    pub fn current_id(&self) -> Option<ViewId> {
        self.current
    }

    #[must_use]
    pub fn container(&self) -> &ContainerName {
        &self.container
    }

    #[must_use]
    pub fn binding(&self) -> &PresentationBinding {
        &self.binding
    }
}
