// SPDX-License-Identifier: MPL-2.0
//! The envelope carried from a producer to a container.

use std::any::{type_name, Any};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::configuration::ContainerViewConfiguration;
use crate::domain::container::ViewId;

/// Opaque view content supplied by the host.
///
/// The crate never inspects it beyond its type name; the host downcasts it
/// back when rendering.
#[derive(Clone)]
pub struct ViewPayload {
    content: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ViewPayload {
    pub fn new<T: Any + Send + Sync>(content: T) -> Self {
        Self {
            content: Arc::new(content),
            type_name: type_name::<T>(),
        }
    }

    /// Returns the content if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.content.downcast_ref::<T>()
    }

    /// Returns the Rust type name of the content.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for ViewPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewPayload").field(&self.type_name).finish()
    }
}

/// A view that describes its own display configuration.
///
/// Showing such a view is the same as showing it with
/// [`ContainerView::configuration`] as its explicit configuration.
pub trait ContainerView: Any + Send + Sync {
    fn configuration(&self) -> ContainerViewConfiguration {
        ContainerViewConfiguration::default()
    }
}

/// Splits a self-describing view into its payload and configuration.
pub fn split_container_view<V: ContainerView>(view: V) -> (ViewPayload, ContainerViewConfiguration) {
    let configuration = view.configuration();
    (ViewPayload::new(view), configuration)
}

/// Shared "is presented" flag owned by the host.
///
/// Containers reset it to `false` once a view bound to it has been removed,
/// so host state follows dismissals made by gestures or timers.
///
/// Besides the flag, the binding counts how often it has actually changed.
/// Observers compare that generation instead of the value, so a reset
/// followed by a new `true` is still seen as a change.
#[derive(Debug, Clone, Default)]
pub struct PresentationBinding(Arc<AtomicU64>);

impl PresentationBinding {
    #[must_use]
    pub fn new(presented: bool) -> Self {
        Self(Arc::new(AtomicU64::new(u64::from(presented))))
    }

    #[must_use]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst) & 1 == 1
    }

    /// Stores `presented`. Writing the current value is not a change.
    pub fn set(&self, presented: bool) {
        let bit = u64::from(presented);
        let _ = self
            .0
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |state| {
                if state & 1 == bit {
                    None
                } else {
                    Some(((state >> 1).wrapping_add(1) << 1) | bit)
                }
            });
    }

    /// Number of changes since creation, read together with the value.
    #[must_use]
    pub fn snapshot(&self) -> (bool, u64) {
        let state = self.0.load(Ordering::SeqCst);
        (state & 1 == 1, state >> 1)
    }

    /// Returns true if both handles refer to the same flag.
    #[must_use]
    pub fn same_as(&self, other: &PresentationBinding) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A uniquely identified, configured view queued for display.
#[derive(Clone)]
pub struct IdentifiableContainerView {
    id: ViewId,
    payload: ViewPayload,
    configuration: Arc<ContainerViewConfiguration>,
    is_presented: Option<PresentationBinding>,
}

impl IdentifiableContainerView {
    /// Wraps a payload with a fresh identity.
    #[must_use]
    pub fn new(
        payload: ViewPayload,
        configuration: Arc<ContainerViewConfiguration>,
        is_presented: Option<PresentationBinding>,
    ) -> Self {
        Self {
            id: ViewId::new(),
            payload,
            configuration,
            is_presented,
        }
    }

    #[must_use]
    pub fn id(&self) -> ViewId {
        self.id
    }

    #[must_use]
    pub fn payload(&self) -> &ViewPayload {
        &self.payload
    }

    #[must_use]
    pub fn configuration(&self) -> &ContainerViewConfiguration {
        &self.configuration
    }

    #[must_use]
    pub fn is_presented(&self) -> Option<&PresentationBinding> {
        self.is_presented.as_ref()
    }

    /// Resets the external binding, if any, to `false`.
    pub(crate) fn reset_binding(&self) {
        if let Some(binding) = &self.is_presented {
            binding.set(false);
        }
    }
}

impl fmt::Debug for IdentifiableContainerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifiableContainerView")
            .field("id", &self.id)
            .field("payload", &self.payload)
            .field("bound", &self.is_presented.is_some())
            .finish_non_exhaustive()
    }
}
