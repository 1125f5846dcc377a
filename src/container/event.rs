// SPDX-License-Identifier: MPL-2.0
//! Events published on a container channel.

use super::view::IdentifiableContainerView;
use crate::domain::container::ViewId;

/// Instruction delivered to a container's consumer.
#[derive(Debug, Clone)]
pub enum ContainerEvent {
    /// Present a new view.
    Show(IdentifiableContainerView),
    /// Dismiss one view. Unknown ids are ignored.
    Dismiss { id: ViewId, animated: bool },
    /// Dismiss the most recently presented visible view.
    DismissTopmost { animated: bool },
    /// Dismiss every visible view and drop every waiting one.
    DismissAll { animated: bool },
}

impl ContainerEvent {
    /// Returns the envelope for `Show` events.
    #[must_use]
    pub fn as_show(&self) -> Option<&IdentifiableContainerView> {
        match self {
            ContainerEvent::Show(view) => Some(view),
            _ => None,
        }
    }
}
