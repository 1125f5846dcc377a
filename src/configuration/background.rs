// SPDX-License-Identifier: MPL-2.0
//! Background style of a container and its merge policy.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use iced_core::Color;

use super::container::DisplayType;
use super::style::Material;

/// Host-defined background content, opaque to this crate.
///
/// Two values are equal only when they share the same allocation.
#[derive(Clone)]
pub struct CustomBackground(Arc<dyn Any + Send + Sync>);

impl CustomBackground {
    pub fn new<T: Any + Send + Sync>(content: T) -> Self {
        Self(Arc::new(content))
    }

    /// Returns the content if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for CustomBackground {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomBackground(..)")
    }
}

/// The background drawn behind overlay views.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerBackgroundStyle {
    Color(Color),
    Blur(Material),
    Custom(CustomBackground),
    Disabled,
}

impl ContainerBackgroundStyle {
    /// Resolves the background for one view.
    ///
    /// When the display type is stacking, each view may carry its own
    /// background and it wins over the container's. When the display type is
    /// horizontal or vertical, a single background sits behind every view, so
    /// the view's style is ignored.
    ///
    /// ```text
    /// stacking:
    ///   container   view       result
    ///   None        None       Disabled
    ///   None        Disabled   Disabled
    ///   None        Color      Color
    ///   Disabled    None       Disabled
    ///   Color       Blur       Blur
    ///   Color(red)  Color(blue) Color(blue)
    /// ```
    #[must_use]
    pub fn merge(
        container: Option<&ContainerBackgroundStyle>,
        view: Option<&ContainerBackgroundStyle>,
        display_type: DisplayType,
    ) -> ContainerBackgroundStyle {
        match display_type {
            DisplayType::Horizontal | DisplayType::Vertical => {
                container.cloned().unwrap_or(ContainerBackgroundStyle::Disabled)
            }
            DisplayType::Stacking => match container {
                None => view.cloned().unwrap_or(ContainerBackgroundStyle::Disabled),
                Some(container) => view.unwrap_or(container).clone(),
            },
        }
    }

    /// Returns true if nothing is drawn.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        matches!(self, ContainerBackgroundStyle::Disabled)
    }
}
