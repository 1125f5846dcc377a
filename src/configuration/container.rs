// SPDX-License-Identifier: MPL-2.0
//! Container-level configuration.

use std::time::Duration;

use iced_core::Padding;

use super::background::ContainerBackgroundStyle;
use super::style::{
    Alignment, Animation, BackgroundTransition, DismissGesture, ShadowStyle, Transition,
};
use crate::domain::container::MaxVisible;

/// How visible views are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayType {
    /// Views overlap; each may have its own background and alignment.
    #[default]
    Stacking,
    /// Views are placed side by side behind one shared background.
    Horizontal,
    /// Views are placed top to bottom behind one shared background.
    Vertical,
}

/// How new views are admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueueType {
    /// Several views at once, the oldest evicted beyond the limit.
    #[default]
    Multiple,
    /// One view at a time, a new view replaces the current one.
    OneByOne,
    /// One view at a time, new views wait until the current one is dismissed.
    OneByOneWaitFinish,
}

/// Settings shared by every view shown in a container.
#[derive(Debug, Clone, Default)]
pub struct ContainerConfiguration {
    pub display_type: DisplayType,
    pub queue_type: QueueType,
    pub max_visible: MaxVisible,
    /// Gap between views in horizontal and vertical layouts.
    pub spacing: f32,
    pub insets: Padding,
    pub clip: bool,
    pub alignment: Option<Alignment>,
    pub tap_to_dismiss: Option<bool>,
    pub background_style: Option<ContainerBackgroundStyle>,
    pub background_transition: Option<BackgroundTransition>,
    pub shadow_style: Option<ShadowStyle>,
    pub dismiss_gesture: Option<DismissGesture>,
    pub transition: Option<Transition>,
    pub auto_dismiss: Option<Duration>,
    pub animation: Option<Animation>,
}

impl ContainerConfiguration {
    #[must_use]
    pub fn new(display_type: DisplayType, queue_type: QueueType) -> Self {
        Self {
            display_type,
            queue_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_visible(mut self, max_visible: MaxVisible) -> Self {
        self.max_visible = max_visible;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_insets(mut self, insets: impl Into<Padding>) -> Self {
        self.insets = insets.into();
        self
    }

    #[must_use]
    pub fn with_clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    #[must_use]
    pub fn with_tap_to_dismiss(mut self, tap_to_dismiss: bool) -> Self {
        self.tap_to_dismiss = Some(tap_to_dismiss);
        self
    }

    #[must_use]
    pub fn with_background(mut self, style: ContainerBackgroundStyle) -> Self {
        self.background_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_background_transition(mut self, transition: BackgroundTransition) -> Self {
        self.background_transition = Some(transition);
        self
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow: ShadowStyle) -> Self {
        self.shadow_style = Some(shadow);
        self
    }

    #[must_use]
    pub fn with_dismiss_gesture(mut self, gesture: DismissGesture) -> Self {
        self.dismiss_gesture = Some(gesture);
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    #[must_use]
    pub fn with_auto_dismiss(mut self, after: Duration) -> Self {
        self.auto_dismiss = Some(after);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Shared background drawn behind all views, when the layout has one.
    ///
    /// Stacking containers resolve backgrounds per view instead.
    #[must_use]
    pub fn shared_background(&self) -> Option<ContainerBackgroundStyle> {
        match self.display_type {
            DisplayType::Stacking => None,
            DisplayType::Horizontal | DisplayType::Vertical => Some(
                ContainerBackgroundStyle::merge(
                    self.background_style.as_ref(),
                    None,
                    self.display_type,
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced_core::Color;

    #[test]
    fn defaults_are_stacking_multiple() {
        let config = ContainerConfiguration::default();
        assert_eq!(config.display_type, DisplayType::Stacking);
        assert_eq!(config.queue_type, QueueType::Multiple);
        assert_eq!(config.max_visible, MaxVisible::default());
        assert!(!config.clip);
    }

    #[test]
    fn shared_background_only_for_linear_layouts() {
        let color = ContainerBackgroundStyle::Color(Color::BLACK);
        let stacking = ContainerConfiguration::default().with_background(color.clone());
        assert!(stacking.shared_background().is_none());

        let vertical = ContainerConfiguration::new(DisplayType::Vertical, QueueType::Multiple)
            .with_background(color.clone());
        assert_eq!(vertical.shared_background(), Some(color));

        let bare = ContainerConfiguration::new(DisplayType::Horizontal, QueueType::OneByOne);
        assert_eq!(
            bare.shared_background(),
            Some(ContainerBackgroundStyle::Disabled)
        );
    }

    #[test]
    fn builder_sets_layout_fields() {
        let config = ContainerConfiguration::new(DisplayType::Vertical, QueueType::Multiple)
            .with_spacing(8.0)
            .with_insets(12.0)
            .with_max_visible(MaxVisible::new(3));

        assert_eq!(config.spacing, 8.0);
        assert_eq!(config.insets, Padding::new(12.0));
        assert_eq!(config.max_visible.value(), 3);
    }
}
