// SPDX-License-Identifier: MPL-2.0
//! Resolution of container-level and view-level settings.
//!
//! Alignment and tap-to-dismiss follow the same rule as the background:
//! a per-view value is honored only in stacking containers. The remaining
//! presentation fields always prefer the view, then the container, then a
//! fixed default.

use std::time::Duration;

use super::background::ContainerBackgroundStyle;
use super::container::{ContainerConfiguration, DisplayType};
use super::style::{
    Alignment, Animation, BackgroundTransition, DismissGesture, ShadowStyle, Transition,
};
use super::view::ContainerViewConfiguration;

/// Fully resolved settings for one presented view.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeConfiguration {
    pub display_type: DisplayType,
    pub alignment: Alignment,
    pub tap_to_dismiss: bool,
    pub background_style: ContainerBackgroundStyle,
    pub background_transition: BackgroundTransition,
    pub shadow_style: ShadowStyle,
    pub dismiss_gesture: DismissGesture,
    pub transition: Transition,
    pub auto_dismiss: Option<Duration>,
    pub animation: Animation,
}

impl CompositeConfiguration {
    #[must_use]
    pub fn new(container: &ContainerConfiguration, view: &ContainerViewConfiguration) -> Self {
        let display_type = container.display_type;
        let stacking = display_type == DisplayType::Stacking;

        let (alignment, tap_to_dismiss, background_transition) = if stacking {
            (
                view.alignment.or(container.alignment),
                view.tap_to_dismiss.or(container.tap_to_dismiss),
                view.background_transition,
            )
        } else {
            (
                container.alignment,
                container.tap_to_dismiss,
                container
                    .background_transition
                    .unwrap_or(view.background_transition),
            )
        };

        Self {
            display_type,
            alignment: alignment.unwrap_or_default(),
            tap_to_dismiss: tap_to_dismiss.unwrap_or(false),
            background_style: ContainerBackgroundStyle::merge(
                container.background_style.as_ref(),
                view.background_style.as_ref(),
                display_type,
            ),
            background_transition,
            shadow_style: view
                .shadow_style
                .or(container.shadow_style)
                .unwrap_or_default(),
            dismiss_gesture: view
                .dismiss_gesture
                .or(container.dismiss_gesture)
                .unwrap_or_default(),
            transition: view
                .transition
                .clone()
                .or_else(|| container.transition.clone())
                .unwrap_or_default(),
            auto_dismiss: view.auto_dismiss.or(container.auto_dismiss),
            animation: view.animation.or(container.animation).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::container::QueueType;
    use iced_core::Color;

    #[test]
    fn stacking_prefers_view_alignment_and_tap() {
        let container = ContainerConfiguration::default()
            .with_alignment(Alignment::BOTTOM)
            .with_tap_to_dismiss(false);
        let view = ContainerViewConfiguration::new()
            .with_alignment(Alignment::TOP)
            .with_tap_to_dismiss(true);

        let merged = CompositeConfiguration::new(&container, &view);
        assert_eq!(merged.alignment, Alignment::TOP);
        assert!(merged.tap_to_dismiss);
    }

    #[test]
    fn vertical_uses_container_alignment_and_tap() {
        let container = ContainerConfiguration::new(DisplayType::Vertical, QueueType::Multiple)
            .with_alignment(Alignment::BOTTOM);
        let view = ContainerViewConfiguration::new()
            .with_alignment(Alignment::TOP)
            .with_tap_to_dismiss(true);

        let merged = CompositeConfiguration::new(&container, &view);
        assert_eq!(merged.alignment, Alignment::BOTTOM);
        assert!(!merged.tap_to_dismiss);
    }

    #[test]
    fn presentation_fields_fall_back_in_order() {
        let container = ContainerConfiguration::default()
            .with_transition(Transition::Slide)
            .with_auto_dismiss(Duration::from_secs(5))
            .with_shadow(ShadowStyle::Radius(4.0));
        let view = ContainerViewConfiguration::new().with_auto_dismiss(Duration::from_secs(1));

        let merged = CompositeConfiguration::new(&container, &view);
        assert_eq!(merged.transition, Transition::Slide);
        assert_eq!(merged.auto_dismiss, Some(Duration::from_secs(1)));
        assert_eq!(merged.shadow_style, ShadowStyle::Radius(4.0));
        assert_eq!(merged.dismiss_gesture, DismissGesture::Disabled);
        assert_eq!(merged.animation, Animation::default());
    }

    #[test]
    fn background_follows_merge_policy() {
        let red = ContainerBackgroundStyle::Color(Color::from_rgb(1.0, 0.0, 0.0));
        let blue = ContainerBackgroundStyle::Color(Color::from_rgb(0.0, 0.0, 1.0));
        let view = ContainerViewConfiguration::new().with_background(blue.clone());

        let stacking = ContainerConfiguration::default().with_background(red.clone());
        assert_eq!(
            CompositeConfiguration::new(&stacking, &view).background_style,
            blue
        );

        let horizontal = ContainerConfiguration::new(DisplayType::Horizontal, QueueType::Multiple)
            .with_background(red.clone());
        assert_eq!(
            CompositeConfiguration::new(&horizontal, &view).background_style,
            red
        );
    }

    #[test]
    fn empty_inputs_yield_defaults() {
        let merged = CompositeConfiguration::new(
            &ContainerConfiguration::default(),
            &ContainerViewConfiguration::default(),
        );
        assert_eq!(merged.alignment, Alignment::CENTER);
        assert!(!merged.tap_to_dismiss);
        assert!(merged.background_style.is_disabled());
        assert_eq!(merged.transition, Transition::Opacity);
        assert!(merged.auto_dismiss.is_none());
    }
}
