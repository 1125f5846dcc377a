// SPDX-License-Identifier: MPL-2.0
//! Presentation descriptors.
//!
//! These are plain data handed to the host renderer. Nothing here draws,
//! animates or recognizes gestures.

use iced_core::alignment::{Horizontal, Vertical};
use iced_core::{Color, Shadow, Vector};
use std::time::Duration;

// ==========================================================================
// Alignment
// ==========================================================================

/// Position of a view inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Alignment {
    pub const CENTER: Self = Self::new(Horizontal::Center, Vertical::Center);
    pub const TOP: Self = Self::new(Horizontal::Center, Vertical::Top);
    pub const BOTTOM: Self = Self::new(Horizontal::Center, Vertical::Bottom);
    pub const LEADING: Self = Self::new(Horizontal::Left, Vertical::Center);
    pub const TRAILING: Self = Self::new(Horizontal::Right, Vertical::Center);
    pub const TOP_LEADING: Self = Self::new(Horizontal::Left, Vertical::Top);
    pub const TOP_TRAILING: Self = Self::new(Horizontal::Right, Vertical::Top);
    pub const BOTTOM_LEADING: Self = Self::new(Horizontal::Left, Vertical::Bottom);
    pub const BOTTOM_TRAILING: Self = Self::new(Horizontal::Right, Vertical::Bottom);

    #[must_use]
    pub const fn new(horizontal: Horizontal, vertical: Vertical) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}

// ==========================================================================
// Shadow
// ==========================================================================

/// Shadow drawn behind an overlay view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ShadowStyle {
    /// No shadow.
    #[default]
    Disabled,
    /// Default shadow color and offset with the given blur radius.
    Radius(f32),
    /// Fully specified shadow.
    Custom(Shadow),
}

impl ShadowStyle {
    /// Color used by [`ShadowStyle::Radius`].
    pub const DEFAULT_COLOR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.33,
    };

    /// Offset used by [`ShadowStyle::Radius`].
    pub const DEFAULT_OFFSET: Vector = Vector { x: 4.0, y: 0.0 };

    /// Resolves the descriptor to a concrete shadow, if any.
    #[must_use]
    pub fn shadow(&self) -> Option<Shadow> {
        match *self {
            ShadowStyle::Disabled => None,
            ShadowStyle::Radius(blur_radius) => Some(Shadow {
                color: Self::DEFAULT_COLOR,
                offset: Self::DEFAULT_OFFSET,
                blur_radius,
            }),
            ShadowStyle::Custom(shadow) => Some(shadow),
        }
    }
}

// ==========================================================================
// Gesture
// ==========================================================================

/// Gesture that dismisses a view. Recognition is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DismissGesture {
    Tap,
    DoubleTap,
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
    LongPress,
    #[default]
    Disabled,
}

// ==========================================================================
// Transition & Animation
// ==========================================================================

/// Screen edge used by edge-based transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Leading,
    Trailing,
}

/// How a view enters and leaves its container.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Transition {
    Identity,
    #[default]
    Opacity,
    Move(Edge),
    Slide,
    Scale(f32),
    Offset(Vector),
    /// Several transitions applied together.
    Combined(Vec<Transition>),
    /// Different transitions for insertion and removal.
    Asymmetric {
        insertion: Box<Transition>,
        removal: Box<Transition>,
    },
}

impl Transition {
    /// Combines this transition with another one.
    #[must_use]
    pub fn combined(self, other: Transition) -> Self {
        match self {
            Transition::Combined(mut parts) => {
                parts.push(other);
                Transition::Combined(parts)
            }
            first => Transition::Combined(vec![first, other]),
        }
    }

    #[must_use]
    pub fn asymmetric(insertion: Transition, removal: Transition) -> Self {
        Transition::Asymmetric {
            insertion: Box::new(insertion),
            removal: Box::new(removal),
        }
    }
}

/// Animation curve descriptor used to drive transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    Linear(Duration),
    EaseIn(Duration),
    EaseOut(Duration),
    EaseInOut(Duration),
    Spring { response: Duration, damping: f32 },
    /// Changes apply without animating.
    Disabled,
}

impl Animation {
    /// Length of the default animation.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(350);

    /// Nominal duration of the animation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        match *self {
            Animation::Linear(d)
            | Animation::EaseIn(d)
            | Animation::EaseOut(d)
            | Animation::EaseInOut(d) => d,
            Animation::Spring { response, .. } => response,
            Animation::Disabled => Duration::ZERO,
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Animation::EaseInOut(Self::DEFAULT_DURATION)
    }
}

// ==========================================================================
// Background descriptors
// ==========================================================================

/// Blur material thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Material {
    UltraThin,
    Thin,
    #[default]
    Regular,
    Thick,
    UltraThick,
}

/// Transition of the background behind a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundTransition {
    Identity,
    #[default]
    Opacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_shadow_uses_default_color_and_offset() {
        let shadow = ShadowStyle::Radius(10.0).shadow().unwrap();
        assert_eq!(shadow.blur_radius, 10.0);
        assert_eq!(shadow.color, ShadowStyle::DEFAULT_COLOR);
        assert_eq!(shadow.offset, ShadowStyle::DEFAULT_OFFSET);
        assert!(ShadowStyle::Disabled.shadow().is_none());
    }

    #[test]
    fn combined_flattens_chains() {
        let transition = Transition::Opacity
            .combined(Transition::Slide)
            .combined(Transition::Scale(0.8));
        assert_eq!(
            transition,
            Transition::Combined(vec![
                Transition::Opacity,
                Transition::Slide,
                Transition::Scale(0.8)
            ])
        );
    }

    #[test]
    fn animation_durations() {
        assert_eq!(Animation::default().duration(), Duration::from_millis(350));
        assert_eq!(Animation::Disabled.duration(), Duration::ZERO);
        let spring = Animation::Spring {
            response: Duration::from_millis(500),
            damping: 0.8,
        };
        assert_eq!(spring.duration(), Duration::from_millis(500));
    }

    #[test]
    fn defaults_match_inherit_values() {
        assert_eq!(Alignment::default(), Alignment::CENTER);
        assert_eq!(DismissGesture::default(), DismissGesture::Disabled);
        assert_eq!(Transition::default(), Transition::Opacity);
        assert_eq!(BackgroundTransition::default(), BackgroundTransition::Opacity);
    }
}
