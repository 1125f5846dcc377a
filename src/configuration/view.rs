// SPDX-License-Identifier: MPL-2.0
//! Per-view display configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::background::ContainerBackgroundStyle;
use super::style::{
    Alignment, Animation, BackgroundTransition, DismissGesture, ShadowStyle, Transition,
};

/// Life-cycle callback attached to a view.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Display settings carried by one presented view.
///
/// Every `None` field defers to the container's configuration. Values are
/// set through the `with_*` builder methods and never change once the view
/// has been shown.
#[derive(Clone, Default)]
pub struct ContainerViewConfiguration {
    /// Alignment inside a stacking container.
    pub alignment: Option<Alignment>,
    /// Dismiss when the background is tapped (stacking only).
    pub tap_to_dismiss: Option<bool>,
    pub background_style: Option<ContainerBackgroundStyle>,
    pub background_transition: BackgroundTransition,
    pub shadow_style: Option<ShadowStyle>,
    pub dismiss_gesture: Option<DismissGesture>,
    pub transition: Option<Transition>,
    /// Dismiss automatically after this long.
    pub auto_dismiss: Option<Duration>,
    pub animation: Option<Animation>,
    /// Called when the view becomes visible. Not called while it waits in a queue.
    pub appear_action: Option<Action>,
    /// Called when the view has been removed. Not called for views dropped from a queue.
    pub disappear_action: Option<Action>,
}

impl ContainerViewConfiguration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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
        self.background_transition = transition;
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

    #[must_use]
    pub fn on_appear(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.appear_action = Some(Arc::new(action));
        self
    }

    #[must_use]
    pub fn on_disappear(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.disappear_action = Some(Arc::new(action));
        self
    }

    pub(crate) fn run_appear(&self) {
        if let Some(action) = &self.appear_action {
            action();
        }
    }

    pub(crate) fn run_disappear(&self) {
        if let Some(action) = &self.disappear_action {
            action();
        }
    }
}

impl fmt::Debug for ContainerViewConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerViewConfiguration")
            .field("alignment", &self.alignment)
            .field("tap_to_dismiss", &self.tap_to_dismiss)
            .field("background_style", &self.background_style)
            .field("background_transition", &self.background_transition)
            .field("shadow_style", &self.shadow_style)
            .field("dismiss_gesture", &self.dismiss_gesture)
            .field("transition", &self.transition)
            .field("auto_dismiss", &self.auto_dismiss)
            .field("animation", &self.animation)
            .field("appear_action", &self.appear_action.is_some())
            .field("disappear_action", &self.disappear_action.is_some())
            .finish()
    }
}
