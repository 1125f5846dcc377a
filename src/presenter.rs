// SPDX-License-Identifier: MPL-2.0
//! Single-slot overlay without a named container.
//!
//! `OverlayPresenter` holds at most one piece of content. Closing it hides
//! the overlay at once but keeps the content until the cleanup delay has
//! elapsed, so the exit transition still has something to draw.

use std::fmt;
use std::time::Instant;

use crate::config::Config;
use crate::domain::container::CleanupDelay;

type DismissCallback = Box<dyn FnOnce() + Send>;

/// Effects produced by presenter state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Presentation state changed.
    VisibilityChanged(bool),
    /// Content was dropped after the exit transition.
    Cleared,
}

/// One overlay slot with deferred content clearing.
pub struct OverlayPresenter<C> {
    content: Option<C>,
    on_dismiss: Option<DismissCallback>,
    presented: bool,
    clear_at: Option<Instant>,
    cleanup_delay: CleanupDelay,
}

impl<C> OverlayPresenter<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_cleanup_delay(CleanupDelay::default())
    }

    /// Creates an empty presenter using the persisted cleanup delay.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_cleanup_delay(config.cleanup_delay())
    }

    #[must_use]
    pub fn with_cleanup_delay(cleanup_delay: CleanupDelay) -> Self {
        Self {
            content: None,
            on_dismiss: None,
            presented: false,
            clear_at: None,
            cleanup_delay,
        }
    }

    /// Presents `content`, replacing whatever was shown before.
    ///
    /// A clear still pending from an earlier close is cancelled. The previous
    /// dismiss callback is dropped without being called.
    pub fn show_overlay(
        &mut self,
        content: C,
        on_dismiss: impl FnOnce() + Send + 'static,
    ) -> Effect {
        self.content = Some(content);
        self.on_dismiss = Some(Box::new(on_dismiss));
        self.clear_at = None;
        if self.presented {
            Effect::None
        } else {
            self.presented = true;
            Effect::VisibilityChanged(true)
        }
    }

    /// Hides the overlay and schedules the content clear.
    ///
    /// Closing an overlay that is not presented does nothing.
    pub fn close_overlay(&mut self, now: Instant) -> Effect {
        if !self.presented {
            return Effect::None;
        }
        self.presented = false;
        if let Some(callback) = self.on_dismiss.take() {
            callback();
        }
        self.clear_at = Some(
            now.checked_add(self.cleanup_delay.as_duration())
                .unwrap_or(now),
        );
        Effect::VisibilityChanged(false)
    }

    /// Drops the content once the clear deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Effect {
        match self.clear_at {
            Some(at) if at <= now => {
                self.clear_at = None;
                self.content = None;
                self.on_dismiss = None;
                Effect::Cleared
            }
            _ => Effect::None,
        }
    }

    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// Content to draw, including while the overlay animates out.
    #[must_use]
    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn cleanup_delay(&self) -> CleanupDelay {
        self.cleanup_delay
    }

    pub fn set_cleanup_delay(&mut self, delay: CleanupDelay) {
        self.cleanup_delay = delay;
    }

    /// Pending clear deadline, if the overlay was closed recently.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.clear_at
    }
}

impl<C> Default for OverlayPresenter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: fmt::Debug> fmt::Debug for OverlayPresenter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayPresenter")
            .field("content", &self.content)
            .field("presented", &self.presented)
            .field("clear_at", &self.clear_at)
            .field("cleanup_delay", &self.cleanup_delay)
            .finish_non_exhaustive()
    }
}
