// SPDX-License-Identifier: MPL-2.0
//! Per-container view lifecycle management.
//!
//! The `ContainerQueue` consumes [`ContainerEvent`]s for one container and
//! decides which views are visible, which wait, and when dismissed views are
//! finally removed. It is tick-driven: the host passes the current instant to
//! every call and polls [`ContainerQueue::tick`], using
//! [`ContainerQueue::next_deadline`] to know when the next timer is due.
//!
//! A view moves through `visible` → `dismissing` → removed. While dismissing
//! it is still rendered so its exit transition can play; once the cleanup
//! delay has elapsed its disappear action runs and its binding is reset.

use std::collections::VecDeque;
use std::time::Instant;

use super::event::ContainerEvent;
use super::scheduler::DismissScheduler;
use super::subscription::ContainerSubscription;
use super::view::IdentifiableContainerView;
use crate::config::Config;
use crate::configuration::{
    CompositeConfiguration, ContainerBackgroundStyle, ContainerConfiguration, QueueType,
};
use crate::diagnostics::{DiagnosticsHandle, LogType, DETAIL_COARSE, DETAIL_TRACE};
use crate::domain::container::{CleanupDelay, ViewId};

/// A view currently on screen, with its resolved configuration.
#[derive(Debug, Clone)]
pub struct PresentedEntry {
    view: IdentifiableContainerView,
    configuration: CompositeConfiguration,
    shown_at: Instant,
}

impl PresentedEntry {
    #[must_use]
    pub fn id(&self) -> ViewId {
        self.view.id()
    }

    #[must_use]
    pub fn view(&self) -> &IdentifiableContainerView {
        &self.view
    }

    /// Settings resolved against the container's configuration.
    #[must_use]
    pub fn configuration(&self) -> &CompositeConfiguration {
        &self.configuration
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }
}

/// Manages the visible views, the waiting queue and pending timers of one container.
#[derive(Debug, Default)]
pub struct ContainerQueue {
    configuration: ContainerConfiguration,
    /// Visible views in presentation order (last is topmost).
    visible: Vec<PresentedEntry>,
    /// Views waiting for the current one to finish (`OneByOneWaitFinish`).
    waiting: VecDeque<IdentifiableContainerView>,
    /// Dismissed views whose exit transition is still running.
    dismissing: Vec<PresentedEntry>,
    auto_dismiss: DismissScheduler,
    cleanup: DismissScheduler,
    cleanup_delay: CleanupDelay,
    diagnostics: Option<DiagnosticsHandle>,
}

impl ContainerQueue {
    /// Creates an empty queue for a container.
    #[must_use]
    pub fn new(configuration: ContainerConfiguration) -> Self {
        Self {
            configuration,
            ..Self::default()
        }
    }

    /// Creates an empty queue using the persisted cleanup delay.
    #[must_use]
    pub fn from_config(configuration: ContainerConfiguration, config: &Config) -> Self {
        Self::new(configuration).with_cleanup_delay(config.cleanup_delay())
    }

    /// Sets how long dismissed views stay around for their exit transition.
    #[must_use]
    pub fn with_cleanup_delay(mut self, delay: CleanupDelay) -> Self {
        self.cleanup_delay = delay;
        self
    }

    /// Sets the diagnostics handle for tracing queue decisions.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn configuration(&self) -> &ContainerConfiguration {
        &self.configuration
    }

    // ==========================================================================
    // Event handling
    // ==========================================================================

    /// Applies one event from the container channel.
    pub fn handle_event(&mut self, event: ContainerEvent, now: Instant) {
        match event {
            ContainerEvent::Show(view) => self.show(view, now),
            ContainerEvent::Dismiss { id, animated } => {
                self.dismiss(id, animated, now);
            }
            ContainerEvent::DismissTopmost { animated } => {
                self.dismiss_topmost(animated, now);
            }
            ContainerEvent::DismissAll { animated } => self.dismiss_all(animated, now),
        }
    }

    /// Drains every event currently buffered in `subscription`.
    ///
    /// Returns `false` once the subscription has ended because the container
    /// was removed or replaced.
    pub fn pump(&mut self, subscription: &mut ContainerSubscription, now: Instant) -> bool {
        while let Some(event) = subscription.try_next() {
            self.handle_event(event, now);
        }
        !subscription.is_terminated()
    }

    /// Admits a new view according to the queue type.
    pub fn show(&mut self, view: IdentifiableContainerView, now: Instant) {
        match self.configuration.queue_type {
            QueueType::Multiple => {
                self.present(view, now);
                while self.visible.len() > self.configuration.max_visible.value() {
                    let oldest = self.visible[0].id();
                    self.trace(&format!("evicting {oldest}, visible limit reached"));
                    self.dismiss(oldest, true, now);
                }
            }
            QueueType::OneByOne => {
                let current: Vec<ViewId> = self.visible.iter().map(PresentedEntry::id).collect();
                for id in current {
                    self.dismiss(id, true, now);
                }
                self.present(view, now);
            }
            QueueType::OneByOneWaitFinish => {
                if self.visible.is_empty() {
                    self.present(view, now);
                } else {
                    self.trace(&format!("{} waits for the current view", view.id()));
                    self.waiting.push_back(view);
                }
            }
        }
    }

    /// Dismisses a view by identity.
    ///
    /// Visible views start their exit transition. Waiting views are dropped
    /// without running any action. Returns `false` for unknown identities and
    /// for views that are already being dismissed.
    pub fn dismiss(&mut self, id: ViewId, animated: bool, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|entry| entry.id() == id) {
            let entry = self.visible.remove(pos);
            self.auto_dismiss.cancel(id);
            let at = if animated {
                now.checked_add(self.cleanup_delay.as_duration())
                    .unwrap_or(now)
            } else {
                now
            };
            self.cleanup.schedule(id, at);
            self.dismissing.push(entry);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(pos) = self.waiting.iter().position(|view| view.id() == id) {
            if let Some(view) = self.waiting.remove(pos) {
                view.reset_binding();
            }
            return true;
        }

        false
    }

    /// Dismisses the topmost visible view.
    pub fn dismiss_topmost(&mut self, animated: bool, now: Instant) -> bool {
        match self.visible.last().map(PresentedEntry::id) {
            Some(id) => self.dismiss(id, animated, now),
            None => false,
        }
    }

    /// Dismisses every visible view and drops every waiting one.
    pub fn dismiss_all(&mut self, animated: bool, now: Instant) {
        for view in self.waiting.drain(..) {
            view.reset_binding();
        }
        let ids: Vec<ViewId> = self.visible.iter().map(PresentedEntry::id).collect();
        for id in ids {
            self.dismiss(id, animated, now);
        }
    }

    /// Fires due auto-dismiss timers, then finishes due cleanups.
    pub fn tick(&mut self, now: Instant) {
        for id in self.auto_dismiss.take_due(now) {
            self.trace(&format!("auto dismissing {id}"));
            self.dismiss(id, true, now);
        }
        for id in self.cleanup.take_due(now) {
            self.finish_removal(id);
        }
    }

    /// Drops all views and timers without running any action.
    ///
    /// Bindings are still reset so host state stays consistent.
    pub fn clear(&mut self) {
        for entry in self.visible.drain(..).chain(self.dismissing.drain(..)) {
            entry.view.reset_binding();
        }
        for view in self.waiting.drain(..) {
            view.reset_binding();
        }
        self.auto_dismiss.clear();
        self.cleanup.clear();
    }

    // ==========================================================================
    // Queries
    // ==========================================================================

    /// Visible views in presentation order (last is topmost).
    pub fn visible(&self) -> impl Iterator<Item = &PresentedEntry> {
        self.visible.iter()
    }

    /// Views still playing their exit transition.
    pub fn dismissing(&self) -> impl Iterator<Item = &PresentedEntry> {
        self.dismissing.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    #[must_use]
    pub fn dismissing_count(&self) -> usize {
        self.dismissing.len()
    }

    #[must_use]
    pub fn is_visible(&self, id: ViewId) -> bool {
        self.visible.iter().any(|entry| entry.id() == id)
    }

    /// Returns true when nothing is visible, waiting or animating out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.waiting.is_empty() && self.dismissing.is_empty()
    }

    /// Earliest pending auto-dismiss or cleanup deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (
            self.auto_dismiss.next_deadline(),
            self.cleanup.next_deadline(),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Background to draw behind the container's views.
    ///
    /// Horizontal and vertical layouts share the container background;
    /// stacking layouts use the topmost view's resolved background.
    #[must_use]
    pub fn background(&self) -> ContainerBackgroundStyle {
        if let Some(shared) = self.configuration.shared_background() {
            return shared;
        }
        self.visible
            .last()
            .map(|entry| entry.configuration.background_style.clone())
            .unwrap_or(ContainerBackgroundStyle::Disabled)
    }

    // ==========================================================================
    // Internals
    // ==========================================================================

    fn present(&mut self, view: IdentifiableContainerView, now: Instant) {
        let configuration = CompositeConfiguration::new(&self.configuration, view.configuration());
        if let Some(after) = configuration.auto_dismiss {
            match now.checked_add(after) {
                Some(at) => self.auto_dismiss.schedule(view.id(), at),
                None => self.warn(&format!(
                    "auto dismiss of {} after {after:?} is out of range, the view stays until dismissed",
                    view.id()
                )),
            }
        }
        view.configuration().run_appear();
        self.visible.push(PresentedEntry {
            view,
            configuration,
            shown_at: now,
        });
    }

    /// Shows the next waiting view once the visible slot is free.
    fn promote_from_queue(&mut self, now: Instant) {
        if self.configuration.queue_type != QueueType::OneByOneWaitFinish
            || !self.visible.is_empty()
        {
            return;
        }
        if let Some(next) = self.waiting.pop_front() {
            self.present(next, now);
        }
    }

    fn finish_removal(&mut self, id: ViewId) {
        if let Some(pos) = self.dismissing.iter().position(|entry| entry.id() == id) {
            let entry = self.dismissing.remove(pos);
            entry.view.configuration().run_disappear();
            entry.view.reset_binding();
        }
    }

    fn trace(&self, message: &str) {
        if let Some(handle) = &self.diagnostics {
            handle.send_message(LogType::Info, message, DETAIL_TRACE);
        }
    }

    fn warn(&self, message: &str) {
        if let Some(handle) = &self.diagnostics {
            handle.send_message(LogType::Warning, message, DETAIL_COARSE);
        }
    }
}
