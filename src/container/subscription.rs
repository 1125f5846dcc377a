// SPDX-License-Identifier: MPL-2.0
//! Consumer side of a container channel.

use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::broadcast::Receiver;

use super::event::ContainerEvent;
use crate::diagnostics::{DiagnosticsHandle, LogType, DETAIL_COARSE};
use crate::domain::container::ContainerName;

/// Stream of events for one container.
///
/// Events arrive in publish order. Once the container is removed or
/// replaced, the remaining buffered events are still delivered and then the
/// stream ends: [`try_next`](Self::try_next) and [`next`](Self::next)
/// return `None` and [`is_terminated`](Self::is_terminated) reports `true`.
#[derive(Debug)]
pub struct ContainerSubscription {
    name: ContainerName,
    receiver: Receiver<ContainerEvent>,
    diagnostics: DiagnosticsHandle,
    terminated: bool,
}

impl ContainerSubscription {
    pub(crate) fn new(
        name: ContainerName,
        receiver: Receiver<ContainerEvent>,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        Self {
            name,
            receiver,
            diagnostics,
            terminated: false,
        }
    }

    /// Name of the container this subscription listens to.
    #[must_use]
    pub fn name(&self) -> &ContainerName {
        &self.name
    }

    /// Returns the next buffered event without waiting.
    pub fn try_next(&mut self) -> Option<ContainerEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Closed) => {
                    self.terminated = true;
                    return None;
                }
                Err(TryRecvError::Lagged(skipped)) => self.report_lag(skipped),
            }
        }
    }

    /// Waits for the next event. Returns `None` once the container is gone.
    pub async fn next(&mut self) -> Option<ContainerEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Closed) => {
                    self.terminated = true;
                    return None;
                }
                Err(RecvError::Lagged(skipped)) => self.report_lag(skipped),
            }
        }
    }

    /// Returns true once the end of the stream has been observed.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    fn report_lag(&self, skipped: u64) {
        self.diagnostics.send_message(
            LogType::Warning,
            &format!(
                "Subscriber of container `{}` fell behind, {skipped} events were skipped",
                self.name
            ),
            DETAIL_COARSE,
        );
    }
}
