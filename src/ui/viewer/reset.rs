// SPDX-License-Identifier: MPL-2.0
//! Deferred state reset after the viewer closes.
//!
//! The reset is an owned, cancellable timer. Each schedule bumps a generation
//! number carried by the timer's completion message; cancelling aborts the
//! timer and bumps the generation again, so a completion that slips through
//! an abort is recognized as stale and ignored.

use iced::task::Handle;
use iced::Task;
use std::time::Duration;

#[derive(Default)]
pub struct PendingReset {
    generation: u64,
    handle: Option<Handle>,
}

impl std::fmt::Debug for PendingReset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingReset")
            .field("generation", &self.generation)
            .field("pending", &self.handle.is_some())
            .finish()
    }
}

impl PendingReset {
    /// Starts the reset timer, replacing any pending one. The returned task
    /// yields the generation to pass back to [`PendingReset::complete`].
    pub fn schedule(&mut self, delay: Duration) -> Task<u64> {
        self.cancel();
        let generation = self.generation;
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| generation,
        )
        .abortable();
        self.handle = Some(handle);
        task
    }

    /// Aborts a pending reset, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Whether a reset is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    /// Current generation; completions carrying any other value are stale.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Consumes a timer completion. Returns `true` when the reset should be
    /// applied.
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.handle.is_none() || generation != self.generation {
            return false;
        }
        self.handle = None;
        true
    }
}
