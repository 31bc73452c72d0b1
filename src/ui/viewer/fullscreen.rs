// SPDX-License-Identifier: MPL-2.0
//! Fullscreen flag kept in step with the window's real mode.
//!
//! Toggling flips the flag immediately and remembers the request. The window
//! then reports its actual mode, which always wins; a report that contradicts
//! the outstanding request means the platform refused it.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullscreenState {
    is_fullscreen: bool,
    pending: Option<bool>,
}

impl FullscreenState {
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Flips the flag and returns the mode to request from the window.
    pub fn toggle(&mut self) -> bool {
        let target = !self.is_fullscreen;
        self.is_fullscreen = target;
        self.pending = Some(target);
        target
    }

    /// Requests a specific mode. Returns `None` when already in it.
    pub fn request(&mut self, target: bool) -> Option<bool> {
        if self.is_fullscreen == target && self.pending.is_none() {
            return None;
        }
        self.is_fullscreen = target;
        self.pending = Some(target);
        Some(target)
    }

    /// Applies the window's reported mode.
    pub fn reconcile(&mut self, actual: bool) {
        if let Some(requested) = self.pending.take() {
            if requested != actual {
                tracing::warn!(requested, actual, "window did not apply fullscreen request");
            }
        }
        self.is_fullscreen = actual;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_sets_flag_optimistically() {
        let mut state = FullscreenState::default();
        assert!(state.toggle());
        assert!(state.is_fullscreen());
        assert!(!state.toggle());
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn external_exit_clears_flag() {
        let mut state = FullscreenState::default();
        state.toggle();
        state.reconcile(true);
        assert!(state.is_fullscreen());

        // Left fullscreen through the OS, not the widget.
        state.reconcile(false);
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn refused_request_is_corrected() {
        let mut state = FullscreenState::default();
        state.toggle();
        state.reconcile(false);
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn request_skips_no_op() {
        let mut state = FullscreenState::default();
        assert_eq!(state.request(false), None);
        assert_eq!(state.request(true), Some(true));
        state.reconcile(true);
        assert_eq!(state.request(true), None);
    }
}
