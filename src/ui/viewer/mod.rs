// SPDX-License-Identifier: MPL-2.0
//! Modal gallery viewer.
//!
//! - [`component`] - state, messages and update logic
//! - [`view`] - layout of the open viewer
//! - [`navigation`] - wraparound index arithmetic
//! - [`swipe`] - touch gesture detection
//! - [`fullscreen`] - fullscreen flag reconciliation
//! - [`reset`] - cancellable reset after close

pub mod component;
pub mod fullscreen;
pub mod navigation;
pub mod reset;
pub mod swipe;
pub mod view;

pub use component::{Effect, Message, State, ViewerOptions, ViewerSettings};
