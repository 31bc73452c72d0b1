// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, handles its own `Message`, and reports what the host needs
//! to know through an `Effect`.
//!
//! - [`gallery_page`] - grid of gallery tiles
//! - [`viewer`] - modal image viewer
//! - [`widgets`] - custom Iced widgets (spinner)
//! - [`styles`] - centralized button and container styles
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery_page;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
