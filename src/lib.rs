// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is a community photo gallery built with the Iced GUI
//! framework.
//!
//! It shows a grid of gallery images fetched from a local manifest or a
//! read-only REST endpoint, and opens them in a modal viewer with keyboard,
//! touch and thumbnail navigation, neighbor preloading and fullscreen.

#![doc(html_root_url = "https://docs.rs/gallery_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod source;
pub mod ui;
