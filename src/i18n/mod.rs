// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! The locale is taken from the CLI, then the config file, then the OS, and
//! falls back to `en-US`. Missing keys in a translation fall back to English.

pub mod fluent;

pub use fluent::I18n;
