// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for every configurable setting.

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Delay between closing the viewer and resetting its index (milliseconds).
pub const DEFAULT_CLOSE_RESET_DELAY_MS: u64 = 300;

/// Minimum close reset delay.
pub const MIN_CLOSE_RESET_DELAY_MS: u64 = 0;

/// Maximum close reset delay.
pub const MAX_CLOSE_RESET_DELAY_MS: u64 = 2000;

/// Horizontal swipe distance that triggers navigation (logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 200.0;

/// Default number of decoded images kept in the asset cache.
pub const DEFAULT_CACHE_MAX_IMAGES: usize = crate::media::cache::DEFAULT_MAX_IMAGES;

/// Minimum asset cache size.
pub const MIN_CACHE_MAX_IMAGES: usize = crate::media::cache::MIN_MAX_IMAGES;

/// Maximum asset cache size.
pub const MAX_CACHE_MAX_IMAGES: usize = crate::media::cache::MAX_MAX_IMAGES;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Default number of tile columns on the gallery page.
pub const DEFAULT_PAGE_COLUMNS: usize = 3;

/// Minimum tile columns.
pub const MIN_PAGE_COLUMNS: usize = 1;

/// Maximum tile columns.
pub const MAX_PAGE_COLUMNS: usize = 6;

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Default content store table.
pub const DEFAULT_SOURCE_TABLE: &str = crate::source::DEFAULT_TABLE;
