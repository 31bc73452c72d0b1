// SPDX-License-Identifier: MPL-2.0
//! Image loading and caching.
//!
//! - [`image`] - fetch a source (local file or HTTP) and decode it
//! - [`cache`] - LRU cache of decoded images with in-flight tracking

pub mod cache;
pub mod image;

pub use cache::{AssetCache, CacheConfig, CacheStats};
pub use image::{load_image, load_thumbnail, ImageData, SourceLocation};
