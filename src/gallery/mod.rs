// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! - [`descriptor`] - image descriptors and the `images` input normalizer
//! - [`record`] - content store rows and the page's selection rules

pub mod descriptor;
pub mod record;

pub use descriptor::{ImageDescriptor, ImageSequence, ImagesInput, DEFAULT_ALT_TEXT};
pub use record::{select_active, GalleryRecord};
