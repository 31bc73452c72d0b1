// SPDX-License-Identifier: MPL-2.0
//! Gallery records as stored by the content store, and the selection rules
//! the gallery page applies before handing them to the viewer.

use super::descriptor::{ImageDescriptor, ImagesInput};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Alt text used for gallery records without a caption.
pub const RECORD_FALLBACK_ALT: &str = "Memory";

/// One row of the `gallery_images` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryRecord {
    pub id: String,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl GalleryRecord {
    fn uploaded_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        self.uploaded_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    }

    /// Converts the record into the descriptor shown by the viewer.
    #[must_use]
    pub fn to_descriptor(&self) -> ImageDescriptor {
        let caption = self
            .caption
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        ImageDescriptor {
            source: self.image_url.clone(),
            alt_text: Some(caption.unwrap_or(RECORD_FALLBACK_ALT).to_string()),
            caption: caption.map(str::to_string),
        }
    }
}

/// Keeps active records only, ordered by `display_order` ascending and then by
/// upload time, newest first. Records with a missing or unparsable upload time
/// sort before dated ones within the same display order, matching a
/// descending `uploaded_at` order on the remote endpoint.
#[must_use]
pub fn select_active(records: Vec<GalleryRecord>) -> Vec<GalleryRecord> {
    let mut active: Vec<GalleryRecord> = records.into_iter().filter(|r| r.is_active).collect();
    active.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| compare_upload_desc(a, b))
    });
    active
}

fn compare_upload_desc(a: &GalleryRecord, b: &GalleryRecord) -> Ordering {
    match (a.uploaded_at_parsed(), b.uploaded_at_parsed()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Builds the viewer input for an already-selected record list.
#[must_use]
pub fn to_images_input(records: &[GalleryRecord]) -> ImagesInput {
    ImagesInput::Descriptors(records.iter().map(GalleryRecord::to_descriptor).collect())
}
