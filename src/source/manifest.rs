// SPDX-License-Identifier: MPL-2.0
//! Local TOML manifest listing gallery records.
//!
//! ```toml
//! [[images]]
//! id = "picnic"
//! image_url = "photos/picnic.jpg"
//! caption = "Summer picnic"
//! display_order = 1
//! ```
//!
//! Relative local `image_url`s are resolved against the manifest's directory.

use crate::error::{Result, SourceError};
use crate::gallery::GalleryRecord;
use crate::media::SourceLocation;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    images: Vec<GalleryRecord>,
}

/// Parses manifest text. `base_dir` anchors relative local image paths.
///
/// # Errors
///
/// Returns [`SourceError::Malformed`] when the text is not a valid manifest.
pub fn parse(contents: &str, base_dir: Option<&Path>) -> Result<Vec<GalleryRecord>> {
    let manifest: Manifest =
        toml::from_str(contents).map_err(|e| SourceError::Malformed(e.to_string()))?;

    let mut records = manifest.images;
    if let Some(base) = base_dir {
        for record in &mut records {
            if let SourceLocation::Local(path) = SourceLocation::parse(&record.image_url) {
                if path.is_relative() {
                    record.image_url = base.join(path).to_string_lossy().into_owned();
                }
            }
        }
    }
    Ok(records)
}

/// Reads and parses the manifest at `path`.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] when the file cannot be read, or a
/// malformed-source error when it cannot be parsed.
pub async fn load(path: &Path) -> Result<Vec<GalleryRecord>> {
    let contents = tokio::fs::read_to_string(path).await?;
    parse(&contents, path.parent())
}
