// SPDX-License-Identifier: MPL-2.0
//! Content stores that yield gallery records.
//!
//! - [`manifest`] - local TOML manifest
//! - [`remote`] - read-only REST endpoint

pub mod manifest;
pub mod remote;

pub use remote::RemoteSource;

use crate::error::{Result, SourceError};
use crate::gallery::{select_active, GalleryRecord};
use std::path::PathBuf;

/// Default table holding gallery records.
pub const DEFAULT_TABLE: &str = "gallery_images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Manifest(PathBuf),
    Remote(RemoteSource),
}

/// Source settings merged from CLI flags, environment and config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSettings {
    pub manifest: Option<PathBuf>,
    pub remote_url: Option<String>,
    pub api_key: Option<String>,
    pub table: Option<String>,
}

impl ContentSource {
    /// Picks the content source described by `settings`. A manifest takes
    /// precedence over a remote endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotConfigured`] when neither is set.
    pub fn from_settings(settings: &SourceSettings) -> Result<Self> {
        if let Some(path) = &settings.manifest {
            return Ok(ContentSource::Manifest(path.clone()));
        }

        let base_url = settings
            .remote_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SourceError::NotConfigured)?;

        Ok(ContentSource::Remote(RemoteSource {
            base_url: base_url.to_string(),
            api_key: settings.api_key.clone(),
            table: settings
                .table
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE.to_string()),
        }))
    }

    /// Short description for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            ContentSource::Manifest(path) => format!("manifest {}", path.display()),
            ContentSource::Remote(remote) => format!("remote {}", remote.base_url),
        }
    }
}

/// Fetches the records to display, filtered to active ones and ordered.
///
/// # Errors
///
/// Propagates manifest and remote failures.
pub async fn fetch_records(source: ContentSource) -> Result<Vec<GalleryRecord>> {
    let records = match &source {
        ContentSource::Manifest(path) => manifest::load(path).await?,
        ContentSource::Remote(remote) => remote.fetch().await?,
    };
    tracing::info!(count = records.len(), source = %source.describe(), "gallery records fetched");
    Ok(select_active(records))
}
