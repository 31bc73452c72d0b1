// SPDX-License-Identifier: MPL-2.0
//! Image fetching and decoding for gallery sources.
//!
//! A source is either a local path (optionally written as a `file://` URI) or
//! an `http(s)://` URL. Bytes are fetched asynchronously, then decoded off the
//! UI thread into RGBA pixels wrapped in an Iced image handle.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::PathBuf;
use std::sync::OnceLock;

const USER_AGENT: &str = concat!("gallery_lens/", env!("CARGO_PKG_VERSION"));

static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Length of the decoded RGBA buffer owned by `handle`.
    size_bytes: usize,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let size_bytes = pixels.len();
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
            size_bytes,
        }
    }

    /// Size of the decoded pixels in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }
}

/// Where the bytes of a source live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Remote(String),
    Local(PathBuf),
}

impl SourceLocation {
    /// Classifies a source string. Anything that is not an `http(s)` URL is
    /// treated as a filesystem path.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let lower = source.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SourceLocation::Remote(source.to_string())
        } else if let Some(path) = source.strip_prefix("file://") {
            SourceLocation::Local(PathBuf::from(path))
        } else {
            SourceLocation::Local(PathBuf::from(source))
        }
    }
}

/// Shared HTTP client for image downloads and content store requests.
pub fn http_client() -> &'static reqwest::Client {
    HTTP_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default()
    })
}

/// Fetches the raw bytes of a source.
///
/// # Errors
///
/// Returns [`Error::Io`] when a local file cannot be read, [`Error::Network`]
/// when a download fails, or [`Error::Source`] for non-success HTTP statuses.
pub async fn fetch_bytes(source: &str) -> Result<Vec<u8>> {
    match SourceLocation::parse(source) {
        SourceLocation::Remote(url) => {
            let response = http_client().get(&url).send().await?.error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        }
        SourceLocation::Local(path) => Ok(tokio::fs::read(&path).await?),
    }
}

/// Decodes encoded image bytes (PNG, JPEG, WebP, ...) into RGBA.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the format is unknown or the data is corrupt.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has zero dimensions".to_string()));
    }
    Ok(ImageData::from_rgba(width, height, decoded.to_rgba8().into_raw()))
}

/// Decodes image bytes and downscales them to fit within `max_side` pixels on
/// the longer edge, preserving aspect ratio. Smaller images are kept as is.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the data cannot be decoded.
pub fn decode_thumbnail(bytes: &[u8], max_side: u32) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has zero dimensions".to_string()));
    }
    let scaled = if width > max_side || height > max_side {
        decoded.thumbnail(max_side, max_side)
    } else {
        decoded
    };
    let (width, height) = scaled.dimensions();
    Ok(ImageData::from_rgba(width, height, scaled.to_rgba8().into_raw()))
}

/// Fetches `source` and decodes a downscaled copy for tiles and thumbnails.
///
/// # Errors
///
/// Propagates fetch and decode errors.
pub async fn load_thumbnail(source: String, max_side: u32) -> Result<ImageData> {
    let bytes = fetch_bytes(&source).await?;
    tokio::task::spawn_blocking(move || decode_thumbnail(&bytes, max_side))
        .await
        .map_err(|e| Error::Io(format!("thumbnail task failed: {e}")))?
}

/// Fetches and decodes the image behind `source`.
///
/// Decoding runs on the blocking pool so large images never stall the
/// executor driving the UI tasks.
///
/// # Errors
///
/// Propagates fetch and decode errors; see [`fetch_bytes`] and [`decode`].
pub async fn load_image(source: String) -> Result<ImageData> {
    let bytes = fetch_bytes(&source).await?;
    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| Error::Io(format!("decode task failed: {e}")))?
}
