// SPDX-License-Identifier: MPL-2.0
//! Image descriptors and the normalizer that turns every accepted `images`
//! input shape into one canonical [`ImageSequence`].

use serde::{Deserialize, Serialize};

/// Label used when an image carries no alt text of its own.
pub const DEFAULT_ALT_TEXT: &str = "Gallery image";

/// One displayable image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// URI or path of the image asset. Passed through without validation.
    #[serde(alias = "src")]
    pub source: String,

    /// Accessible description of the image.
    #[serde(default, alias = "alt", skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,

    /// Text shown under the image when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageDescriptor {
    /// Creates a descriptor with no alt text and no caption.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: None,
            caption: None,
        }
    }

    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Returns the alt text, or `None` when the generic label should be used.
    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Returns the caption when it has visible content.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Every shape accepted for the viewer's `images` input.
///
/// Deserializes untagged, so a manifest may hold a single string, an array of
/// strings, or an array of descriptor tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ImagesInput {
    Single(String),
    Uris(Vec<String>),
    Descriptors(Vec<ImageDescriptor>),
}

impl ImagesInput {
    /// Converts the input into its canonical form.
    #[must_use]
    pub fn normalize(self) -> ImageSequence {
        let images = match self {
            ImagesInput::Single(uri) => vec![ImageDescriptor::new(uri)],
            ImagesInput::Uris(uris) => uris.into_iter().map(ImageDescriptor::new).collect(),
            ImagesInput::Descriptors(descriptors) => descriptors,
        };
        ImageSequence { images }
    }
}

impl From<&str> for ImagesInput {
    fn from(uri: &str) -> Self {
        ImagesInput::Single(uri.to_string())
    }
}

impl From<String> for ImagesInput {
    fn from(uri: String) -> Self {
        ImagesInput::Single(uri)
    }
}

impl From<Vec<String>> for ImagesInput {
    fn from(uris: Vec<String>) -> Self {
        ImagesInput::Uris(uris)
    }
}

impl From<Vec<ImageDescriptor>> for ImagesInput {
    fn from(descriptors: Vec<ImageDescriptor>) -> Self {
        ImagesInput::Descriptors(descriptors)
    }
}

/// Finite ordered sequence of images shown by the viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSequence {
    images: Vec<ImageDescriptor>,
}

impl ImageSequence {
    #[must_use]
    pub fn new(images: Vec<ImageDescriptor>) -> Self {
        Self { images }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether navigation controls make sense for this sequence.
    #[must_use]
    pub fn has_multiple(&self) -> bool {
        self.images.len() > 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.images.iter()
    }

    /// Returns the sources of the images immediately before and after `index`,
    /// wrapping at both ends. Duplicates and `index` itself are skipped, so a
    /// two-image sequence yields a single neighbor.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> Vec<&str> {
        let len = self.images.len();
        if len < 2 || index >= len {
            return Vec::new();
        }

        let previous = (index + len - 1) % len;
        let next = (index + 1) % len;

        let mut sources = vec![self.images[previous].source.as_str()];
        if next != previous {
            sources.push(self.images[next].source.as_str());
        }
        sources
    }
}

impl From<ImagesInput> for ImageSequence {
    fn from(input: ImagesInput) -> Self {
        input.normalize()
    }
}
