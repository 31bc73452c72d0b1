// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Network(String),
    Decode(String),
    Source(SourceError),
}

/// Failures specific to fetching gallery records from a content store.
/// Used to provide user-friendly, localized error messages on the gallery page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// No manifest path or remote endpoint is configured.
    NotConfigured,

    /// The remote endpoint answered with a non-success HTTP status.
    HttpStatus(u16),

    /// The manifest or response body could not be parsed.
    Malformed(String),
}

impl SourceError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SourceError::NotConfigured => "error-source-not-configured",
            SourceError::HttpStatus(_) => "error-source-http",
            SourceError::Malformed(_) => "error-source-malformed",
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NotConfigured => write!(f, "No gallery source configured"),
            SourceError::HttpStatus(code) => write!(f, "Gallery source returned HTTP {}", code),
            SourceError::Malformed(msg) => write!(f, "Malformed gallery data: {}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n message key used when this error reaches the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Network(_) => "error-network",
            Error::Decode(_) => "error-decode",
            Error::Source(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Source(e) => write!(f, "Source Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Error::Source(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Source(SourceError::HttpStatus(status.as_u16())),
            None => Error::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Source(SourceError::Malformed(err.to_string()))
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
