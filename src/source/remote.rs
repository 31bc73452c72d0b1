// SPDX-License-Identifier: MPL-2.0
//! Read-only client for a PostgREST-style content store.
//!
//! Only the public (anonymous) key is sent. Records are requested already
//! filtered and ordered, and the selection rules are applied again locally so
//! a permissive endpoint cannot leak inactive rows into the page.

use crate::error::{Result, SourceError};
use crate::gallery::GalleryRecord;
use crate::media::image::http_client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

/// Query appended to the table endpoint.
const RECORDS_QUERY: &str = "select=*&is_active=eq.true&order=display_order.asc,uploaded_at.desc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSource {
    pub base_url: String,
    pub api_key: Option<String>,
    pub table: String,
}

impl RemoteSource {
    /// Full URL of the records request.
    #[must_use]
    pub fn records_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?{}",
            self.base_url.trim_end_matches('/'),
            self.table,
            RECORDS_QUERY
        )
    }

    /// Builds the `apikey` and bearer headers. Keys that are not valid header
    /// values are skipped, which the endpoint then reports as unauthorized.
    #[must_use]
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) else {
            return headers;
        };
        match (
            HeaderValue::from_str(key),
            HeaderValue::from_str(&format!("Bearer {key}")),
        ) {
            (Ok(apikey), Ok(bearer)) => {
                headers.insert("apikey", apikey);
                headers.insert(AUTHORIZATION, bearer);
            }
            _ => tracing::warn!("API key contains characters not allowed in headers"),
        }
        headers
    }

    /// Fetches the record list.
    ///
    /// # Errors
    ///
    /// Returns a network error when the request fails, an HTTP status error for
    /// non-success responses, or a malformed-source error for bad JSON.
    pub async fn fetch(&self) -> Result<Vec<GalleryRecord>> {
        let url = self.records_url();
        tracing::debug!(%url, "fetching gallery records");

        let response = http_client()
            .get(&url)
            .headers(self.headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus(status.as_u16()).into());
        }

        let body = response.text().await?;
        parse_records(&body)
    }
}

/// Parses a JSON array of records.
///
/// # Errors
///
/// Returns [`SourceError::Malformed`] when the body is not a record array.
pub fn parse_records(body: &str) -> Result<Vec<GalleryRecord>> {
    Ok(serde_json::from_str(body)?)
}
