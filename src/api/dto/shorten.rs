//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to shorten a single URL.
///
/// `url` is optional at the deserialization level so a missing field
/// reaches the validation path and gets the structured 400, instead of
/// the extractor's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

/// The created (or deduplicated) short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

impl ShortenResponse {
    /// Builds the response, presenting the full short URL under the
    /// service's public base.
    pub fn from_link(link: &Link, base_url: &str) -> Self {
        Self {
            short_code: link.short_code.clone(),
            short_url: format!("{base_url}/u/{}", link.short_code),
            original_url: link.original_url.clone(),
        }
    }
}
