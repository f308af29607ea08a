//! URL normalization and validation.
//!
//! Scheme-less inputs are promoted to `https://` before validation, so a
//! bare `example.com` is accepted. Validation happens on the normalized
//! string.

use url::Url;

/// Errors produced when a submitted URL cannot be accepted.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Prefixes `https://` unless the input already carries an HTTP(S) scheme.
///
/// Pure string transform; no parsing, no network access.
pub fn normalize(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Returns true if `candidate` parses as an absolute HTTP(S) URL with a host.
///
/// Never panics; any parse failure yields `false`.
pub fn is_valid(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

/// Normalizes and validates a raw submission in one step.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for empty or whitespace-only input
/// - [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// - [`UrlValidationError::InvalidFormat`] when the normalized string does
///   not parse as an absolute URL
pub fn normalize_and_validate(raw: &str) -> Result<String, UrlValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let normalized = normalize(trimmed);

    match Url::parse(&normalized) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            Err(UrlValidationError::UnsupportedProtocol)
        }
        Ok(url) if !url.has_host() => Err(UrlValidationError::InvalidFormat(normalized)),
        Ok(_) => Ok(normalized),
        Err(e) => Err(UrlValidationError::InvalidFormat(e.to_string())),
    }
}
