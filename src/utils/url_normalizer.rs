//! URL normalization and validation.
//!
//! Normalization is deliberately light: trim whitespace and default to HTTPS
//! when no scheme is given. Validation then requires a well-formed absolute
//! HTTP(S) URL. Both are pure functions with no I/O.

use url::Url;

/// Reasons a destination URL can be rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must use http or https protocol")]
    UnsupportedProtocol,
}

/// Normalizes raw user input into a candidate URL.
///
/// Trims surrounding whitespace and prepends `https://` when the input lacks
/// an `http://` or `https://` prefix, so `example.com` becomes
/// `https://example.com`. Already-prefixed input is returned unchanged.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Validates that `input` is a well-formed absolute HTTP(S) URL.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparsable input and
/// [`UrlValidationError::UnsupportedProtocol`] for schemes other than
/// `http`/`https`. Dangerous schemes (`javascript:`, `data:`, `file:`) fall
/// under the latter.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}
