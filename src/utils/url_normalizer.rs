//! URL validation and normalization utilities.
//!
//! [`validate_url`] accepts absolute `http`/`https` URLs and returns them
//! unchanged. [`normalize_url`] additionally rewrites them to a canonical
//! form; it is only applied when `NORMALIZE_URLS` is enabled.

use url::Url;

/// Upper bound on accepted URL length, in bytes.
pub const MAX_URL_LENGTH: usize = 8192;

/// Errors that can occur during URL validation or normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL exceeds {MAX_URL_LENGTH} bytes")]
    TooLong,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

fn parse_http_url(input: &str) -> Result<Url, UrlNormalizationError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    // The parser silently strips these, which would make the stored form
    // differ from what it resolves to.
    if input.bytes().any(|b| b.is_ascii_control() || b == b' ') {
        return Err(UrlNormalizationError::InvalidFormat(
            "URL contains whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlNormalizationError::MissingHost),
    }
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// Returns the input as given, so that a redirect sends the client exactly
/// where it asked to go.
///
/// # Errors
///
/// See [`UrlNormalizationError`].
pub fn validate_url(input: &str) -> Result<String, UrlNormalizationError> {
    parse_http_url(input)?;
    Ok(input.to_string())
}

/// Normalizes a URL to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Converted to lowercase
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Fragments**: Removed
/// 5. **Query and path**: Preserved as-is
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("HTTPS://EXAMPLE.COM:443/Path#top").unwrap(),
///     "https://example.com/Path"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url = parse_http_url(input)?;

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase)).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
        })?;
    }

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    Ok(url.to_string())
}

/// Canonical serialization of a URL (punycode host, percent-encoded path).
///
/// Returns `None` if the input does not parse.
pub fn ascii_serialization(input: &str) -> Option<String> {
    Url::parse(input).ok().map(String::from)
}
