//! Backend base URL normalization and masking.

use url::Url;

/// Errors that can occur while normalizing the backend base URL.
#[derive(Debug, thiserror::Error)]
pub enum BaseUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes the backend base URL so path segments can be appended to it.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Converted to lowercase
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Query and fragment**: Removed
/// 5. **Path**: Preserved, with a trailing slash
///
/// # Errors
///
/// Returns [`BaseUrlError::InvalidFormat`] for malformed URLs.
/// Returns [`BaseUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn normalize_base_url(input: &str) -> Result<Url, BaseUrlError> {
    let mut url =
        Url::parse(input.trim()).map_err(|e| BaseUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(BaseUrlError::UnsupportedProtocol),
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase)).map_err(|_| {
            BaseUrlError::NormalizationFailed("Failed to set normalized host".to_string())
        })?;
    }

    url.set_fragment(None);
    url.set_query(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            BaseUrlError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Renders a URL for logs with any password replaced by `***`.
pub fn mask_url(url: &Url) -> String {
    if url.password().is_none() {
        return url.to_string();
    }

    let mut masked = url.clone();
    match masked.set_password(Some("***")) {
        Ok(()) => masked.to_string(),
        Err(()) => "<unprintable url>".to_string(),
    }
}
