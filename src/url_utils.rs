//! URL Utility Functions
//!
//! Normalization of image URLs found in listing markup, and query-parameter
//! reads on listing and publisher hrefs.

use url::Url;

/// Normalize a content URL taken from an `src` attribute.
///
/// Protocol-relative URLs (`//host/path`) get an `https:` scheme; anything
/// else is returned unchanged. Applying it twice gives the same result.
///
/// # Examples
///
/// ```
/// use rs_play_listing::url_utils::normalize_content_url;
///
/// assert_eq!(normalize_content_url("//img.example/x.png"), "https://img.example/x.png");
/// assert_eq!(normalize_content_url("https://img.example/x.png"), "https://img.example/x.png");
/// ```
#[must_use]
pub fn normalize_content_url(url_str: &str) -> String {
    if url_str.starts_with("//") {
        format!("https:{url_str}")
    } else {
        url_str.to_string()
    }
}

/// Parse a URL string, returning None if invalid.
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    Url::parse(url_str.trim()).ok()
}

/// Read a query parameter from an absolute or relative href.
///
/// Relative hrefs are resolved against `base` first; without a base only
/// absolute hrefs can be read. The value is percent-decoded and trimmed, and
/// an empty value counts as absent.
#[must_use]
pub fn query_param(href: &str, base: Option<&Url>, name: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let url = match base {
        Some(base) => base.join(href).ok()?,
        None => Url::parse(href).ok()?,
    };

    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Package identifier of a listing href (its `id` query parameter).
#[must_use]
pub fn package_id(href: &str, base: Option<&Url>) -> Option<String> {
    query_param(href, base, "id")
}
