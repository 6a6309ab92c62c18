//! # rs-play-listing
//!
//! Extracts structured app-listing metadata from the markup of a single
//! storefront detail page: title, publisher, contact details, ratings, media,
//! related listings and changelog.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_play_listing::extract;
//!
//! let html = r#"<html><body>
//! <h1 itemprop="name">Chess Pro</h1>
//! <script type="application/ld+json">
//! {"aggregateRating":{"ratingValue":4.5,"ratingCount":"1200"},"applicationCategory":"GAME"}
//! </script>
//! </body></html>"#;
//!
//! let listing = extract(html)?;
//! assert_eq!(listing.title, "Chess Pro");
//! assert_eq!(listing.rating_count, Some(1200));
//! # Ok::<(), rs_play_listing::Error>(())
//! ```
//!
//! ## Degradation
//!
//! The page has no contractual structure. Fields are located by adjacent text
//! labels, section headings and attribute heuristics, and any field whose rule
//! finds nothing is simply left empty. Only two conditions fail an extraction:
//! a missing title ([`Error::MissingRequiredField`]) and a structured-data
//! block that is not valid JSON ([`Error::MalformedDocument`]).
//!
//! ## Fetching
//!
//! Network access is left to the caller. Every function here is a pure,
//! synchronous transformation of one markup payload, so pages can be
//! processed in parallel freely.

mod error;
mod extract;
mod options;
mod result;

/// Document accessor trait and its `dom_query` implementation.
pub mod dom;

/// Field extraction rules.
pub mod rules;

/// URL normalization and query-parameter helpers.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use dom::{DocumentAccessor, HtmlDocument};
pub use error::{Error, Result};
pub use options::{Labels, Options, DEFAULT_BASE_URL, DEFAULT_DEVELOPER_PATH, DEFAULT_LISTING_PATH};
pub use result::{Listing, RelatedListing};

/// Extracts a listing from page markup using default options.
///
/// # Errors
///
/// Returns [`Error::MissingRequiredField`] when the title heading is absent and
/// [`Error::MalformedDocument`] when the structured-data block is not JSON.
///
/// # Example
///
/// ```rust
/// use rs_play_listing::{extract, Error};
///
/// let result = extract("<html><body><p>Not a listing</p></body></html>");
/// assert!(matches!(result, Err(Error::MissingRequiredField("title"))));
/// ```
pub fn extract(html: &str) -> Result<Listing> {
    extract_with_options(html, &Options::default())
}

/// Extracts a listing from page markup with custom options.
///
/// # Errors
///
/// Same conditions as [`extract`].
///
/// # Example
///
/// ```rust
/// use rs_play_listing::{extract_with_options, Options};
///
/// let html = r#"<h1 itemprop="name">Chess Pro</h1>"#;
/// let options = Options {
///     keep_raw_source: false,
///     ..Options::default()
/// };
/// let listing = extract_with_options(html, &options)?;
/// assert!(listing.raw_source.is_empty());
/// # Ok::<(), rs_play_listing::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<Listing> {
    extract::extract_listing(html, options)
}

/// Extracts a listing from page bytes, detecting the character encoding from
/// the page's meta charset declaration.
///
/// # Errors
///
/// Same conditions as [`extract`].
///
/// # Example
///
/// ```rust
/// use rs_play_listing::extract_bytes;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><h1 itemprop=\"name\">Caf\xE9 Finder</h1>";
/// let listing = extract_bytes(html)?;
/// assert_eq!(listing.title, "Café Finder");
/// # Ok::<(), rs_play_listing::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<Listing> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts a listing from page bytes with custom options.
///
/// # Errors
///
/// Same conditions as [`extract`].
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<Listing> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}

/// Extracts a listing from any [`DocumentAccessor`].
///
/// `raw_source` is stored on the listing as-is (subject to
/// `Options::keep_raw_source`); it is not parsed.
///
/// # Errors
///
/// Same conditions as [`extract`].
///
/// # Example
///
/// ```rust
/// use rs_play_listing::{extract_from, HtmlDocument, Options};
///
/// let html = r#"<h1 itemprop="name">Chess Pro</h1>"#;
/// let doc = HtmlDocument::parse(html);
/// let listing = extract_from(&doc, html, &Options::default())?;
/// assert_eq!(listing.title, "Chess Pro");
/// # Ok::<(), rs_play_listing::Error>(())
/// ```
pub fn extract_from<D>(doc: &D, raw_source: &str, options: &Options) -> Result<Listing>
where
    D: DocumentAccessor + ?Sized,
{
    extract::extract_from_document(doc, raw_source, options)
}
