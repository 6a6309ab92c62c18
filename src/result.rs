//! Result types for extraction output.
//!
//! A `Listing` is built once per extraction from a single markup payload and
//! never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reference to another listing, as found in a card grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelatedListing {
    /// Storefront package identifier (`id` query parameter of the card link).
    pub package_id: String,
}

impl RelatedListing {
    #[must_use]
    pub fn new(package_id: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
        }
    }
}

/// Structured metadata extracted from one storefront detail page.
///
/// Only `title` is guaranteed. Every other field is best-effort and left empty
/// when its rule finds nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// App title.
    pub title: String,

    /// Plain-text synopsis.
    pub description: Option<String>,

    /// Synopsis inner markup, trimmed.
    pub description_html: Option<String>,

    /// Publisher display name.
    pub developer_name: Option<String>,

    /// Publisher identifier from the profile link's `id` parameter.
    pub developer_id: Option<String>,

    /// Publisher profile link as it appears in the page.
    pub developer_url: Option<String>,

    /// Publisher website.
    pub website_url: Option<String>,

    /// Publisher contact email.
    pub email: Option<String>,

    /// Publisher postal address.
    pub physical_address: Option<String>,

    /// Privacy policy link.
    pub privacy_url: Option<String>,

    /// Raw "Updated on" value.
    pub updated_at: Option<String>,

    /// `updated_at` parsed as a calendar date, when it has a known format.
    pub updated_on: Option<NaiveDate>,

    /// Whether the page carries an ads disclosure.
    pub contains_ads: bool,

    /// Application category from structured data.
    pub category: Option<String>,

    /// Average rating from structured data.
    pub rating_value: Option<f64>,

    /// Number of ratings from structured data.
    pub rating_count: Option<u64>,

    /// Primary icon URL.
    pub cover_image_url: Option<String>,

    /// Screenshot URLs in page order.
    pub screenshot_urls: Vec<String>,

    /// Listings from the "Similar apps" grid, first occurrence only.
    pub similar_listings: Vec<RelatedListing>,

    /// Listings from the publisher's own grid, first occurrence only.
    pub more_from_developer: Vec<RelatedListing>,

    /// Changelog markup, verbatim.
    pub whats_new: Option<String>,

    /// Input markup, kept for diagnostics.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_source: String,
}
