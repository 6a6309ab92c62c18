//! Extraction pipeline.
//!
//! Runs every field rule against one document and assembles the `Listing`.
//! Rules are independent except that the publisher name found by the
//! developer rule is the heading of the "more from developer" section.

use tracing::debug;

use crate::dom::{DocumentAccessor, HtmlDocument};
use crate::error::Result;
use crate::options::Options;
use crate::result::Listing;
use crate::rules;
use crate::url_utils;

/// Parse markup and extract a listing from it.
pub(crate) fn extract_listing(html: &str, options: &Options) -> Result<Listing> {
    let document = HtmlDocument::parse(html);
    extract_from_document(&document, html, options)
}

/// Extract a listing from an already parsed document.
pub(crate) fn extract_from_document<D>(
    doc: &D,
    raw_source: &str,
    options: &Options,
) -> Result<Listing>
where
    D: DocumentAccessor + ?Sized,
{
    debug!(html_len = raw_source.len(), "starting listing extraction");

    let title = rules::extract_title(doc)?;
    let structured = rules::extract_structured_data(doc)?;

    let base = url_utils::parse_url(&options.base_url);
    if base.is_none() {
        debug!(base_url = %options.base_url, "invalid base URL; relative hrefs will not resolve");
    }
    let base = base.as_ref();
    let labels = &options.labels;
    let listing_path = &options.listing_path;

    let description = rules::extract_description(doc);
    let contact = rules::extract_contact_details(doc, labels);
    let developer = rules::extract_developer(doc, &options.developer_path, base);
    let similar_listings = rules::extract_related(doc, &labels.similar_apps, listing_path, base);
    let more_from_developer = match developer.name.as_deref() {
        Some(name) => rules::extract_related(doc, name, listing_path, base),
        None => {
            debug!("developer name unknown; skipping more-from-developer");
            Vec::new()
        }
    };
    let updated_on = contact
        .updated_at
        .as_deref()
        .and_then(rules::parse_updated_on);
    let raw_source = if options.keep_raw_source {
        raw_source.to_string()
    } else {
        String::new()
    };

    let listing = Listing {
        title,
        description: description.text,
        description_html: description.html,
        developer_name: developer.name,
        developer_id: developer.id,
        developer_url: developer.url,
        website_url: contact.website_url,
        email: contact.email,
        physical_address: contact.physical_address,
        privacy_url: contact.privacy_url,
        updated_at: contact.updated_at,
        updated_on,
        contains_ads: rules::extract_contains_ads(doc, &labels.contains_ads),
        category: structured.category,
        rating_value: structured.rating_value,
        rating_count: structured.rating_count,
        cover_image_url: rules::extract_cover_image(doc),
        screenshot_urls: rules::extract_screenshots(doc),
        similar_listings,
        more_from_developer,
        whats_new: rules::extract_whats_new(doc, &labels.whats_new),
        raw_source,
    };

    debug!(
        title = %listing.title,
        screenshots = listing.screenshot_urls.len(),
        similar = listing.similar_listings.len(),
        more_from_developer = listing.more_from_developer.len(),
        "listing extraction complete"
    );

    Ok(listing)
}
