//! Related-listing rules ("Similar apps" and the publisher's own grid).

use std::collections::HashSet;

use tracing::{debug, trace};
use url::Url;

use super::section_after_heading;
use crate::dom::{DocumentAccessor, Query};
use crate::result::RelatedListing;
use crate::url_utils;

/// Collect the listings linked from the section headed by `heading`.
///
/// Anchors are read from the block after the heading's `<header>`; only hrefs
/// starting with `listing_path` count. Repeated package ids keep their first
/// position.
pub fn extract_related<D>(
    doc: &D,
    heading: &str,
    listing_path: &str,
    base: Option<&Url>,
) -> Vec<RelatedListing>
where
    D: DocumentAccessor + ?Sized,
{
    let Some(grid) = section_after_heading(doc, heading) else {
        debug!(heading, "related section not found");
        return Vec::new();
    };

    let anchor = Query::tag("a").attr_starts_with("href", listing_path);
    let links = doc.select_within(&grid, &[anchor]);

    let mut seen = HashSet::new();
    let mut related = Vec::new();
    for link in &links {
        let Some(href) = doc.attr(link, "href") else {
            continue;
        };
        let Some(package_id) = url_utils::package_id(&href, base) else {
            continue;
        };
        if seen.insert(package_id.clone()) {
            related.push(RelatedListing { package_id });
        } else {
            trace!(package_id, "duplicate related listing");
        }
    }

    related
}
