//! Icon, screenshot and changelog rules.

use tracing::debug;

use super::section_after_heading;
use crate::dom::{DocumentAccessor, Query};
use crate::url_utils::normalize_content_url;

/// Accessible label of the primary icon.
pub const ICON_ALT: &str = "Icon image";

/// Accessible labels of screenshot images.
pub const SCREENSHOT_ALTS: &[&str] = &["Screenshot image", "Screenshot"];

/// Normalized `src` of the primary icon.
pub fn extract_cover_image<D: DocumentAccessor + ?Sized>(doc: &D) -> Option<String> {
    let icon = doc.select_first(Query::tag("img").attr_eq("alt", ICON_ALT))?;
    doc.attr(&icon, "src").as_deref().map(normalize_content_url)
}

/// Normalized screenshot URLs in page order.
pub fn extract_screenshots<D: DocumentAccessor + ?Sized>(doc: &D) -> Vec<String> {
    let queries: Vec<Query<'_>> = SCREENSHOT_ALTS
        .iter()
        .map(|alt| Query::tag("img").attr_eq("alt", alt))
        .collect();

    doc.select_all(&queries)
        .iter()
        .filter_map(|img| doc.attr(img, "src"))
        .map(|src| normalize_content_url(&src))
        .collect()
}

/// Changelog markup under the "What's new" heading, verbatim.
pub fn extract_whats_new<D: DocumentAccessor + ?Sized>(doc: &D, heading: &str) -> Option<String> {
    let Some(block) = section_after_heading(doc, heading) else {
        debug!(heading, "changelog section not found");
        return None;
    };
    Some(doc.inner_html(&block))
}
