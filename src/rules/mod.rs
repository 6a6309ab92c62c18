//! Field extraction rules.
//!
//! Each rule reads one field (or one closely related group of fields) from a
//! [`DocumentAccessor`] and reports absence as `None` or an empty collection.
//! Only the title rule and the structured-data rule can fail.

pub mod contact;
pub mod developer;
pub mod media;
pub mod related;
pub mod structured_data;
pub mod summary;

use crate::dom::{DocumentAccessor, TextScope};

pub use contact::{extract_contact_details, label_rules, parse_updated_on};
pub use contact::{ContactDetails, ContactField, LabelRule};
pub use developer::{extract_developer, DeveloperIdentity};
pub use media::{extract_cover_image, extract_screenshots, extract_whats_new};
pub use related::extract_related;
pub use structured_data::{extract_structured_data, StructuredData};
pub use summary::{extract_contains_ads, extract_description, extract_title, Description};

/// Heading tag the section rules anchor on.
pub const SECTION_HEADING_TAG: &str = "h2";

/// Container wrapping a section heading.
pub const SECTION_HEADER_TAG: &str = "header";

/// Content block belonging to the section whose heading contains `heading`.
///
/// The page lays a section out as `<header>…<h2>Heading</h2>…</header>` with
/// the content as the header's next sibling.
pub fn section_after_heading<'a, D>(doc: &'a D, heading: &str) -> Option<D::Node<'a>>
where
    D: DocumentAccessor + ?Sized,
{
    if heading.is_empty() {
        return None;
    }
    let title = doc.find_by_text(SECTION_HEADING_TAG, heading, TextScope::Deep)?;
    let header = doc.ancestor(&title, SECTION_HEADER_TAG)?;
    doc.next_sibling(&header)
}

/// Trimmed text, with empty text treated as absent.
pub(crate) fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
