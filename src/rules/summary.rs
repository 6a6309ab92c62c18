//! Title, synopsis and ads-disclosure rules.

use tracing::debug;

use super::non_empty;
use crate::dom::{DocumentAccessor, Query, TextScope};
use crate::error::{Error, Result};

/// Synopsis as plain text and as trimmed inner markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    pub text: Option<String>,
    pub html: Option<String>,
}

/// Text of the `h1[itemprop="name"]` heading, exactly as it appears.
///
/// # Errors
///
/// Returns [`Error::MissingRequiredField`] when the heading is missing.
pub fn extract_title<D: DocumentAccessor + ?Sized>(doc: &D) -> Result<String> {
    doc.select_first(Query::tag("h1").attr_eq("itemprop", "name"))
        .map(|h1| doc.text(&h1))
        .ok_or(Error::MissingRequiredField("title"))
}

/// Synopsis from the element following `meta[itemprop="description"]`.
pub fn extract_description<D: DocumentAccessor + ?Sized>(doc: &D) -> Description {
    let Some(block) = doc
        .select_first(Query::tag("meta").attr_eq("itemprop", "description"))
        .and_then(|meta| doc.next_sibling(&meta))
    else {
        debug!("description block not found");
        return Description::default();
    };

    Description {
        text: non_empty(&doc.text(&block)),
        html: non_empty(&doc.inner_html(&block)),
    }
}

/// Whether any `div` carries the ads disclosure marker.
pub fn extract_contains_ads<D: DocumentAccessor + ?Sized>(doc: &D, marker: &str) -> bool {
    !marker.is_empty() && doc.find_by_text("div", marker, TextScope::Deep).is_some()
}
