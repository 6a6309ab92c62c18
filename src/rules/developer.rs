//! Publisher identity rule.

use tracing::debug;
use url::Url;

use super::non_empty;
use crate::dom::{DocumentAccessor, Query};
use crate::url_utils;

/// Publisher name, profile link and identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeveloperIdentity {
    pub name: Option<String>,
    pub url: Option<String>,
    pub id: Option<String>,
}

/// Read the publisher from the first link into its profile page.
///
/// `developer_path` is matched as a substring of the href so both the
/// numeric (`dev?id=123`) and named (`developer?id=Acme`) profile forms hit.
pub fn extract_developer<D>(doc: &D, developer_path: &str, base: Option<&Url>) -> DeveloperIdentity
where
    D: DocumentAccessor + ?Sized,
{
    let profile = Query::tag("a").attr_contains("href", developer_path);
    let Some(link) = doc.select_first(profile) else {
        debug!(developer_path, "no developer profile link");
        return DeveloperIdentity::default();
    };

    let name = non_empty(&doc.text(&link));
    let url = doc.attr(&link, "href");
    let id = url
        .as_deref()
        .and_then(|href| url_utils::query_param(href, base, "id"));

    DeveloperIdentity { name, url, id }
}
