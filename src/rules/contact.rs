//! Label-adjacency rules for publisher contact and update fields.
//!
//! Each value sits in the element right after a text label such as
//! `<div>Email</div><div>dev@example.com</div>`. The label element is the first
//! `div` whose own text contains the label string.

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::non_empty;
use crate::dom::{DocumentAccessor, TextScope};
use crate::options::Labels;

/// Element that carries a label.
pub const LABEL_TAG: &str = "div";

/// Date layouts seen in the "Updated on" value.
const UPDATED_ON_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%d %b %Y", "%d %B %Y", "%Y-%m-%d"];

/// Field a label rule fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Website,
    Email,
    Address,
    PrivacyPolicy,
    UpdatedOn,
}

/// A label string and the field its adjacent value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRule<'l> {
    pub field: ContactField,
    pub label: &'l str,
}

impl<'l> LabelRule<'l> {
    #[must_use]
    pub const fn new(field: ContactField, label: &'l str) -> Self {
        Self { field, label }
    }

    /// Text of the element following the label, if both exist.
    pub fn apply<D: DocumentAccessor + ?Sized>(&self, doc: &D) -> Option<String> {
        if self.label.is_empty() {
            return None;
        }
        let label = doc.find_by_text(LABEL_TAG, self.label, TextScope::Own)?;
        let value = doc.next_sibling(&label)?;
        non_empty(&doc.text(&value))
    }
}

/// Label rules in field order.
#[must_use]
pub fn label_rules(labels: &Labels) -> [LabelRule<'_>; 5] {
    [
        LabelRule::new(ContactField::Website, &labels.website),
        LabelRule::new(ContactField::Email, &labels.email),
        LabelRule::new(ContactField::Address, &labels.address),
        LabelRule::new(ContactField::PrivacyPolicy, &labels.privacy_policy),
        LabelRule::new(ContactField::UpdatedOn, &labels.updated_on),
    ]
}

/// Values found by the label rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub website_url: Option<String>,
    pub email: Option<String>,
    pub physical_address: Option<String>,
    pub privacy_url: Option<String>,
    pub updated_at: Option<String>,
}

/// Run every label rule against the document.
pub fn extract_contact_details<D>(doc: &D, labels: &Labels) -> ContactDetails
where
    D: DocumentAccessor + ?Sized,
{
    let mut details = ContactDetails::default();

    for rule in label_rules(labels) {
        let value = rule.apply(doc);
        match &value {
            Some(v) => trace!(field = ?rule.field, value = %v, "label rule matched"),
            None => debug!(field = ?rule.field, label = rule.label, "label not found"),
        }
        let slot = match rule.field {
            ContactField::Website => &mut details.website_url,
            ContactField::Email => &mut details.email,
            ContactField::Address => &mut details.physical_address,
            ContactField::PrivacyPolicy => &mut details.privacy_url,
            ContactField::UpdatedOn => &mut details.updated_at,
        };
        *slot = value;
    }

    details
}

/// Parse an "Updated on" value such as `Mar 15, 2024`.
#[must_use]
pub fn parse_updated_on(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    UPDATED_ON_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
