//! Structured-data (JSON-LD) rule.
//!
//! The page embeds one `application/ld+json` script describing the app. It is
//! the only machine-readable block on the page, so a payload that does not
//! decode means the document is not a real listing page.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::dom::DocumentAccessor;
use crate::error::{Error, Result};

/// Fields read from the structured-data block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredData {
    pub rating_value: Option<f64>,
    pub rating_count: Option<u64>,
    pub category: Option<String>,
}

/// Decode the structured-data block and read rating and category.
///
/// # Errors
///
/// Returns [`Error::MalformedDocument`] when the script exists but its payload
/// is not valid JSON.
pub fn extract_structured_data<D: DocumentAccessor + ?Sized>(doc: &D) -> Result<StructuredData> {
    let Some(payload) = doc.structured_data() else {
        debug!("no structured-data block");
        return Ok(StructuredData::default());
    };

    let value: Value = serde_json::from_str(payload.trim()).map_err(|e| {
        warn!(error = %e, "structured-data block is not valid JSON");
        Error::MalformedDocument(format!("structured data is not valid JSON: {e}"))
    })?;

    let Some(app) = application_object(&value) else {
        debug!("structured data holds no object");
        return Ok(StructuredData::default());
    };

    let rating = app.get("aggregateRating").and_then(Value::as_object);
    let rating_field = |key: &str| rating.and_then(|r| r.get(key));

    Ok(StructuredData {
        rating_value: rating_field("ratingValue").and_then(coerce_decimal),
        rating_count: rating_field("ratingCount").and_then(coerce_count),
        category: app
            .get("applicationCategory")
            .and_then(Value::as_str)
            .and_then(super::non_empty),
    })
}

/// The object describing the app.
///
/// A top-level array (or `@graph`) is searched for the first object carrying
/// app fields, falling back to its first object.
fn application_object(value: &Value) -> Option<&Map<String, Value>> {
    let items = match value {
        Value::Object(map) => match map.get("@graph").and_then(Value::as_array) {
            Some(graph) => graph,
            None => return Some(map),
        },
        Value::Array(items) => items,
        _ => return None,
    };

    let objects = || items.iter().filter_map(Value::as_object);
    objects()
        .find(|obj| has_app_fields(obj))
        .or_else(|| objects().next())
}

fn has_app_fields(obj: &Map<String, Value>) -> bool {
    obj.contains_key("aggregateRating") || obj.contains_key("applicationCategory")
}

fn coerce_decimal(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Vote count as an integer: numbers are truncated, strings keep their
/// leading digits with thousands separators dropped (`"1,200"` is 1200).
fn coerce_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| truncate(n.as_f64()?)),
        Value::String(s) => {
            let digits: String = s
                .trim()
                .chars()
                .filter(|c| *c != ',')
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(f: f64) -> Option<u64> {
    (f.is_finite() && f >= 0.0).then_some(f as u64)
}
