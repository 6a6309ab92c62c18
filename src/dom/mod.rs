//! Document Accessor
//!
//! The capability surface the extraction rules are written against. Rules
//! never touch a parser directly; they ask an accessor to find, navigate and
//! read nodes, and every step answers with an `Option` so a missing node
//! short-circuits the rest of the lookup.
//!
//! [`HtmlDocument`] is the production implementation on top of `dom_query`.

mod html;
#[cfg(test)]
pub(crate) mod memory;

pub use html::HtmlDocument;

/// Content type of the embedded structured-data script.
pub const STRUCTURED_DATA_TYPE: &str = "application/ld+json";

/// How much of an element's text a text-contains lookup inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextScope {
    /// Only the element's direct text children (label cells).
    Own,
    /// All descendant text (headings, disclosure banners).
    Deep,
}

/// Attribute predicate of a [`Query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrFilter<'q> {
    /// `[name="value"]`
    Equals(&'q str, &'q str),
    /// `[name*="value"]`
    Contains(&'q str, &'q str),
    /// `[name^="value"]`
    StartsWith(&'q str, &'q str),
}

/// A tag plus optional attribute predicate.
///
/// This is the subset of CSS the rules need. It renders to a real selector for
/// `dom_query` and is matched structurally by the in-memory test model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query<'q> {
    /// Tag name, or `*` for any element.
    pub tag: &'q str,
    /// Optional attribute predicate.
    pub attr: Option<AttrFilter<'q>>,
}

impl<'q> Query<'q> {
    /// Match every element with this tag.
    #[must_use]
    pub const fn tag(tag: &'q str) -> Self {
        Self { tag, attr: None }
    }

    #[must_use]
    pub const fn attr_eq(self, name: &'q str, value: &'q str) -> Self {
        Self {
            attr: Some(AttrFilter::Equals(name, value)),
            ..self
        }
    }

    #[must_use]
    pub const fn attr_contains(self, name: &'q str, value: &'q str) -> Self {
        Self {
            attr: Some(AttrFilter::Contains(name, value)),
            ..self
        }
    }

    #[must_use]
    pub const fn attr_starts_with(self, name: &'q str, value: &'q str) -> Self {
        Self {
            attr: Some(AttrFilter::StartsWith(name, value)),
            ..self
        }
    }

    /// Render as a CSS selector.
    #[must_use]
    pub fn to_css(&self) -> String {
        let (name, op, value) = match self.attr {
            None => return self.tag.to_string(),
            Some(AttrFilter::Equals(n, v)) => (n, "=", v),
            Some(AttrFilter::Contains(n, v)) => (n, "*=", v),
            Some(AttrFilter::StartsWith(n, v)) => (n, "^=", v),
        };
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!(r#"{}[{name}{op}"{escaped}"]"#, self.tag)
    }

    /// Structural match against an element's tag and attribute lookup.
    pub fn matches<'v>(&self, tag: &str, attr: impl Fn(&str) -> Option<&'v str>) -> bool {
        if self.tag != "*" && !self.tag.eq_ignore_ascii_case(tag) {
            return false;
        }
        match self.attr {
            None => true,
            Some(AttrFilter::Equals(n, v)) => attr(n) == Some(v),
            Some(AttrFilter::Contains(n, v)) => attr(n).is_some_and(|a| a.contains(v)),
            Some(AttrFilter::StartsWith(n, v)) => attr(n).is_some_and(|a| a.starts_with(v)),
        }
    }
}

/// Read and navigation capabilities over a parsed page.
///
/// Nodes are opaque handles borrowed from the accessor. All lookups follow
/// document order, and "first" always means first in document order.
pub trait DocumentAccessor {
    /// Handle to a node of this document.
    type Node<'a>: Clone
    where
        Self: 'a;

    /// First element with tag `tag` whose text (per `scope`) contains `needle`.
    fn find_by_text<'a>(
        &'a self,
        tag: &str,
        needle: &str,
        scope: TextScope,
    ) -> Option<Self::Node<'a>>;

    /// Every element matching any of `queries`, in document order.
    fn select_all<'a>(&'a self, queries: &[Query<'_>]) -> Vec<Self::Node<'a>>;

    /// Every descendant of `node` matching any of `queries`, in document order.
    fn select_within<'a>(
        &'a self,
        node: &Self::Node<'a>,
        queries: &[Query<'_>],
    ) -> Vec<Self::Node<'a>>;

    /// Next sibling, skipping whitespace-only text and comments.
    fn next_sibling<'a>(&'a self, node: &Self::Node<'a>) -> Option<Self::Node<'a>>;

    /// Nearest ancestor element with tag `tag`.
    fn ancestor<'a>(&'a self, node: &Self::Node<'a>, tag: &str) -> Option<Self::Node<'a>>;

    /// Text content of the node and its descendants.
    fn text<'a>(&'a self, node: &Self::Node<'a>) -> String;

    /// Inner markup of the node, serialized verbatim.
    fn inner_html<'a>(&'a self, node: &Self::Node<'a>) -> String;

    /// Named attribute of an element.
    fn attr<'a>(&'a self, node: &Self::Node<'a>, name: &str) -> Option<String>;

    /// First element matching `query`.
    fn select_first<'a>(&'a self, query: Query<'_>) -> Option<Self::Node<'a>> {
        self.select_all(&[query]).into_iter().next()
    }

    /// Raw payload of the embedded structured-data script, if the page has one.
    fn structured_data(&self) -> Option<String> {
        let query = Query::tag("script").attr_eq("type", STRUCTURED_DATA_TYPE);
        let script = self.select_first(query)?;
        Some(self.text(&script))
    }
}
