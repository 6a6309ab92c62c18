//! `dom_query`-backed document accessor.

use dom_query::{Document, NodeRef, Selection};
use tendril::StrTendril;

use super::{DocumentAccessor, Query, TextScope};

/// A parsed storefront page.
pub struct HtmlDocument {
    doc: Document,
}

impl HtmlDocument {
    /// Parse markup into a navigable tree. Parsing never fails; broken markup
    /// is repaired the way browsers repair it.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Document::from(html),
        }
    }
}

fn selector_list(queries: &[Query<'_>]) -> String {
    queries
        .iter()
        .map(Query::to_css)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Concatenated direct text children of an element.
fn own_text(node: &NodeRef) -> StrTendril {
    let mut text = StrTendril::new();
    for child in node.children().iter().filter(|c| c.is_text()) {
        text.push_tendril(&child.text());
    }
    text
}

fn is_skippable(node: &NodeRef) -> bool {
    if node.is_element() {
        return false;
    }
    !node.is_text() || node.text().trim().is_empty()
}

impl DocumentAccessor for HtmlDocument {
    type Node<'a> = NodeRef<'a>;

    fn find_by_text<'a>(
        &'a self,
        tag: &str,
        needle: &str,
        scope: TextScope,
    ) -> Option<NodeRef<'a>> {
        self.doc
            .select(tag)
            .nodes()
            .iter()
            .find(|node| match scope {
                TextScope::Own => own_text(node).contains(needle),
                TextScope::Deep => node.text().contains(needle),
            })
            .copied()
    }

    fn select_all<'a>(&'a self, queries: &[Query<'_>]) -> Vec<NodeRef<'a>> {
        if queries.is_empty() {
            return Vec::new();
        }
        self.doc.select(&selector_list(queries)).nodes().to_vec()
    }

    fn select_within<'a>(
        &'a self,
        node: &NodeRef<'a>,
        queries: &[Query<'_>],
    ) -> Vec<NodeRef<'a>> {
        if queries.is_empty() || !node.is_element() {
            return Vec::new();
        }
        Selection::from(*node)
            .select(&selector_list(queries))
            .nodes()
            .to_vec()
    }

    fn next_sibling<'a>(&'a self, node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if !is_skippable(&s) {
                return Some(s);
            }
            sibling = s.next_sibling();
        }
        None
    }

    fn ancestor<'a>(&'a self, node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
        let mut current = node.parent();
        while let Some(p) = current {
            let name = p.node_name();
            if name.is_some_and(|n| n.eq_ignore_ascii_case(tag)) {
                return Some(p);
            }
            current = p.parent();
        }
        None
    }

    fn text<'a>(&'a self, node: &NodeRef<'a>) -> String {
        node.text().to_string()
    }

    fn inner_html<'a>(&'a self, node: &NodeRef<'a>) -> String {
        Selection::from(*node).inner_html().to_string()
    }

    fn attr<'a>(&'a self, node: &NodeRef<'a>, name: &str) -> Option<String> {
        node.attr(name).map(|v| v.to_string())
    }
}
