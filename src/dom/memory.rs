//! In-memory document model for rule tests.
//!
//! Builds a small tree by hand so each rule can be exercised without going
//! through an HTML parser.

use super::{DocumentAccessor, Query, TextScope};

#[derive(Debug)]
enum Kind {
    Root,
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug)]
struct MemNode {
    kind: Kind,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Arena-backed tree. Node `0` is the document root.
#[derive(Debug)]
pub(crate) struct MemoryDocument {
    nodes: Vec<MemNode>,
}

impl MemoryDocument {
    pub(crate) const ROOT: usize = 0;

    pub(crate) fn new() -> Self {
        let root = MemNode {
            kind: Kind::Root,
            parent: None,
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }

    fn push(&mut self, parent: usize, kind: Kind) -> usize {
        let id = self.nodes.len();
        self.nodes.push(MemNode {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub(crate) fn element(&mut self, parent: usize, tag: &str, attrs: &[(&str, &str)]) -> usize {
        let attrs = attrs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let tag = tag.to_string();
        self.push(parent, Kind::Element { tag, attrs })
    }

    pub(crate) fn text_node(&mut self, parent: usize, text: &str) -> usize {
        self.push(parent, Kind::Text(text.to_string()))
    }

    /// Element containing a single text child.
    pub(crate) fn text_element(
        &mut self,
        parent: usize,
        tag: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> usize {
        let id = self.element(parent, tag, attrs);
        self.text_node(id, text);
        id
    }

    fn preorder(&self, from: usize, out: &mut Vec<usize>) {
        for &child in &self.nodes[from].children {
            out.push(child);
            self.preorder(child, out);
        }
    }

    fn descendants(&self, from: usize) -> Vec<usize> {
        let mut out = Vec::new();
        self.preorder(from, &mut out);
        out
    }

    fn tag(&self, id: usize) -> Option<&str> {
        match &self.nodes[id].kind {
            Kind::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    fn attr_ref(&self, id: usize, name: &str) -> Option<&str> {
        match &self.nodes[id].kind {
            Kind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    fn is_blank_text(&self, id: usize) -> bool {
        matches!(&self.nodes[id].kind, Kind::Text(t) if t.trim().is_empty())
    }

    fn matches_any(&self, id: usize, queries: &[Query<'_>]) -> bool {
        let Some(tag) = self.tag(id) else {
            return false;
        };
        queries
            .iter()
            .any(|q| q.matches(tag, |name| self.attr_ref(id, name)))
    }

    fn own_text(&self, id: usize) -> String {
        self.nodes[id]
            .children
            .iter()
            .filter_map(|&c| match &self.nodes[c].kind {
                Kind::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    fn serialize(&self, id: usize, out: &mut String) {
        match &self.nodes[id].kind {
            Kind::Text(t) => out.push_str(t),
            Kind::Root => self.serialize_children(id, out),
            Kind::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                for (k, v) in attrs {
                    out.push_str(&format!(r#" {k}="{v}""#));
                }
                out.push('>');
                self.serialize_children(id, out);
                out.push_str(&format!("</{tag}>"));
            }
        }
    }

    fn serialize_children(&self, id: usize, out: &mut String) {
        for &child in &self.nodes[id].children {
            self.serialize(child, out);
        }
    }
}

impl DocumentAccessor for MemoryDocument {
    type Node<'a> = usize;

    fn find_by_text<'a>(&'a self, tag: &str, needle: &str, scope: TextScope) -> Option<usize> {
        self.descendants(Self::ROOT).into_iter().find(|&id| {
            self.tag(id).is_some_and(|t| t.eq_ignore_ascii_case(tag))
                && match scope {
                    TextScope::Own => self.own_text(id).contains(needle),
                    TextScope::Deep => self.text(&id).contains(needle),
                }
        })
    }

    fn select_all<'a>(&'a self, queries: &[Query<'_>]) -> Vec<usize> {
        self.select_within(&Self::ROOT, queries)
    }

    fn select_within<'a>(&'a self, node: &usize, queries: &[Query<'_>]) -> Vec<usize> {
        self.descendants(*node)
            .into_iter()
            .filter(|&id| self.matches_any(id, queries))
            .collect()
    }

    fn next_sibling<'a>(&'a self, node: &usize) -> Option<usize> {
        let parent = self.nodes[*node].parent?;
        let siblings = &self.nodes[parent].children;
        let pos = siblings.iter().position(|c| c == node)?;
        siblings[pos + 1..]
            .iter()
            .copied()
            .find(|&s| !self.is_blank_text(s))
    }

    fn ancestor<'a>(&'a self, node: &usize, tag: &str) -> Option<usize> {
        let mut current = self.nodes[*node].parent;
        while let Some(p) = current {
            if self.tag(p).is_some_and(|t| t.eq_ignore_ascii_case(tag)) {
                return Some(p);
            }
            current = self.nodes[p].parent;
        }
        None
    }

    fn text<'a>(&'a self, node: &usize) -> String {
        match &self.nodes[*node].kind {
            Kind::Text(t) => t.clone(),
            _ => self
                .descendants(*node)
                .into_iter()
                .filter_map(|id| match &self.nodes[id].kind {
                    Kind::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect(),
        }
    }

    fn inner_html<'a>(&'a self, node: &usize) -> String {
        let mut out = String::new();
        self.serialize_children(*node, &mut out);
        out
    }

    fn attr<'a>(&'a self, node: &usize, name: &str) -> Option<String> {
        self.attr_ref(*node, name).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_document_navigation() {
        let mut doc = MemoryDocument::new();
        let body = doc.element(MemoryDocument::ROOT, "body", &[]);
        let label = doc.text_element(body, "div", &[], "Email");
        doc.text_node(body, "  ");
        let value = doc.text_element(body, "div", &[], "dev@example.com");

        let found = doc.find_by_text("div", "Email", TextScope::Own);
        assert_eq!(found, Some(label));
        assert_eq!(doc.next_sibling(&label), Some(value));
        assert_eq!(doc.ancestor(&value, "body"), Some(body));
        assert_eq!(doc.text(&body), "Email  dev@example.com");
    }

    #[test]
    fn test_memory_document_inner_html() {
        let mut doc = MemoryDocument::new();
        let div = doc.element(MemoryDocument::ROOT, "div", &[]);
        doc.text_node(div, "Fixed ");
        doc.text_element(div, "b", &[("class", "x")], "bugs");

        assert_eq!(doc.inner_html(&div), r#"Fixed <b class="x">bugs</b>"#);
    }
}
