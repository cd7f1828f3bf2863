// ABOUTME: Rewrite bookkeeping and the rewriting HTML serializer.
// ABOUTME: Passes record NodeId-keyed rewrites; a single tree walk emits the transformed page.

//! DOM rewriting for the enhancement pipeline.
//!
//! Passes never mutate the parsed tree. They record rewrites keyed by node
//! id (inline-style merges, raw blocks inserted before a node, inner-content
//! replacements), and a single walk over the document serializes the page
//! with those rewrites applied. This keeps each pass a pure computation over
//! an immutable tree, with all side effects confined to serialization.

use std::collections::HashMap;

use ego_tree::{NodeId, NodeRef};
use scraper::{Html, Node};

/// Tags whose text children are emitted raw (never entity-escaped).
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

/// Rewrites recorded by the enhancement passes, keyed by node id.
#[derive(Debug, Default)]
pub struct Rewrites {
    styles: HashMap<NodeId, String>,
    before: HashMap<NodeId, String>,
    inner: HashMap<NodeId, String>,
}

impl Rewrites {
    /// Append CSS declarations to an element's inline style.
    ///
    /// Declarations merge with any existing `style` attribute (and with
    /// earlier merges for the same node) joined by `"; "`.
    pub fn merge_style(&mut self, id: NodeId, decls: &str) {
        let entry = self.styles.entry(id).or_default();
        if !entry.is_empty() {
            entry.push_str("; ");
        }
        entry.push_str(decls);
    }

    /// Emit a raw HTML block immediately before the node.
    pub fn insert_before(&mut self, id: NodeId, html: String) {
        let entry = self.before.entry(id).or_default();
        entry.push_str(&html);
    }

    /// Replace the node's children with a raw HTML block.
    pub fn set_inner_html(&mut self, id: NodeId, html: String) {
        self.inner.insert(id, html);
    }

    /// True when no rewrites were recorded.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.before.is_empty() && self.inner.is_empty()
    }
}

/// Serialize a parsed document with the recorded rewrites applied.
pub fn serialize_document(doc: &Html, rewrites: &Rewrites) -> String {
    let mut out = String::new();
    for child in doc.tree.root().children() {
        serialize_node(child, rewrites, &mut out);
    }
    out
}

fn serialize_node(node: NodeRef<'_, Node>, rewrites: &Rewrites, out: &mut String) {
    if let Some(block) = rewrites.before.get(&node.id()) {
        out.push_str(block);
    }
    match node.value() {
        Node::Text(text) => {
            if in_raw_text_element(&node) {
                out.push_str(&**text);
            } else {
                out.push_str(&escape_text(&**text));
            }
        }
        Node::Element(el) => {
            let name = el.name();
            out.push('<');
            out.push_str(name);

            let extra_style = rewrites.styles.get(&node.id());
            let mut style_written = false;
            for (key, value) in el.attrs() {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                if key == "style" {
                    style_written = true;
                    match extra_style {
                        Some(extra) => out.push_str(&escape_attr(&merge_decls(value, extra))),
                        None => out.push_str(&escape_attr(value)),
                    }
                } else {
                    out.push_str(&escape_attr(value));
                }
                out.push('"');
            }
            if let Some(extra) = extra_style {
                if !style_written {
                    out.push_str(" style=\"");
                    out.push_str(&escape_attr(extra));
                    out.push('"');
                }
            }

            if is_void_element(name) {
                out.push_str(" />");
                return;
            }

            out.push('>');
            if let Some(inner) = rewrites.inner.get(&node.id()) {
                out.push_str(inner);
            } else {
                for child in node.children() {
                    serialize_node(child, rewrites, out);
                }
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(&**comment);
            out.push_str("-->");
        }
        Node::Doctype(doctype) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype.name());
            out.push('>');
        }
        Node::Document | Node::Fragment => {
            for child in node.children() {
                serialize_node(child, rewrites, out);
            }
        }
        _ => {}
    }
}

/// Join an existing inline style with appended declarations.
fn merge_decls(existing: &str, extra: &str) -> String {
    let trimmed = existing.trim_end().trim_end_matches(';');
    if trimmed.is_empty() {
        extra.to_string()
    } else {
        format!("{}; {}", trimmed, extra)
    }
}

fn in_raw_text_element(node: &NodeRef<'_, Node>) -> bool {
    node.parent()
        .map(|parent| match parent.value() {
            Node::Element(el) => RAW_TEXT_TAGS.contains(&el.name()),
            _ => false,
        })
        .unwrap_or(false)
}

/// Escape text node content for HTML output.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for double-quoted HTML output.
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::Selector;

    fn first_id(doc: &Html, css: &str) -> NodeId {
        let selector = Selector::parse(css).unwrap();
        doc.select(&selector).next().unwrap().id()
    }

    #[test]
    fn passthrough_keeps_structure() {
        let doc = Html::parse_document(
            "<!DOCTYPE html><html><head></head><body><p class=\"a\">hi</p><img src=\"x.png\"></body></html>",
        );
        let out = serialize_document(&doc, &Rewrites::default());
        assert_eq!(
            out,
            "<!DOCTYPE html><html><head></head><body><p class=\"a\">hi</p><img src=\"x.png\" /></body></html>"
        );
    }

    #[test]
    fn merge_style_adds_attribute_when_absent() {
        let doc = Html::parse_document("<html><body><a href=\"#\">t</a></body></html>");
        let mut rewrites = Rewrites::default();
        rewrites.merge_style(first_id(&doc, "a"), "color: #dd0000");
        let out = serialize_document(&doc, &rewrites);
        assert!(out.contains("<a href=\"#\" style=\"color: #dd0000\">t</a>"));
    }

    #[test]
    fn merge_style_joins_existing_declarations() {
        let doc =
            Html::parse_document("<html><body><a style=\"font-weight: bold;\">t</a></body></html>");
        let mut rewrites = Rewrites::default();
        rewrites.merge_style(first_id(&doc, "a"), "color: #dd0000");
        let out = serialize_document(&doc, &rewrites);
        assert!(out.contains("style=\"font-weight: bold; color: #dd0000\""));
    }

    #[test]
    fn insert_before_emits_block_ahead_of_node() {
        let doc = Html::parse_document("<html><body><pre>code</pre></body></html>");
        let mut rewrites = Rewrites::default();
        rewrites.insert_before(first_id(&doc, "pre"), "<div class=\"copy-btn\"></div>".to_string());
        let out = serialize_document(&doc, &rewrites);
        assert!(out.contains("<div class=\"copy-btn\"></div><pre>code</pre>"));
    }

    #[test]
    fn set_inner_html_replaces_children() {
        let doc = Html::parse_document("<html><body><div id=\"c\"><span>old</span></div></body></html>");
        let mut rewrites = Rewrites::default();
        rewrites.set_inner_html(first_id(&doc, "#c"), "<ul><li>new</li></ul>".to_string());
        let out = serialize_document(&doc, &rewrites);
        assert!(out.contains("<div id=\"c\"><ul><li>new</li></ul></div>"));
        assert!(!out.contains("old"));
    }

    #[test]
    fn text_is_escaped_outside_raw_text_elements() {
        let doc = Html::parse_document("<html><body><p>a &amp; b</p><script>if (a < b) {}</script></body></html>");
        let out = serialize_document(&doc, &Rewrites::default());
        assert!(out.contains("<p>a &amp; b</p>"));
        assert!(out.contains("if (a < b) {}"));
    }

    #[test]
    fn merge_decls_trims_trailing_semicolon() {
        assert_eq!(merge_decls("a: b; ", "c: d"), "a: b; c: d");
        assert_eq!(merge_decls("", "c: d"), "c: d");
    }
}
