//! Mutable HTML document tree
//!
//! Thin layer over kuchiki that exposes the handful of tree operations the
//! inliners need: snapshot selection, attribute access, replace-in-place and
//! text replacement, plus parse and serialize.

use anyhow::{Context, Result, anyhow};
use kuchiki::traits::TendrilSink;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

/// Handle to an element node inside a [`Document`]
pub type ElementRef = NodeDataRef<ElementData>;

/// A parsed page, owned for the duration of one mirror run
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse HTML text into a document tree
    ///
    /// html5ever never rejects input, so parsing is infallible.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchiki::parse_html().one(html),
        }
    }

    /// Collect every element matching `selector`
    ///
    /// Matches are gathered into a `Vec` before the caller mutates anything,
    /// since replacing or detaching nodes invalidates a live iterator.
    pub fn select(&self, selector: &str) -> Result<Vec<ElementRef>> {
        let matches = self
            .root
            .select(selector)
            .map_err(|()| anyhow!("Invalid selector '{selector}'"))?;
        Ok(matches.collect())
    }

    /// Render the tree back to HTML
    pub fn serialize(&self) -> Result<String> {
        let mut html_output = Vec::new();
        self.root
            .serialize(&mut html_output)
            .context("Failed to serialize HTML document")?;

        String::from_utf8(html_output).context("Failed to convert HTML bytes to UTF-8 string")
    }
}

/// Owned copy of an attribute value
#[must_use]
pub fn attr(element: &ElementRef, name: &str) -> Option<String> {
    element
        .attributes
        .borrow()
        .get(name)
        .map(ToString::to_string)
}

pub fn set_attr(element: &ElementRef, name: &str, value: String) {
    element.attributes.borrow_mut().insert(name, value);
}

/// Replace `old` with a new attribute-less element `<tag>text</tag>`
///
/// The new element is inserted at the old one's position in its parent,
/// then the old element is detached. Returns the inserted node.
pub fn replace_with_text_element(old: &ElementRef, tag: &str, text: &str) -> NodeRef {
    let mut name = old.name.clone();
    name.local = tag.into();

    let replacement = NodeRef::new_element(name, std::iter::empty());
    replacement.append(NodeRef::new_text(text));

    let node = old.as_node();
    node.insert_before(replacement.clone());
    node.detach();

    replacement
}

/// Replace all children of `node` with a single text node
pub fn set_text_content(node: &NodeRef, text: &str) {
    let children: Vec<NodeRef> = node.children().collect();
    for child in children {
        child.detach();
    }
    node.append(NodeRef::new_text(text));
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<link rel="stylesheet" href="/styles.css">
<title>Test</title>
</head>
<body>
<a href="https://example.com">Link 1</a>
<img src="/image.png">
<a href="https://example2.com">Link 2</a>
</body>
</html>"#;

    #[test]
    fn test_serialize_is_stable_after_one_round_trip() {
        let first = Document::parse(PAGE).serialize().unwrap();
        let second = Document::parse(&first).serialize().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_select_snapshot_survives_detach() {
        let document = Document::parse("<p>a</p><p>b</p><p>c</p>");
        let paragraphs = document.select("p").unwrap();
        assert_eq!(paragraphs.len(), 3);

        for p in &paragraphs {
            p.as_node().detach();
        }

        assert!(document.select("p").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_selector_is_error() {
        let document = Document::parse(PAGE);
        assert!(document.select("link[").is_err());
    }

    #[test]
    fn test_replace_keeps_position_and_siblings() {
        let document = Document::parse(PAGE);
        let link = document.select("link").unwrap().remove(0);

        replace_with_text_element(&link, "style", "body { color: red; }");

        let html = document.serialize().unwrap();
        assert!(!html.contains("<link"));
        assert!(html.contains("<style>body { color: red; }</style>"));
        let style_at = html.find("<style>").unwrap();
        let title_at = html.find("<title>").unwrap();
        assert!(style_at < title_at, "replacement should sit where the link was");
        assert!(html.contains("<a href=\"https://example.com\">"));
        assert!(html.contains("<a href=\"https://example2.com\">"));
    }

    #[test]
    fn test_replacement_has_no_attributes() {
        let document = Document::parse(r#"<script src="app.js" defer></script>"#);
        let script = document.select("script").unwrap().remove(0);

        replace_with_text_element(&script, "script", "let a = 1 < 2;");

        let html = document.serialize().unwrap();
        assert!(html.contains("<script>let a = 1 < 2;</script>"));
    }

    #[test]
    fn test_attr_round_trip() {
        let document = Document::parse(PAGE);
        let img = document.select("img").unwrap().remove(0);

        assert_eq!(attr(&img, "src").as_deref(), Some("/image.png"));
        assert_eq!(attr(&img, "alt"), None);

        set_attr(&img, "src", "data:image/png;base64,AAAA".to_string());
        assert!(
            document
                .serialize()
                .unwrap()
                .contains(r#"<img src="data:image/png;base64,AAAA">"#)
        );
    }

    #[test]
    fn test_set_text_content_replaces_children() {
        let document = Document::parse("<style>a{}</style>");
        let style = document.select("style").unwrap().remove(0);

        set_text_content(style.as_node(), "b{}");

        assert_eq!(style.as_node().text_contents(), "b{}");
    }
}
