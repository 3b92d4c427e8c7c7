//! Node types for markup generation.
//!
//! A markup document is an immutable tree of [`Node`]s, built once per render
//! and walked depth-first by the [`RenderStream`]. Four shapes exist:
//!
//! - [`Node::Text`]: a leaf that renders as escaped, indented lines
//! - [`Node::Element`]: a single tag with an optional child
//! - [`Node::Sequence`]: zero or more siblings with no wrapping markup
//! - [`Node::Attributed`]: a decorator that pins one attribute onto the
//!   nearest enclosing element
//!
//! Plain strings and numbers convert into text leaves via `From`, and
//! `Option<impl Into<Node>>` converts into either the node or an empty
//! sequence, so ordinary Rust expressions compose directly.

use std::fmt::Write;

use compact_str::{CompactString, ToCompactString, format_compact};
use smallvec::SmallVec;

use crate::render::RenderStream;
use crate::tags::{Alignment, Scope};

/// One HTML/SVG attribute: a key with an optional value.
///
/// Attributes are positional. Applying the same key twice renders it twice;
/// nothing deduplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name, e.g. `href`.
    pub key: CompactString,
    /// The attribute value. `None` renders as a bare key, as in
    /// `<input disabled/>`.
    pub value: Option<CompactString>,
}

impl Attribute {
    /// Create a key/value attribute.
    pub fn new(key: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Create a valueless attribute such as `open` or `controls`.
    pub fn bare(key: impl Into<CompactString>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// A single markup element with an optional child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The tag name, written verbatim.
    pub tag: CompactString,
    /// The element content. `None` renders as a self-closing tag.
    pub child: Option<Box<Node>>,
    /// When true and the child is text, content and closing tag stay on the
    /// opening line: `<a href="...">label</a>`.
    pub inline: bool,
}

/// Decorator wrapping a node with one attribute.
///
/// Attributes are collected while walking the tree and flushed onto the next
/// element encountered; see [`Node::attr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributed {
    pub attribute: Attribute,
    pub child: Box<Node>,
}

/// The polymorphic unit of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Escaped text content, split on embedded newlines.
    Text(CompactString),
    /// A tagged element.
    Element(Element),
    /// Zero or more siblings rendered in order. Empty renders nothing.
    Sequence(Vec<Node>),
    /// An attribute-wrapping decorator.
    Attributed(Attributed),
}

/// Elements whose text bodies are written verbatim, never escaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag)
}

impl Node {
    /// Create an element with a child.
    pub fn element(tag: impl Into<CompactString>, child: impl Into<Node>) -> Node {
        Node::Element(Element {
            tag: tag.into(),
            child: Some(Box::new(child.into())),
            inline: false,
        })
    }

    /// Create a childless element, rendered self-closing: `<br/>`.
    pub fn void(tag: impl Into<CompactString>) -> Node {
        Node::Element(Element {
            tag: tag.into(),
            child: None,
            inline: false,
        })
    }

    /// Create an element whose text child renders on the opening line.
    pub fn inline(tag: impl Into<CompactString>, text: impl Into<CompactString>) -> Node {
        Node::Element(Element {
            tag: tag.into(),
            child: Some(Box::new(Node::Text(text.into()))),
            inline: true,
        })
    }

    /// Create a text leaf.
    pub fn text(content: impl Into<CompactString>) -> Node {
        Node::Text(content.into())
    }

    /// The empty sequence; renders nothing.
    pub fn empty() -> Node {
        Node::Sequence(Vec::new())
    }

    /// The tag at the root of this node, if any.
    ///
    /// Propagates through [`Attributed`] wrappers; text and sequences have
    /// no tag. The driver uses this to decide whether to emit a DOCTYPE.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element(el) => Some(&el.tag),
            Node::Attributed(a) => a.child.tag(),
            Node::Text(_) | Node::Sequence(_) => None,
        }
    }

    /// Wrap this node with a key/value attribute.
    ///
    /// Chained calls accumulate: the first `attr` call ends up first in the
    /// rendered tag. The attribute attaches to the nearest element in this
    /// subtree; it never crosses into that element's children.
    pub fn attr(self, key: impl Into<CompactString>, value: impl Into<CompactString>) -> Node {
        Node::Attributed(Attributed {
            attribute: Attribute::new(key, value),
            child: Box::new(self),
        })
    }

    /// Wrap this node with a valueless attribute, as in `<input disabled/>`.
    pub fn flag(self, key: impl Into<CompactString>) -> Node {
        Node::Attributed(Attributed {
            attribute: Attribute::bare(key),
            child: Box::new(self),
        })
    }

    /// Shorthand for `attr("class", value)`.
    pub fn class(self, value: impl Into<CompactString>) -> Node {
        self.attr("class", value)
    }

    /// Shorthand for `attr("id", value)`.
    pub fn id(self, value: impl Into<CompactString>) -> Node {
        self.attr("id", value)
    }

    /// Inline CSS style from key/value pairs: `style="color:blue;"`.
    pub fn style(self, properties: &[(&str, &str)]) -> Node {
        let mut css = CompactString::default();
        for (key, value) in properties {
            let _ = write!(css, "{key}:{value};");
        }
        self.attr("style", css)
    }

    /// Shorthand for `attr("align", ...)`.
    pub fn alignment(self, value: Alignment) -> Node {
        self.attr("align", value.as_str())
    }

    /// Shorthand for `attr("bgcolor", hex_code)`.
    pub fn background_color(self, hex_code: impl Into<CompactString>) -> Node {
        self.attr("bgcolor", hex_code)
    }

    /// Shorthand for `attr("color", hex_code)`.
    pub fn color(self, hex_code: impl Into<CompactString>) -> Node {
        self.attr("color", hex_code)
    }

    /// Shorthand for `attr("colspan", ...)` on table cells.
    pub fn column_span(self, value: usize) -> Node {
        self.attr("colspan", format_compact!("{value}"))
    }

    /// Shorthand for `attr("rowspan", ...)` on table cells.
    pub fn row_span(self, value: usize) -> Node {
        self.attr("rowspan", format_compact!("{value}"))
    }

    /// Shorthand for `attr("scope", ...)` on table header cells.
    pub fn scope(self, value: Scope) -> Node {
        self.attr("scope", value.as_str())
    }

    /// Shorthand for `attr("type", mime)` on links, scripts, and inputs.
    pub fn mime_type(self, mime: impl Into<CompactString>) -> Node {
        self.attr("type", mime)
    }

    /// Render this node into the stream with the given inherited attributes.
    ///
    /// Rendering is total: any well-formed tree serializes without error.
    pub(crate) fn render_into<W: Write>(
        &self,
        stream: &mut RenderStream<'_, W>,
        attributes: &[&Attribute],
    ) {
        match self {
            Node::Text(content) => {
                // Text has no attributes of its own; inherited ones wait for
                // the next element.
                for line in content.split('\n').filter(|line| !line.is_empty()) {
                    stream.write_indent();
                    stream.write_escaped(line);
                    stream.write("\n");
                }
            }
            Node::Sequence(children) => {
                // Siblings share the inherited list but not each other's state.
                for child in children {
                    child.render_into(stream, attributes);
                }
            }
            Node::Attributed(attributed) => {
                // The innermost wrapper is the first `attr` call, so pushing
                // our attribute ahead of the inherited ones renders
                // first-applied-first.
                let mut full: SmallVec<[&Attribute; 8]> =
                    SmallVec::with_capacity(attributes.len() + 1);
                full.push(&attributed.attribute);
                full.extend_from_slice(attributes);
                attributed.child.render_into(stream, &full);
            }
            Node::Element(element) => element.render_into(stream, attributes),
        }
    }
}

impl Element {
    fn render_into<W: Write>(&self, stream: &mut RenderStream<'_, W>, attributes: &[&Attribute]) {
        // Opening of the tag, e.g. `<div`.
        stream.write_indent();
        stream.write("<");
        stream.write(&self.tag);

        for attribute in attributes {
            stream.write(" ");
            stream.write(&attribute.key);

            // Valueless attributes use presence alone, as in `<input disabled>`.
            if let Some(value) = &attribute.value {
                stream.write("=");
                stream.write_double_quoted(value);
            }
        }

        // No child: close the tag without a separate closing tag.
        let Some(child) = &self.child else {
            stream.write("/>\n");
            return;
        };

        stream.write(">");

        if self.inline {
            // Only a literal text child collapses onto the opening line; a
            // nested element here renders nothing.
            if let Node::Text(content) = child.as_ref() {
                stream.write(content);
            }
        } else if let (true, Node::Text(content)) =
            (is_raw_text_element(&self.tag), child.as_ref())
        {
            // Script and style bodies pass through unescaped.
            stream.write("\n");
            stream.with_indent(|stream| {
                for line in content.split('\n').filter(|line| !line.is_empty()) {
                    stream.write_indent();
                    stream.write(line);
                    stream.write("\n");
                }
            });
            stream.write_indent();
        } else {
            stream.write("\n");
            stream.with_indent(|stream| {
                // Inherited attributes stop here; children start fresh.
                child.render_into(stream, &[]);
            });
            stream.write_indent();
        }

        stream.write("</");
        stream.write(&self.tag);
        stream.write(">\n");
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(CompactString::from(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(CompactString::from(value))
    }
}

impl From<CompactString> for Node {
    fn from(value: CompactString) -> Self {
        Node::Text(value)
    }
}

/// `None` renders to nothing, mirroring an `if` without an `else`.
impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(node) => node.into(),
            None => Node::empty(),
        }
    }
}

macro_rules! impl_from_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Text(value.to_compact_string())
                }
            }
        )*
    };
}

impl_from_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::render_to_string;

    #[test]
    fn test_tag_propagates_through_attributed() {
        let node = Node::element("div", "hi").class("box").id("main");
        assert_eq!(node.tag(), Some("div"));

        assert_eq!(Node::text("plain").tag(), None);
        assert_eq!(Node::empty().tag(), None);
    }

    #[test]
    fn test_attribute_order_first_applied_first() {
        let node = Node::void("img").attr("a", "1").attr("b", "2");
        assert_eq!(render_to_string(&node), "<img a=\"1\" b=\"2\"/>\n");
    }

    #[test]
    fn test_void_element_with_attributes_never_gets_closing_tag() {
        let node = Node::void("img").attr("src", "x.png");
        assert_eq!(render_to_string(&node), "<img src=\"x.png\"/>\n");
    }

    #[test]
    fn test_bare_attribute() {
        let node = Node::void("input").flag("disabled");
        assert_eq!(render_to_string(&node), "<input disabled/>\n");
    }

    #[test]
    fn test_attributes_do_not_cross_element_boundary() {
        let node = Node::element("div", Node::element("span", "inner")).class("outer");
        let html = render_to_string(&node);
        assert!(html.contains("<div class=\"outer\">"));
        assert!(html.contains("<span>"));
        assert!(!html.contains("<span class"));
    }

    #[test]
    fn test_duplicate_attributes_both_render() {
        let node = Node::void("img").attr("data-x", "1").attr("data-x", "2");
        assert_eq!(
            render_to_string(&node),
            "<img data-x=\"1\" data-x=\"2\"/>\n"
        );
    }

    #[test]
    fn test_inline_element_single_line() {
        let node = Node::inline("a", "google").attr("href", "https://x.com");
        assert_eq!(
            render_to_string(&node),
            "<a href=\"https://x.com\">google</a>\n"
        );
    }

    #[test]
    fn test_inline_with_non_text_child_renders_empty() {
        let node = Node::Element(Element {
            tag: "q".into(),
            child: Some(Box::new(Node::element("span", "nope"))),
            inline: true,
        });
        assert_eq!(render_to_string(&node), "<q></q>\n");
    }

    #[test]
    fn test_text_splits_lines_and_indents_each() {
        let node = Node::element("p", "one\ntwo");
        assert_eq!(render_to_string(&node), "<p>\n  one\n  two\n</p>\n");
    }

    #[test]
    fn test_blank_lines_in_text_are_dropped() {
        let node = Node::element("p", "a\n\nb");
        assert_eq!(render_to_string(&node), "<p>\n  a\n  b\n</p>\n");
    }

    #[test]
    fn test_raw_text_element_not_escaped() {
        let node = Node::element("script", "if (a < b && c > d) {}");
        let html = render_to_string(&node);
        assert!(html.contains("if (a < b && c > d) {}"));
        assert!(!html.contains("&lt;"));
    }

    #[test]
    fn test_style_helper_joins_properties() {
        let node = Node::element("div", "x").style(&[("color", "blue"), ("margin", "0")]);
        let html = render_to_string(&node);
        assert!(html.contains("style=\"color:blue;margin:0;\""));
    }

    #[test]
    fn test_numeric_conversions() {
        let node = Node::element("td", 42);
        assert_eq!(render_to_string(&node), "<td>\n  42\n</td>\n");
    }

    #[test]
    fn test_option_conversion() {
        let none: Option<&str> = None;
        assert_eq!(Node::from(none), Node::empty());
        assert_eq!(Node::from(Some("hi")), Node::text("hi"));
    }
}
