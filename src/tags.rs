//! The HTML tag catalogue: factory functions producing [`Node`]s.
//!
//! Every function here is a thin wrapper over [`Node::element`] /
//! [`Node::void`], sometimes with a fixed attribute applied. Children accept
//! anything convertible to a node, so `div("text")` and
//! `div(nodes![a, b])` both work.

use compact_str::format_compact;

use crate::node::Node;

/// The `scope` attribute on table header cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Row,
    Column,
    RowGroup,
    ColumnGroup,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Row => "row",
            Scope::Column => "column",
            Scope::RowGroup => "rowgroup",
            Scope::ColumnGroup => "colgroup",
        }
    }
}

/// The `align` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
    Justified,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
            Alignment::Justified => "justified",
        }
    }
}

/// Heading weight for [`heading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingWeight {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingWeight::H1 => "h1",
            HeadingWeight::H2 => "h2",
            HeadingWeight::H3 => "h3",
            HeadingWeight::H4 => "h4",
            HeadingWeight::H5 => "h5",
            HeadingWeight::H6 => "h6",
        }
    }
}

/// The `type` attribute on [`button`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Define a container tag factory.
macro_rules! define_tag {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        pub fn $name(child: impl Into<Node>) -> Node {
            Node::element($tag, child)
        }
    };
}

/// Define a childless (self-closing) tag factory.
macro_rules! define_void_tag {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        pub fn $name() -> Node {
            Node::void($tag)
        }
    };
}

// ============================================================================
// Document structure
// ============================================================================

define_tag!(
    /// The `<html>` root element. Rendering a tree rooted here also emits
    /// the `<!DOCTYPE html>` line.
    html, "html"
);

define_tag!(
    /// The `<head>` element.
    head, "head"
);

define_tag!(
    /// The `<body>` element.
    body, "body"
);

/// The `<title>` element with its text content.
pub fn title(text: impl Into<Node>) -> Node {
    Node::element("title", text)
}

// ============================================================================
// Content sectioning
// ============================================================================

define_tag!(
    /// The `<address>` element: contact information for its enclosing
    /// document or article.
    address, "address"
);
define_tag!(article, "article");
define_tag!(div, "div");
define_tag!(footer, "footer");
define_tag!(header, "header");
define_tag!(
    /// The `<main>` element: the dominant content of the document body.
    main, "main"
);
define_tag!(
    /// The `<nav>` element.
    navigation, "nav"
);
define_tag!(section, "section");
define_tag!(span, "span");

/// A heading element, `<h1>` through `<h6>`.
pub fn heading(weight: HeadingWeight, child: impl Into<Node>) -> Node {
    Node::element(weight.as_str(), child)
}

// ============================================================================
// Text content
// ============================================================================

/// The `<abbr>` element; `expansion` becomes the `title` attribute.
pub fn abbreviation(expansion: &str, child: impl Into<Node>) -> Node {
    Node::element("abbr", child).attr("title", expansion)
}

/// The `<blockquote>` element; `url` cites the source of the quotation.
pub fn blockquote(url: &str, child: impl Into<Node>) -> Node {
    Node::element("blockquote", child).attr("cite", url)
}

define_tag!(paragraph, "p");
define_tag!(preformatted, "pre");
define_tag!(
    /// The `<ul>` element. Children are usually [`list_item`]s.
    list, "ul"
);
define_tag!(
    /// The `<ol>` element.
    ordered_list, "ol"
);
define_tag!(list_item, "li");
define_tag!(
    /// The `<dl>` element (description list).
    description_list, "dl"
);
define_tag!(
    /// The `<dt>` element (term in a description list).
    describe, "dt"
);
define_tag!(
    /// The `<dd>` element (description of the preceding term).
    defining, "dd"
);
define_tag!(figure, "figure");
define_tag!(figure_caption, "figcaption");

// ============================================================================
// Inline text semantics
// ============================================================================

define_tag!(bold, "b");
define_tag!(cite, "cite");
define_tag!(code, "code");
define_tag!(
    /// The `<dfn>` element: the defining instance of a term.
    define, "dfn"
);
define_tag!(delete, "del");
define_tag!(emphasis, "em");
define_tag!(insert, "ins");
define_tag!(italic, "i");
define_tag!(keyboard, "kbd");
define_tag!(mark, "mark");
define_tag!(
    /// The `<ruby>` annotation container.
    ruby, "ruby"
);
define_tag!(ruby_parenthesis, "rp");
define_tag!(ruby_pronunciation, "rt");
define_tag!(sample, "samp");
define_tag!(small, "small");
define_tag!(strong, "strong");
define_tag!(
    /// The `<sub>` element: text lower than the surrounding line.
    subscript, "sub"
);
define_tag!(
    /// The `<sup>` element: text higher than the surrounding line.
    superscript, "sup"
);
define_tag!(time, "time");
define_tag!(underline, "u");
define_tag!(variable, "var");

/// The `<data>` element tying content to a machine-readable value.
pub fn data(value: &str, child: impl Into<Node>) -> Node {
    Node::element("data", child).attr("value", value)
}

/// A hyperlink with a plain-text label, collapsed onto one line:
/// `<a href="url">label</a>`.
pub fn link(url: &str, label: &str) -> Node {
    Node::inline("a", label).attr("href", url)
}

/// A hyperlink with arbitrary child content, rendered as a block.
pub fn link_with(url: &str, child: impl Into<Node>) -> Node {
    Node::element("a", child).attr("href", url)
}

define_void_tag!(
    /// The `<br/>` line break.
    line_break, "br"
);
define_void_tag!(
    /// The `<wbr/>` word-break opportunity.
    word_break, "wbr"
);

// ============================================================================
// Tables
// ============================================================================

define_tag!(table, "table");
define_tag!(caption, "caption");
define_tag!(table_head, "thead");
define_tag!(table_body, "tbody");
define_tag!(table_foot, "tfoot");
define_tag!(table_row, "tr");
define_tag!(table_data, "td");
define_tag!(
    /// The `<th>` header cell; combine with [`Node::scope`].
    table_head_data, "th"
);

// ============================================================================
// Forms
// ============================================================================

define_tag!(form, "form");
define_tag!(fieldset, "fieldset");
define_tag!(legend, "legend");
define_tag!(select, "select");
define_tag!(option, "option");
define_tag!(option_group, "optgroup");
define_tag!(textarea, "textarea");
define_tag!(output, "output");
define_tag!(progress, "progress");

/// The `<label>` element bound to the control with the given id.
pub fn label(element_id: &str, child: impl Into<Node>) -> Node {
    Node::element("label", child).attr("for", element_id)
}

/// The `<button>` element with an explicit type.
pub fn button(button_type: ButtonType, child: impl Into<Node>) -> Node {
    Node::element("button", child).attr("type", button_type.as_str())
}

define_void_tag!(
    /// The `<input/>` element. Callers attach `type` and friends via
    /// [`Node::attr`].
    input, "input"
);

/// The `<meter>` element with its current value.
pub fn meter(value: f64, child: impl Into<Node>) -> Node {
    Node::element("meter", child).attr("value", format_compact!("{value}"))
}

// ============================================================================
// Interactive elements
// ============================================================================

/// The `<details>` disclosure widget; `open` shows it expanded.
pub fn details(open: bool, child: impl Into<Node>) -> Node {
    let node = Node::element("details", child);
    if open { node.flag("open") } else { node }
}

define_tag!(summary, "summary");

/// The `<dialog>` element; `open` makes it active.
pub fn dialog(open: bool, child: impl Into<Node>) -> Node {
    let node = Node::element("dialog", child);
    if open { node.flag("open") } else { node }
}

// ============================================================================
// Media and embedded content
// ============================================================================

/// The `<img/>` element for the given source URL.
pub fn image(url: &str) -> Node {
    Node::void("img").attr("src", url)
}

define_tag!(picture, "picture");
define_tag!(video, "video");
define_tag!(object, "object");

/// The `<embed/>` element for the given source URL.
pub fn embed(url: &str) -> Node {
    Node::void("embed").attr("src", url)
}

/// The `<iframe>` element for the given source URL.
pub fn iframe(url: &str, child: impl Into<Node>) -> Node {
    Node::element("iframe", child).attr("src", url)
}

/// The `<map>` element grouping clickable [`area`]s.
pub fn map(name: &str, child: impl Into<Node>) -> Node {
    Node::element("map", child).attr("name", name)
}

/// A default `<area/>` covering the whole image.
pub fn area(url: &str) -> Node {
    Node::void("area").attr("href", url)
}

/// The `<track/>` element for the given source URL.
pub fn track(url: &str) -> Node {
    Node::void("track").attr("src", url)
}

/// A `<source/>` inside `<audio>` or `<video>`.
pub fn source_media(url: &str) -> Node {
    Node::void("source").attr("src", url)
}

/// A `<source/>` inside `<picture>`.
pub fn source_picture(url: &str) -> Node {
    Node::void("source").attr("srcset", url)
}

// ============================================================================
// Metadata and scripting
// ============================================================================

define_void_tag!(meta, "meta");

/// A `<meta content="..."/>` element.
pub fn meta_content(content: &str) -> Node {
    Node::void("meta").attr("content", content)
}

/// The `<base/>` element setting the document base URL.
pub fn base(url: &str) -> Node {
    Node::void("base").attr("href", url)
}

/// A `<link rel="stylesheet"/>` element for an external stylesheet.
pub fn stylesheet(url: &str) -> Node {
    Node::void("link").attr("href", url).attr("rel", "stylesheet")
}

/// An inline `<script>` element. The body is written verbatim, never
/// escaped.
pub fn script(code: impl Into<Node>) -> Node {
    Node::element("script", code)
}

/// A `<script src="..."></script>` element referencing an external file.
pub fn script_src(url: &str) -> Node {
    Node::element("script", "").attr("src", url)
}

/// An inline `<style>` element. The body is written verbatim, never escaped.
pub fn style(code: impl Into<Node>) -> Node {
    Node::element("style", code)
}

define_tag!(no_script, "noscript");
define_tag!(template, "template");

/// An element with a caller-chosen tag name.
pub fn custom(tag: &str, child: impl Into<Node>) -> Node {
    Node::element(tag, child)
}

/// A childless element with a caller-chosen tag name.
pub fn custom_void(tag: &str) -> Node {
    Node::void(tag)
}

// =============================================================================
// Tests
// =============================================================================
