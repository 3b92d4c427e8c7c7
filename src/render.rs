//! The render stream: serializer state for one render pass.
//!
//! A [`RenderStream`] owns one output sink and the current indentation depth,
//! and performs all text-level work: raw writes, double-quoted attribute
//! values, and entity-aware HTML escaping. Nodes drive the traversal; the
//! stream never inspects the tree.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::node::Node;

/// Matches pre-existing character references: `&word;`, `&#123;`, `&#x1F;`.
///
/// Matched spans pass through [`RenderStream::write_escaped`] unchanged, so
/// text like `60&deg;F` keeps its entity instead of double-escaping the
/// ampersand.
static ENTITY_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&\w+;|&#[0-9]+;|&#[xX][a-fA-F0-9]+;").unwrap());

/// Number of spaces added per nesting level.
const INDENT_STEP: usize = 2;

/// A helper for rendering formatted markup to a text sink.
///
/// Sink errors are ignored at this layer: rendering is total over any
/// well-formed tree, and destination failures surface when the driver opens
/// the destination, not during the write pass.
pub struct RenderStream<'a, W: Write> {
    out: &'a mut W,
    indentation: usize,
}

impl<'a, W: Write> RenderStream<'a, W> {
    /// Create a stream bound to `out`, rendering a tree rooted at `root_tag`.
    ///
    /// When the root tag is exactly `html`, the stream immediately writes a
    /// `<!DOCTYPE html>` line before any node rendering begins.
    pub fn new(out: &'a mut W, root_tag: Option<&str>) -> Self {
        let mut stream = Self {
            out,
            indentation: 0,
        };
        if root_tag == Some("html") {
            stream.write("<!DOCTYPE html>\n");
        }
        stream
    }

    /// Append raw text to the sink verbatim.
    pub fn write(&mut self, text: &str) {
        let _ = self.out.write_str(text);
    }

    /// Write the current indentation as single spaces.
    pub fn write_indent(&mut self) {
        for _ in 0..self.indentation {
            let _ = self.out.write_char(' ');
        }
    }

    /// Write `value` wrapped in double quotes, with no internal escaping.
    ///
    /// Attribute values render verbatim; callers pre-sanitize if needed.
    pub fn write_double_quoted(&mut self, value: &str) {
        self.write("\"");
        self.write(value);
        self.write("\"");
    }

    /// Write text with HTML escaping, letting existing entities through.
    ///
    /// Spans matching [`ENTITY_REFERENCE`] are written unchanged; elsewhere
    /// `"`, `&`, `<`, `>` become their named references.
    pub fn write_escaped(&mut self, text: &str) {
        let mut cursor = 0;
        for entity in ENTITY_REFERENCE.find_iter(text) {
            self.write_escaping_specials(&text[cursor..entity.start()]);
            self.write(entity.as_str());
            cursor = entity.end();
        }
        self.write_escaping_specials(&text[cursor..]);
    }

    fn write_escaping_specials(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '"' => self.write("&quot;"),
                '&' => self.write("&amp;"),
                '<' => self.write("&lt;"),
                '>' => self.write("&gt;"),
                _ => {
                    let _ = self.out.write_char(c);
                }
            }
        }
    }

    /// Run `f` with indentation increased by one level.
    pub fn with_indent(&mut self, f: impl FnOnce(&mut Self)) {
        self.indentation += INDENT_STEP;
        f(self);
        self.indentation -= INDENT_STEP;
    }

    /// Render the node tree to the receiver's sink.
    pub fn render(&mut self, content: &Node) {
        content.render_into(self, &[]);
    }
}

// =============================================================================
// Tests
// =============================================================================
