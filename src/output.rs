//! The front door: selecting a destination and pushing a tree through it.
//!
//! A [`Renderer`] binds a [`RenderStream`] to one of three destinations and
//! performs exactly one synchronous write pass. Destination-open failures
//! abort the render before anything is written; file creation happens up
//! front, so either the created file receives the whole document or nothing
//! exists at all.

use std::fmt;
use std::io::{self, BufWriter, Write as IoWrite};

use compact_str::CompactString;

use crate::error::Result;
use crate::node::Node;
use crate::render::RenderStream;
use crate::tracing_macros::debug;

/// Where rendered markup goes.
pub enum OutputLocation<'a> {
    /// Write to the process standard output.
    Stdout,
    /// Create/truncate `<path><name>.html` and write there.
    File { name: CompactString, path: CompactString },
    /// Write to a caller-supplied text sink, such as a `&mut String`.
    Custom(&'a mut dyn fmt::Write),
}

impl Default for OutputLocation<'_> {
    fn default() -> Self {
        OutputLocation::Stdout
    }
}

/// Renders a document and puts the content where you want it to go.
///
/// ```
/// use scrawl::{Renderer, OutputLocation};
/// use scrawl::tags::{body, div, html};
///
/// let page = html(body(div("Page body")));
///
/// let mut rendered = String::new();
/// Renderer {
///     output: OutputLocation::Custom(&mut rendered),
/// }
/// .render(&page)
/// .unwrap();
/// assert!(rendered.starts_with("<!DOCTYPE html>"));
/// ```
#[derive(Default)]
pub struct Renderer<'a> {
    /// Destination for render output; defaults to standard output.
    pub output: OutputLocation<'a>,
}

impl<'a> Renderer<'a> {
    /// Create a renderer writing to standard output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer writing to `<path><name>.html`.
    pub fn to_file(name: impl Into<CompactString>, path: impl Into<CompactString>) -> Self {
        Self {
            output: OutputLocation::File {
                name: name.into(),
                path: path.into(),
            },
        }
    }

    /// Create a renderer writing to a caller-supplied sink.
    pub fn to_writer(out: &'a mut dyn fmt::Write) -> Self {
        Self {
            output: OutputLocation::Custom(out),
        }
    }

    /// Render the node tree to the configured destination.
    ///
    /// One write pass, no retries. Fails with [`Error::NoFile`] if a file
    /// destination cannot be created, and [`Error::Io`] if the final flush
    /// fails; rendering itself is total.
    ///
    /// [`Error::NoFile`]: crate::Error::NoFile
    /// [`Error::Io`]: crate::Error::Io
    pub fn render(&mut self, content: &Node) -> Result<()> {
        match &mut self.output {
            OutputLocation::Stdout => {
                debug!("rendering to stdout");
                let stdout = io::stdout();
                let mut sink = IoSink::new(stdout.lock());
                RenderStream::new(&mut sink, content.tag()).render(content);
                sink.flush()?;
            }
            OutputLocation::File { name, path } => {
                debug!("rendering to {path}{name}.html");
                let file = crate::files::create(name, path)?;
                let mut sink = IoSink::new(BufWriter::new(file));
                RenderStream::new(&mut sink, content.tag()).render(content);
                sink.flush()?;
            }
            OutputLocation::Custom(out) => {
                debug!("rendering to custom sink");
                RenderStream::new(out, content.tag()).render(content);
            }
        }
        Ok(())
    }
}

/// Render a node tree to an owned string.
pub fn render_to_string(content: &Node) -> String {
    let mut out = String::new();
    RenderStream::new(&mut out, content.tag()).render(content);
    out
}

/// Adapts a byte sink to the text interface the render stream writes to.
///
/// Mid-pass write errors are deferred rather than propagated through the
/// stream; the final [`flush`](IoSink::flush) reports the first one.
struct IoSink<W: IoWrite> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: IoWrite> IoSink<W> {
    fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.inner.flush()
    }
}

impl<W: IoWrite> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        match self.inner.write_all(s.as_bytes()) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.error = Some(error);
                Err(fmt::Error)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
