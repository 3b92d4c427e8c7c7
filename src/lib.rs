//! Declarative HTML and SVG generation from composable expressions.
//!
//! scrawl builds an immutable tree of typed [`Node`]s and renders it to
//! indented, escaped markup text:
//!
//! - **Node types**: text leaves, elements, sibling sequences, and
//!   attribute decorators, with `From` conversions for plain strings and
//!   numbers
//! - **Rendering**: a recursive serializer with 2-space indentation,
//!   entity-aware HTML escaping, and `<!DOCTYPE html>` emission for
//!   `html`-rooted trees
//! - **Composition**: the [`nodes!`] macro and [`sequence`]/[`for_each`]
//!   combinators flatten sibling expressions into a single node
//! - **Output**: standard output, a named `.html` file, or any
//!   caller-supplied text sink
//!
//! # Example
//!
//! ```rust
//! use scrawl::nodes;
//! use scrawl::tags::{body, div, head, html, title};
//!
//! let page = html(nodes![
//!     head(title("Page title")),
//!     body(div("Page body").class("container")),
//! ]);
//!
//! let rendered = scrawl::render_to_string(&page);
//! assert_eq!(
//!     rendered,
//!     "<!DOCTYPE html>\n\
//!      <html>\n\
//!      \x20 <head>\n\
//!      \x20   <title>\n\
//!      \x20     Page title\n\
//!      \x20   </title>\n\
//!      \x20 </head>\n\
//!      \x20 <body>\n\
//!      \x20   <div class=\"container\">\n\
//!      \x20     Page body\n\
//!      \x20   </div>\n\
//!      \x20 </body>\n\
//!      </html>\n"
//! );
//! ```

mod tracing_macros;

pub mod compose;
pub mod error;
pub mod files;
pub mod node;
pub mod output;
pub mod render;
pub mod svg;
pub mod tags;

// Re-export the core types at the crate root for convenience
pub use compose::{for_each, sequence};
pub use error::{Error, Result};
pub use node::{Attribute, Attributed, Element, Node};
pub use output::{OutputLocation, Renderer, render_to_string};
pub use render::RenderStream;
