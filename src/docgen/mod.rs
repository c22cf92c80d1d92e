//! Property reference generation.
//!
//! ```text
//! Catalog  →  DocGenerator  →  DocumentRenderer  →  DocSink
//! (loaded)    (filter, sort)   (per-format rows)    (file / stdout)
//! ```
//!
//! - `sanitize`: line-break escaping and anchor derivation
//! - `renderer`: the renderer contract and format selection
//! - `markdown`: the markdown renderer
//! - `generator`: the single generation pass
//! - `sink`: scoped output stream handling

pub mod error;
pub mod generator;
pub mod markdown;
pub mod renderer;
pub mod sanitize;
pub mod sink;

pub use error::DocsError;
pub use generator::DocGenerator;
pub use renderer::{DocFormat, DocumentRenderer, create_renderer};
pub use sink::{Destination, DocSink};

use crate::catalog::Catalog;

/// Render a whole catalog in `format` and return the document text.
///
/// # Errors
///
/// Returns `DocsError::DuplicateKey` for duplicate keys in the catalog.
pub fn render_catalog(catalog: &Catalog, format: DocFormat) -> Result<String, DocsError> {
    let generator = DocGenerator::new(&catalog.properties, &catalog.zookeeper)?;
    let renderer = create_renderer(format, &catalog.document);
    generator.render_to_string(renderer.as_ref())
}
