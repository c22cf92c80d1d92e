//! Property reference generation command.
//!
//! Loads the catalog, opens the destination, and runs one generation pass.
//! The catalog is loaded and checked before the sink is opened, so a bad
//! catalog never truncates an existing document.

use std::path::Path;

use crate::catalog::loader::load_catalog;
use crate::cli::args::GenerateArgs;
use crate::docgen::{Destination, DocGenerator, DocSink, DocsError, create_renderer};
use crate::error::ConfdocError;

/// Execute `generate`.
///
/// # Errors
///
/// Returns `DocsError::InvalidInvocation` if no catalog is given, a
/// `ConfigError` if the catalog cannot be loaded, and `DocsError` variants
/// for duplicate keys, an unavailable sink, or failed writes.
pub fn run(args: &GenerateArgs, catalog: Option<&Path>) -> Result<(), ConfdocError> {
    let catalog_path = catalog.ok_or_else(|| {
        DocsError::InvalidInvocation(
            "no catalog given; pass --catalog or set CONFDOC_CATALOG".to_string(),
        )
    })?;
    let destination = Destination::from_arg(&args.output);

    tracing::info!(
        catalog = %catalog_path.display(),
        destination = %destination,
        format = ?args.format,
        "generating property reference"
    );

    let catalog = load_catalog(catalog_path)?;
    let generator = DocGenerator::new(&catalog.properties, &catalog.zookeeper)?;
    let renderer = create_renderer(args.format, &catalog.document);

    let sink = DocSink::open(destination)?;
    generator.generate(renderer.as_ref(), sink)?;

    Ok(())
}
