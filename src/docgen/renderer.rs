//! Output-format contract for property reference documents.
//!
//! The generator drives a [`DocumentRenderer`] through a fixed sequence of
//! callbacks; each format supplies its own implementation, selected by a
//! [`DocFormat`] tag through [`create_renderer`].

use std::io::{self, Write};

use clap::ValueEnum;

use crate::catalog::{DocumentSettings, Property, PropertyType, ZkMutability};
use crate::docgen::markdown::MarkdownRenderer;

/// Target document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DocFormat {
    /// Markdown with front matter, pipe tables and HTML anchors.
    #[default]
    Markdown,
}

/// Renders the pieces of a property reference document.
///
/// Every method writes to `out` and propagates write failures unchanged.
pub trait DocumentRenderer {
    /// Emit document-level front matter and title.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    fn page_header(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Emit a section heading.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    fn begin_section(&self, out: &mut dyn Write, name: &str) -> io::Result<()>;

    /// Emit a two-column table header: `column_label` and "Description".
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    fn begin_table(&self, out: &mut dyn Write, column_label: &str) -> io::Result<()>;

    /// Emit one row for a prefix-group property.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    fn prefix_section(&self, out: &mut dyn Write, property: &Property) -> io::Result<()>;

    /// Emit one row for a leaf property.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    fn property(
        &self,
        out: &mut dyn Write,
        property: &Property,
        mutability: &ZkMutability,
    ) -> io::Result<()>;

    /// Emit one row per property type, skipping [`PropertyType::Prefix`].
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    fn property_type_descriptions(
        &self,
        out: &mut dyn Write,
        types: &[PropertyType],
    ) -> io::Result<()>;

    /// Finish the document and push buffered bytes to the underlying stream.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    fn finish(&self, out: &mut dyn Write) -> io::Result<()> {
        out.flush()
    }

    /// Returns the format this renderer produces.
    fn format(&self) -> DocFormat;
}

/// Create a renderer for the given format.
#[must_use]
pub fn create_renderer(format: DocFormat, settings: &DocumentSettings) -> Box<dyn DocumentRenderer> {
    match format {
        DocFormat::Markdown => Box::new(MarkdownRenderer::new(settings.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_markdown_renderer() {
        let renderer = create_renderer(DocFormat::Markdown, &DocumentSettings::default());
        assert_eq!(renderer.format(), DocFormat::Markdown);
    }

    #[test]
    fn test_default_format_is_markdown() {
        assert_eq!(DocFormat::default(), DocFormat::Markdown);
    }

    #[test]
    fn test_format_value_names() {
        let names: Vec<_> = DocFormat::value_variants()
            .iter()
            .filter_map(|f| f.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["markdown".to_string()]);
    }
}
