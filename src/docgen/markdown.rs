//! Markdown rendering of property reference documents.
//!
//! Produces a page with YAML front matter, a generated-file warning, a
//! property table and a property-type glossary. Rows are pipe-delimited
//! and must stay on one line, so free text goes through [`sanitize`].

use std::io::{self, Write};

use crate::catalog::{DocumentSettings, Property, PropertyType, ZkMutability};
use crate::docgen::renderer::{DocFormat, DocumentRenderer};
use crate::docgen::sanitize::{MARKDOWN_LINE_BREAK, anchor_id, has_line_break, sanitize};

const DEPRECATED_MARKER: &str = "**Deprecated.** ";

/// Markdown [`DocumentRenderer`].
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    settings: DocumentSettings,
}

impl MarkdownRenderer {
    /// Create a renderer using the given page header settings.
    #[must_use]
    pub const fn new(settings: DocumentSettings) -> Self {
        Self { settings }
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn page_header(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "---")?;
        writeln!(out, "title: {}", self.settings.title)?;
        writeln!(out, "category: {}", self.settings.category)?;
        writeln!(out, "order: {}", self.settings.order)?;
        writeln!(out, "---")?;
        writeln!(out)?;
        writeln!(out, "<!-- {} -->", self.settings.notice)?;
        writeln!(out)
    }

    fn begin_section(&self, out: &mut dyn Write, name: &str) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "### {name}")?;
        writeln!(out)
    }

    fn begin_table(&self, out: &mut dyn Write, column_label: &str) -> io::Result<()> {
        writeln!(out, "| {column_label} | Description |")?;
        writeln!(out, "|--------------|-------------|")
    }

    fn prefix_section(&self, out: &mut dyn Write, property: &Property) -> io::Result<()> {
        let depr = property.deprecated;
        writeln!(
            out,
            "| <a name=\"{}prefix\" class=\"prop\"></a> **{}*** | {}{} |",
            anchor_id(&property.key),
            property.key,
            deprecated_marker(depr),
            strike(&md(&property.description), depr),
        )
    }

    fn property(
        &self,
        out: &mut dyn Write,
        property: &Property,
        mutability: &ZkMutability,
    ) -> io::Result<()> {
        let depr = property.deprecated;
        writeln!(
            out,
            "| <a name=\"{}\" class=\"prop\"></a> {} | {}{}{MARKDOWN_LINE_BREAK}{}, {}, {} |",
            anchor_id(&property.key),
            property.key,
            deprecated_marker(depr),
            strike(&md(&property.description), depr),
            strike(&format!("**type:** {}", property.property_type.name()), depr),
            strike(
                &format!("**zk mutable:** {}", mutability_text(mutability)),
                depr
            ),
            default_value(&property.default_value, depr),
        )
    }

    fn property_type_descriptions(
        &self,
        out: &mut dyn Write,
        types: &[PropertyType],
    ) -> io::Result<()> {
        for t in types.iter().filter(|t| !t.is_prefix()) {
            writeln!(out, "| {} | {} |", md(t.name()), md(t.format_description()))?;
        }
        Ok(())
    }

    fn format(&self) -> DocFormat {
        DocFormat::Markdown
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn md(text: &str) -> String {
    sanitize(text, MARKDOWN_LINE_BREAK)
}

const fn deprecated_marker(deprecated: bool) -> &'static str {
    if deprecated { DEPRECATED_MARKER } else { "" }
}

/// Wrap `text` in strikethrough markup when `deprecated`.
///
/// Empty text is returned as is; `~~~~` is not a strikethrough span.
fn strike(text: &str, deprecated: bool) -> String {
    if deprecated && !text.is_empty() {
        format!("~~{text}~~")
    } else {
        text.to_string()
    }
}

fn mutability_text(mutability: &ZkMutability) -> String {
    match mutability {
        ZkMutability::NotMutable => "no".to_string(),
        ZkMutability::Mutable => "yes".to_string(),
        ZkMutability::MutableRequiresRestart { scope } => {
            format!("yes but requires restart of the {scope}")
        }
    }
}

/// Format a default value.
///
/// - empty (after trimming): a literal `empty`, no code styling
/// - multi-line: struck label followed by a fenced block holding the
///   trimmed raw value
/// - otherwise: the value in inline code
fn default_value(raw: &str, deprecated: bool) -> String {
    let value = raw.trim();
    if value.is_empty() {
        strike("**default value:** empty", deprecated)
    } else if has_line_break(value) {
        format!(
            "{} \n```\n{value}\n```\n",
            strike("**default value:**", deprecated)
        )
    } else {
        strike(&format!("**default value:** `{}`", md(value)), deprecated)
    }
}
