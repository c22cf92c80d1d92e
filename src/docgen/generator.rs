//! Document generation pass.
//!
//! [`DocGenerator`] holds the filtered, key-ordered working set and drives a
//! [`DocumentRenderer`] through the page in one sequential pass:
//! header, property table, property-type glossary, finish.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use crate::catalog::{MutabilityRules, Property, PropertyType, ZkMutability};
use crate::docgen::error::DocsError;
use crate::docgen::renderer::DocumentRenderer;
use crate::docgen::sink::DocSink;

/// Column label of the property table.
pub const PROPERTY_COLUMN: &str = "Property";

/// Heading of the property-type glossary section.
pub const TYPES_SECTION: &str = "Property Types";

/// Column label of the property-type table.
pub const TYPE_COLUMN: &str = "Type";

/// Drives a renderer over a property catalog.
pub struct DocGenerator<'a> {
    properties: Vec<&'a Property>,
    types: &'a [PropertyType],
    rules: &'a dyn MutabilityRules,
}

impl<'a> DocGenerator<'a> {
    /// Build the working set: non-experimental properties ordered by key.
    ///
    /// The type glossary defaults to [`PropertyType::ALL`].
    ///
    /// # Errors
    ///
    /// Returns `DocsError::DuplicateKey` if two catalog entries share a key.
    pub fn new(
        properties: &'a [Property],
        rules: &'a dyn MutabilityRules,
    ) -> Result<Self, DocsError> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut sorted: BTreeMap<&str, &Property> = BTreeMap::new();
        let mut experimental = 0usize;

        for prop in properties {
            if !seen.insert(prop.key.as_str()) {
                return Err(DocsError::DuplicateKey(prop.key.clone()));
            }
            if prop.experimental {
                experimental += 1;
            } else {
                sorted.insert(prop.key.as_str(), prop);
            }
        }

        tracing::debug!(
            documented = sorted.len(),
            experimental,
            "built property working set"
        );

        Ok(Self {
            properties: sorted.into_values().collect(),
            types: PropertyType::ALL,
            rules,
        })
    }

    /// Replace the type glossary, keeping the given order.
    #[must_use]
    pub fn with_types(mut self, types: &'a [PropertyType]) -> Self {
        self.types = types;
        self
    }

    /// Properties that will be documented, in output order.
    #[must_use]
    pub fn properties(&self) -> &[&'a Property] {
        &self.properties
    }

    /// Render the full document into `out` and flush it.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::Write` as soon as `out` rejects a write.
    pub fn write_to(
        &self,
        renderer: &dyn DocumentRenderer,
        out: &mut dyn Write,
    ) -> Result<(), DocsError> {
        renderer.page_header(out)?;

        renderer.begin_table(out, PROPERTY_COLUMN)?;
        for prop in &self.properties {
            if prop.is_prefix() {
                renderer.prefix_section(out, prop)?;
            } else {
                let mutability = ZkMutability::classify(&prop.key, self.rules);
                renderer.property(out, prop, &mutability)?;
            }
        }

        renderer.begin_section(out, TYPES_SECTION)?;
        renderer.begin_table(out, TYPE_COLUMN)?;
        renderer.property_type_descriptions(out, self.types)?;

        renderer.finish(out)?;
        Ok(())
    }

    /// Render the full document into `sink`, then close it.
    ///
    /// The sink is consumed, so it is closed exactly once. On error it is
    /// dropped without the final flush and may hold partial output.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::Write` if any write or the final flush fails.
    pub fn generate(
        &self,
        renderer: &dyn DocumentRenderer,
        mut sink: DocSink,
    ) -> Result<(), DocsError> {
        self.write_to(renderer, &mut sink)?;
        let destination = sink.destination().to_string();
        sink.close()?;

        tracing::info!(
            destination,
            format = ?renderer.format(),
            properties = self.properties.len(),
            "generated property reference"
        );
        Ok(())
    }

    /// Render the full document into a string.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::Write` if the renderer fails.
    pub fn render_to_string(&self, renderer: &dyn DocumentRenderer) -> Result<String, DocsError> {
        let mut buf = Vec::new();
        self.write_to(renderer, &mut buf)?;
        String::from_utf8(buf).map_err(|e| DocsError::Write(std::io::Error::other(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DocumentSettings, KeyRules};
    use crate::docgen::markdown::MarkdownRenderer;
    use std::io;

    fn catalog() -> Vec<Property> {
        vec![
            Property::new("table.split.threshold", PropertyType::Bytes, "1G", "Split size"),
            Property::new("general.prefix", PropertyType::Prefix, "", "General").deprecated(),
            Property::new("table.scan.max.memory", PropertyType::Memory, "512K", "Scan")
                .experimental(),
            Property::new("instance.volumes", PropertyType::String, "", "Volumes"),
        ]
    }

    fn render(properties: &[Property]) -> String {
        let rules = KeyRules::default();
        let generator = DocGenerator::new(properties, &rules).unwrap();
        generator
            .render_to_string(&MarkdownRenderer::new(DocumentSettings::default()))
            .unwrap()
    }

    #[test]
    fn test_working_set_sorted_without_experimental() {
        let props = catalog();
        let rules = KeyRules::default();
        let generator = DocGenerator::new(&props, &rules).unwrap();
        let keys: Vec<_> = generator.properties().iter().map(|p| p.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["general.prefix", "instance.volumes", "table.split.threshold"]
        );
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let props = vec![
            Property::new("a.b", PropertyType::Count, "1", ""),
            Property::new("a.b", PropertyType::Count, "2", ""),
        ];
        let rules = KeyRules::default();
        let err = DocGenerator::new(&props, &rules).err().unwrap();
        assert!(matches!(err, DocsError::DuplicateKey(ref k) if k == "a.b"));
    }

    #[test]
    fn test_duplicate_with_experimental_rejected() {
        let props = vec![
            Property::new("a.b", PropertyType::Count, "1", "").experimental(),
            Property::new("a.b", PropertyType::Count, "2", ""),
        ];
        let rules = KeyRules::default();
        assert!(matches!(
            DocGenerator::new(&props, &rules),
            Err(DocsError::DuplicateKey(_))
        ));
    }

    #[test]
    fn test_document_section_order() {
        let out = render(&catalog());
        let header = out.find("title: Configuration Properties").unwrap();
        let table = out.find("| Property | Description |").unwrap();
        let section = out.find("### Property Types").unwrap();
        let types = out.find("| Type | Description |").unwrap();
        assert!(header < table && table < section && section < types);
    }

    #[test]
    fn test_experimental_absent_from_output() {
        let out = render(&catalog());
        assert!(!out.contains("table.scan.max.memory"));
        assert!(!out.contains("table_scan_max_memory"));
    }

    #[test]
    fn test_prefix_and_leaf_forms() {
        let out = render(&catalog());
        assert!(out.contains("general_prefixprefix"));
        assert!(out.contains("**general.prefix***"));
        assert!(!out.contains("<a name=\"general_prefix\""));
        assert!(out.contains("<a name=\"instance_volumes\""));
        assert!(!out.contains("instance_volumesprefix"));
    }

    #[test]
    fn test_mutability_comes_from_rules() {
        let props = vec![Property::new("table.split.threshold", PropertyType::Bytes, "1G", "")];
        let rules = (|key: &str| key.starts_with("table."), |_: &str| false);
        let generator = DocGenerator::new(&props, &rules).unwrap();
        let out = generator
            .render_to_string(&MarkdownRenderer::default())
            .unwrap();
        assert!(out.contains("**zk mutable:** yes,"));
    }

    #[test]
    fn test_with_types_restricts_glossary() {
        let props = catalog();
        let rules = KeyRules::default();
        let generator = DocGenerator::new(&props, &rules)
            .unwrap()
            .with_types(&[PropertyType::Count, PropertyType::Prefix]);
        let out = generator
            .render_to_string(&MarkdownRenderer::default())
            .unwrap();
        let glossary = &out[out.find("| Type | Description |").unwrap()..];
        assert_eq!(glossary.lines().count(), 3);
        assert!(glossary.contains("| COUNT |"));
    }

    #[test]
    fn test_empty_catalog_still_has_glossary() {
        let out = render(&[]);
        assert!(out.contains("| Property | Description |\n|--------------|-------------|\n\n### Property Types"));
        assert!(out.contains("| BOOLEAN |"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let props = catalog();
        assert_eq!(render(&props), render(&props));
    }

    struct FailingWriter {
        budget: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::other("disk full"));
            }
            self.budget -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let props = catalog();
        let rules = KeyRules::default();
        let generator = DocGenerator::new(&props, &rules).unwrap();
        let mut out = FailingWriter { budget: 3 };
        let err = generator
            .write_to(&MarkdownRenderer::default(), &mut out)
            .unwrap_err();
        assert!(matches!(err, DocsError::Write(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_generate_writes_and_closes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.md");
        let props = catalog();
        let rules = KeyRules::default();
        let generator = DocGenerator::new(&props, &rules).unwrap();
        let renderer = MarkdownRenderer::default();

        let sink = DocSink::open(crate::docgen::sink::Destination::File(path.clone())).unwrap();
        generator.generate(&renderer, sink).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, generator.render_to_string(&renderer).unwrap());
    }
}
