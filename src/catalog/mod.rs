//! Property catalog: the read-only input to documentation generation.
//!
//! The catalog is materialized once (usually by [`loader::load_catalog`])
//! and handed to the generator as an immutable value.

pub mod loader;
pub mod mutability;
pub mod property;

use serde::Deserialize;

pub use mutability::{KeyRules, MutabilityRules, ZkMutability};
pub use property::{Property, PropertyType};

/// Document-level settings emitted in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentSettings {
    /// Page title.
    pub title: String,
    /// Site category the page is filed under.
    pub category: String,
    /// Position of the page within its category.
    pub order: u32,
    /// Text of the generated-file warning comment.
    pub notice: String,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            title: "Configuration Properties".to_string(),
            category: "administration".to_string(),
            order: 3,
            notice: "WARNING: Do not edit this file. It is a generated file.".to_string(),
        }
    }
}

/// A fully loaded property catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Page header settings.
    pub document: DocumentSettings,
    /// Dynamic configuration rules used to classify mutability.
    pub zookeeper: KeyRules,
    /// Every property, in declaration order.
    pub properties: Vec<Property>,
}
