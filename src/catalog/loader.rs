//! Catalog file loading.
//!
//! Reads a YAML catalog (JSON is accepted too, being a YAML subset) and
//! converts it into a typed [`Catalog`]:
//! 1. Read the file
//! 2. Parse into raw records
//! 3. Resolve type names and stringify scalar defaults
//!
//! No consistency validation happens here beyond what typing requires.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::catalog::property::UnknownPropertyType;
use crate::catalog::{Catalog, DocumentSettings, KeyRules, Property, PropertyType};
use crate::error::ConfigError;

// ============================================================================
// Raw Records
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(default)]
    document: DocumentSettings,
    #[serde(default)]
    zookeeper: KeyRules,
    #[serde(default)]
    properties: Vec<RawProperty>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProperty {
    key: String,
    #[serde(rename = "type")]
    property_type: String,
    #[serde(default)]
    default: Value,
    #[serde(default)]
    description: String,
    #[serde(default)]
    deprecated: bool,
    #[serde(default)]
    experimental: bool,
}

// ============================================================================
// Public API
// ============================================================================

/// Load a catalog from a file.
///
/// # Errors
///
/// Returns `ConfigError::MissingFile` if the file does not exist, and
/// `ConfigError::ParseError` or `ConfigError::UnknownPropertyType` if its
/// contents cannot be turned into a catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    tracing::debug!(path = %path.display(), "loading catalog");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ConfigError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_catalog(&content, path)
}

/// Parse catalog text. `path` is only used for error reporting.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` on malformed input or non-scalar
/// defaults, and `ConfigError::UnknownPropertyType` on unknown type names.
pub fn parse_catalog(content: &str, path: &Path) -> Result<Catalog, ConfigError> {
    let raw: RawCatalog = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: e.location().map(|loc| loc.line()),
        message: e.to_string(),
    })?;

    let properties = raw
        .properties
        .into_iter()
        .map(|p| convert_property(p, path))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        path = %path.display(),
        properties = properties.len(),
        "catalog parsed"
    );

    Ok(Catalog {
        document: raw.document,
        zookeeper: raw.zookeeper,
        properties,
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn convert_property(raw: RawProperty, path: &Path) -> Result<Property, ConfigError> {
    let property_type: PropertyType = raw.property_type.parse().map_err(
        |UnknownPropertyType(name)| ConfigError::UnknownPropertyType {
            suggestion: PropertyType::suggest(&name),
            key: raw.key.clone(),
            name,
        },
    )?;

    let Some(default_value) = scalar_to_string(&raw.default) else {
        return Err(ConfigError::ParseError {
            path: path.to_path_buf(),
            line: None,
            message: format!("default value of '{}' must be a scalar", raw.key),
        });
    };

    Ok(Property {
        key: raw.key,
        description: raw.description,
        property_type,
        default_value,
        deprecated: raw.deprecated,
        experimental: raw.experimental,
    })
}

/// Render a YAML scalar as the raw string a property default is kept as.
///
/// `null` (or an absent default) becomes the empty string; sequences and
/// mappings yield `None`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
