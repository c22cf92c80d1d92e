//! Property and property-type definitions.
//!
//! A [`Property`] is one documented configuration key. Its [`PropertyType`]
//! comes from a closed enumeration whose declaration order is the order the
//! type glossary is rendered in.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// Property Types
// ============================================================================

/// The fixed set of value types a property can declare.
///
/// [`PropertyType::Prefix`] is a structural marker: a property of this type
/// stands for a whole family of keys sharing its dotted prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyType {
    /// Duration with an optional time unit.
    TimeDuration,
    /// Byte count with an optional size suffix.
    Bytes,
    /// Memory amount, absolute or as a share of the heap.
    Memory,
    /// Comma-separated host list.
    HostList,
    /// TCP port or port range.
    Port,
    /// Non-negative integer.
    Count,
    /// Floating point fraction or percentage.
    Fraction,
    /// Filesystem path.
    Path,
    /// Absolute filesystem path.
    AbsolutePath,
    /// Fully qualified class name.
    ClassName,
    /// Comma-separated list of class names.
    ClassNameList,
    /// Write-ahead log durability level.
    Durability,
    /// Action taken after garbage collection.
    GcPostAction,
    /// Last-location update mode.
    LastLocationMode,
    /// Arbitrary string.
    String,
    /// `true` or `false`.
    Boolean,
    /// Uniform resource identifier.
    Uri,
    /// JSON document.
    Json,
    /// Marker for a family of keys sharing a prefix.
    Prefix,
}

impl PropertyType {
    /// Every property type in natural (declaration) order.
    pub const ALL: &'static [Self] = &[
        Self::TimeDuration,
        Self::Bytes,
        Self::Memory,
        Self::HostList,
        Self::Port,
        Self::Count,
        Self::Fraction,
        Self::Path,
        Self::AbsolutePath,
        Self::ClassName,
        Self::ClassNameList,
        Self::Durability,
        Self::GcPostAction,
        Self::LastLocationMode,
        Self::String,
        Self::Boolean,
        Self::Uri,
        Self::Json,
        Self::Prefix,
    ];

    /// Canonical upper-case name used in catalogs and rendered documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TimeDuration => "TIMEDURATION",
            Self::Bytes => "BYTES",
            Self::Memory => "MEMORY",
            Self::HostList => "HOSTLIST",
            Self::Port => "PORT",
            Self::Count => "COUNT",
            Self::Fraction => "FRACTION",
            Self::Path => "PATH",
            Self::AbsolutePath => "ABSOLUTEPATH",
            Self::ClassName => "CLASSNAME",
            Self::ClassNameList => "CLASSNAMELIST",
            Self::Durability => "DURABILITY",
            Self::GcPostAction => "GC_POST_ACTION",
            Self::LastLocationMode => "LAST_LOCATION_MODE",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Uri => "URI",
            Self::Json => "JSON",
            Self::Prefix => "PREFIX",
        }
    }

    /// Human-readable description of the accepted value format.
    ///
    /// Descriptions may span several lines; renderers are expected to
    /// sanitize them before embedding them in row-oriented markup.
    #[must_use]
    pub const fn format_description(self) -> &'static str {
        match self {
            Self::TimeDuration => {
                "A non-negative integer optionally followed by a unit of time (whitespace disallowed), as in 30s.\n\
                 If no unit of time is specified, seconds are assumed. Valid units are 'ms', 's', 'm', 'h' and 'd'.\n\
                 Examples of valid durations are '600', '30s', '45m', '30000ms', '3d', and '1h'."
            }
            Self::Bytes => {
                "A positive integer optionally followed by a unit of memory (whitespace disallowed).\n\
                 If no unit is specified, bytes are assumed. Valid units are 'B', 'K', 'M' or 'G' for bytes, kilobytes, megabytes and gigabytes.\n\
                 Examples of valid memories are '1024', '20B', '100K', '1500M' and '2G'."
            }
            Self::Memory => {
                "A positive integer optionally followed by a unit of memory or a percentage (whitespace disallowed).\n\
                 If a percentage is specified, memory will be a percentage of the max memory allocated to a Java process (set by the JVM option -Xmx).\n\
                 Examples of valid memories are '1024', '20B', '100K', '1500M', '2G' and '20%'."
            }
            Self::HostList => {
                "A comma-separated list of hostnames or ip addresses, with optional port numbers.\n\
                 Examples of valid host lists are 'localhost:2000,www.example.com,10.10.1.1:500' and 'localhost'."
            }
            Self::Port => {
                "An positive integer in the range 1024-65535 (not already in use or specified elsewhere in the configuration),\n\
                 zero to indicate any open ephemeral port, or a range of positive integers specified as M-N."
            }
            Self::Count => "A non-negative integer in the range of 0-2147483647",
            Self::Fraction => {
                "A floating point number that represents either a fraction or, if suffixed with the '%' character, a percentage.\n\
                 Examples of valid fractions/percentages are '10', '1000%', '0.05', '5%', '0.2%' and '0.0005'."
            }
            Self::Path => {
                "A string that represents a filesystem path, which can be either relative or absolute to some directory.\n\
                 The filesystem depends on the property. Environment variables are substituted in the form ${ENV_VAR}."
            }
            Self::AbsolutePath => {
                "An absolute filesystem path. The filesystem depends on the property.\n\
                 This is the same as path, but enforces that its root is explicitly specified."
            }
            Self::ClassName => "A fully qualified class name",
            Self::ClassNameList => "A list of fully qualified class names separated by commas",
            Self::Durability => "One of 'none', 'log', 'flush' or 'sync'.",
            Self::GcPostAction => "One of 'none', 'flush', or 'compact'.",
            Self::LastLocationMode => "Defines how to update the last location. One of 'assignment', or 'compaction'.",
            Self::String => "An arbitrary string of characters whose format is unspecified and interpreted based on the context of the property to which it applies.",
            Self::Boolean => "Has a value of either 'true' or 'false' (case-insensitive)",
            Self::Uri => "A valid URI",
            Self::Json => "An arbitrary string that represents a valid, parsable generic json object.",
            Self::Prefix => "This property is used to denote a prefix and cannot be set directly.",
        }
    }

    /// Returns `true` for the structural [`PropertyType::Prefix`] marker.
    #[must_use]
    pub const fn is_prefix(self) -> bool {
        matches!(self, Self::Prefix)
    }

    /// Suggest the closest known type name for a misspelled one.
    ///
    /// Returns the closest name if its Damerau-Levenshtein distance is ≤ 3.
    #[must_use]
    pub fn suggest(input: &str) -> Option<&'static str> {
        let upper = input.to_ascii_uppercase();
        Self::ALL
            .iter()
            .map(|t| (t.name(), strsim::damerau_levenshtein(&upper, t.name())))
            .filter(|(_, dist)| *dist <= 3)
            .min_by_key(|(_, dist)| *dist)
            .map(|(name, _)| name)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known [`PropertyType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown property type '{0}'")]
pub struct UnknownPropertyType(pub String);

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownPropertyType(trimmed.to_string()))
    }
}

// ============================================================================
// Property
// ============================================================================

/// A single documented configuration property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Dotted-segment key, unique within a catalog.
    pub key: String,
    /// Free-text description; may contain line breaks.
    pub description: String,
    /// Declared value type.
    pub property_type: PropertyType,
    /// Raw default value; may be empty or span several lines.
    pub default_value: String,
    /// Still valid but scheduled for removal.
    pub deprecated: bool,
    /// Excluded from generated documentation.
    pub experimental: bool,
}

impl Property {
    /// Create a non-deprecated, non-experimental property.
    pub fn new(
        key: impl Into<String>,
        property_type: PropertyType,
        default_value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            property_type,
            default_value: default_value.into(),
            deprecated: false,
            experimental: false,
        }
    }

    /// Mark the property as deprecated.
    #[must_use]
    pub const fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Mark the property as experimental.
    #[must_use]
    pub const fn experimental(mut self) -> Self {
        self.experimental = true;
        self
    }

    /// Returns `true` if this property names a prefix group rather than a leaf.
    #[must_use]
    pub const fn is_prefix(&self) -> bool {
        self.property_type.is_prefix()
    }
}

// ============================================================================
// Tests
// ============================================================================
