//! Runtime mutability of properties through the dynamic configuration store.
//!
//! Whether a key can be changed in `ZooKeeper` is decided by two predicates
//! owned by the surrounding system. They are injected through
//! [`MutabilityRules`]; [`ZkMutability::classify`] combines them.

use std::collections::BTreeSet;

use serde::Deserialize;

/// Three-way mutability classification for a property key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZkMutability {
    /// Cannot be changed at runtime.
    NotMutable,
    /// Can be changed at runtime and takes effect without a restart.
    Mutable,
    /// Can be changed at runtime but the named service must be restarted.
    MutableRequiresRestart {
        /// First dot-segment of the key, naming the service to restart.
        scope: String,
    },
}

impl ZkMutability {
    /// Classify `key` against the supplied rules.
    ///
    /// Validity is checked first: a key that is fixed but not valid is
    /// reported as [`ZkMutability::NotMutable`].
    #[must_use]
    pub fn classify(key: &str, rules: &dyn MutabilityRules) -> Self {
        if !rules.is_valid_zoo_key(key) {
            return Self::NotMutable;
        }
        if rules.is_fixed_zoo_key(key) {
            let scope = key.split('.').next().unwrap_or_default().to_string();
            return Self::MutableRequiresRestart { scope };
        }
        Self::Mutable
    }
}

/// Predicate pair deciding dynamic-configuration mutability.
pub trait MutabilityRules {
    /// Whether `key` may be stored in the dynamic configuration store.
    fn is_valid_zoo_key(&self, key: &str) -> bool;

    /// Whether a change to `key` only takes effect after a restart.
    fn is_fixed_zoo_key(&self, key: &str) -> bool;
}

impl<V, F> MutabilityRules for (V, F)
where
    V: Fn(&str) -> bool,
    F: Fn(&str) -> bool,
{
    fn is_valid_zoo_key(&self, key: &str) -> bool {
        (self.0)(key)
    }

    fn is_fixed_zoo_key(&self, key: &str) -> bool {
        (self.1)(key)
    }
}

/// Data-driven [`MutabilityRules`] read from the catalog file.
///
/// The default value treats every key as not mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyRules {
    /// A key is a candidate for runtime changes only under one of these prefixes.
    pub mutable_prefixes: Vec<String>,
    /// Exact keys that are never mutable, even under a mutable prefix.
    pub excluded: BTreeSet<String>,
    /// Exact keys whose changes require a restart.
    pub fixed: BTreeSet<String>,
}

impl MutabilityRules for KeyRules {
    fn is_valid_zoo_key(&self, key: &str) -> bool {
        !self.excluded.contains(key)
            && self
                .mutable_prefixes
                .iter()
                .any(|prefix| key.starts_with(prefix.as_str()))
    }

    fn is_fixed_zoo_key(&self, key: &str) -> bool {
        self.fixed.contains(key)
    }
}
