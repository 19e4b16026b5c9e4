// crates/themekit-settings/src/schema.rs
// ============================================================================
// Module: Settings Schema
// Description: Nested allow-list of settings keys.
// Purpose: Describe which keys a settings subtree may contain at each level.
// Dependencies: serde_json, std
// ============================================================================

//! ## Overview
//! A schema node maps allowed key names to child nodes. A node with no
//! children is a pass-through leaf: the key is allowed and its value is kept
//! as-is, with no further descent. A node with children prunes its subtree
//! recursively.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;

// ============================================================================
// SECTION: Schema Node
// ============================================================================

/// Nested allow-list describing permitted settings keys.
///
/// # Invariants
/// - Child order is deterministic (key order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsSchema {
    /// Allowed key names mapped to the schema for their values.
    children: BTreeMap<String, SettingsSchema>,
}

impl SettingsSchema {
    /// Creates an empty node (a pass-through leaf).
    #[must_use]
    pub fn leaf() -> Self {
        Self::default()
    }

    /// Adds a child node, consuming and returning the schema for chaining.
    #[must_use]
    pub fn with_child(mut self, name: impl Into<String>, child: Self) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    /// Inserts a child node.
    pub fn insert(&mut self, name: impl Into<String>, child: Self) {
        self.children.insert(name.into(), child);
    }

    /// Returns the child node for `name`, if allowed.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Self> {
        self.children.get(name)
    }

    /// Returns whether this node is a pass-through leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates allowed keys and their child nodes in key order.
    pub fn children(&self) -> impl Iterator<Item = (&String, &Self)> {
        self.children.iter()
    }

    /// Builds a schema from a JSON value.
    ///
    /// Objects recurse; any non-object value becomes a pass-through leaf.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => {
                let mut schema = Self::leaf();
                for (key, child) in map {
                    schema.insert(key.clone(), Self::from_value(child));
                }
                schema
            }
            _ => Self::leaf(),
        }
    }
}

impl From<&Value> for SettingsSchema {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use serde_json::json;

    use super::*;

    #[test]
    fn builder_nests_children() {
        let schema = SettingsSchema::leaf()
            .with_child("color", SettingsSchema::leaf().with_child("palette", SettingsSchema::leaf()));
        assert!(!schema.is_leaf());
        let color = schema.get("color").unwrap();
        assert!(color.get("palette").unwrap().is_leaf());
        assert!(schema.get("typography").is_none());
    }

    #[test]
    fn from_value_recurses_into_objects() {
        let schema = SettingsSchema::from_value(&json!({
            "color": { "palette": {} },
            "version": 2
        }));
        assert!(schema.get("color").unwrap().get("palette").unwrap().is_leaf());
        assert!(schema.get("version").unwrap().is_leaf(), "scalars become leaves");
    }

    #[test]
    fn children_iterate_in_key_order() {
        let schema = SettingsSchema::leaf()
            .with_child("b", SettingsSchema::leaf())
            .with_child("a", SettingsSchema::leaf());
        let keys: Vec<&String> = schema.children().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
