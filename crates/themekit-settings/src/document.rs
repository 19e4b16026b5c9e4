// crates/themekit-settings/src/document.rs
// ============================================================================
// Module: Settings Document
// Description: Sanitized theme settings and the pruning algorithm.
// Purpose: Keep only schema-permitted keys from an untrusted document.
// Dependencies: serde_json, crate::schema
// ============================================================================

//! ## Overview
//! A raw settings document is untrusted. Sanitization keeps only the allowed
//! top-level keys, then prunes the `settings` subtree against a schema built
//! from the caller's valid-settings tree plus a synthesized `options` node
//! derived from the caller's valid option names. Pruning builds new trees
//! bottom-up; branches that end up empty are removed entirely.
//!
//! Invariants:
//! - Sanitization is a pure function of the raw document and the schema.
//! - The output never contains an empty `settings` object.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;

use crate::schema::SettingsSchema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Top-level keys a settings document may carry.
pub const VALID_TOP_LEVEL_KEYS: [&str; 2] = ["settings", "version"];

/// Top-level subtrees pruned against the schema.
const SCHEMA_SUBTREES: [&str; 1] = ["settings"];

/// Option names assumed when the caller supplies none.
pub const DEFAULT_OPTION_NAMES: [&str; 1] = ["on"];

/// Name of the synthesized options node under `settings`.
const OPTIONS_KEY: &str = "options";

// ============================================================================
// SECTION: Settings Document
// ============================================================================

/// Sanitized theme settings.
///
/// # Invariants
/// - Holds only keys permitted by the schema supplied at construction.
/// - Immutable after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    /// Sanitized top-level mapping.
    data: Map<String, Value>,
}

impl SettingsDocument {
    /// Sanitizes a raw document against the valid-settings schema and the
    /// valid option names.
    ///
    /// A non-object `raw` value produces an empty document. Empty
    /// `valid_options` falls back to [`DEFAULT_OPTION_NAMES`].
    #[must_use]
    pub fn new(raw: &Value, valid_settings: &SettingsSchema, valid_options: &[String]) -> Self {
        Self {
            data: sanitize(raw, valid_settings, valid_options),
        }
    }

    /// Creates an empty document.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the sanitized top-level mapping.
    #[must_use]
    pub fn raw_data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Returns the document version value, if present.
    #[must_use]
    pub fn version(&self) -> Option<&Value> {
        self.data.get("version")
    }

    /// Returns whether a feature is switched on under
    /// `settings.<block>.<feature>.on`.
    ///
    /// Absent segments, `null`, and `false` all read as disabled; any other
    /// present value reads as enabled.
    #[must_use]
    pub fn has_support(&self, block: &str, feature: &str) -> bool {
        let toggle = self
            .data
            .get("settings")
            .and_then(|settings| settings.get(block))
            .and_then(|block_value| block_value.get(feature))
            .and_then(|feature_value| feature_value.get("on"));
        !matches!(toggle, None | Some(Value::Null | Value::Bool(false)))
    }
}

// ============================================================================
// SECTION: Sanitize Algorithm
// ============================================================================

/// Sanitizes the raw document into a new top-level mapping.
fn sanitize(raw: &Value, valid_settings: &SettingsSchema, valid_options: &[String]) -> Map<String, Value> {
    let Value::Object(input) = raw else {
        return Map::new();
    };

    let mut output = Map::new();
    for key in VALID_TOP_LEVEL_KEYS {
        if let Some(value) = input.get(key) {
            output.insert(key.to_string(), value.clone());
        }
    }

    let schema = settings_schema(valid_settings, valid_options);
    for subtree in SCHEMA_SUBTREES {
        let Some(value) = input.get(subtree) else {
            continue;
        };
        output.remove(subtree);
        // Non-object subtrees are dropped entirely.
        let Value::Object(tree) = value else {
            continue;
        };
        let pruned = prune(tree, &schema);
        if !pruned.is_empty() {
            output.insert(subtree.to_string(), Value::Object(pruned));
        }
    }

    output
}

/// Builds the effective schema for the `settings` subtree: the caller's
/// valid-settings tree plus the synthesized `options` node.
fn settings_schema(valid_settings: &SettingsSchema, valid_options: &[String]) -> SettingsSchema {
    let mut options = SettingsSchema::leaf();
    if valid_options.is_empty() {
        for name in DEFAULT_OPTION_NAMES {
            options.insert(name, SettingsSchema::leaf());
        }
    } else {
        for name in valid_options {
            options.insert(name.clone(), SettingsSchema::leaf());
        }
    }
    let mut schema = valid_settings.clone();
    schema.insert(OPTIONS_KEY, options);
    schema
}

/// Removes keys not present in the schema, bottom-up.
///
/// Pass-through leaves keep the document value as-is. Nodes with children
/// recurse when the document value is an object, drop the key on a type
/// mismatch, and drop the key when the pruned result is empty.
fn prune(tree: &Map<String, Value>, schema: &SettingsSchema) -> Map<String, Value> {
    let mut output = Map::new();
    for (key, node) in schema.children() {
        let Some(value) = tree.get(key) else {
            continue;
        };
        if node.is_leaf() {
            output.insert(key.clone(), value.clone());
            continue;
        }
        let Value::Object(child) = value else {
            // Schema expects a nested mapping; scalar values are dropped.
            continue;
        };
        let pruned = prune(child, node);
        if !pruned.is_empty() {
            output.insert(key.clone(), Value::Object(pruned));
        }
    }
    output
}

// ============================================================================
// SECTION: Tests
// ============================================================================
