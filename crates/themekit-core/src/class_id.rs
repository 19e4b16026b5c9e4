// crates/themekit-core/src/class_id.rs
// ============================================================================
// Module: Theme Class Identifiers
// Description: Namespaced class identifiers and segment normalization.
// Purpose: Provide the canonical identifier type resolved to class files.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A theme class identifier is a backslash-delimited sequence of segments,
//! e.g. `Themekit\Settings\Theme_Settings`. The final segment is the leaf
//! class name; the preceding segments form the sub-namespace path. Segment
//! normalization (lowercase, underscores to hyphens) is the single rule used
//! to derive file stems and directory components from identifiers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Separator between namespace segments in a class identifier.
pub const NAMESPACE_SEPARATOR: char = '\\';

// ============================================================================
// SECTION: Class Identifier
// ============================================================================

/// Fully qualified theme class identifier.
///
/// # Invariants
/// - Opaque UTF-8 string; segment structure is derived on demand and no
///   normalization is applied at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    /// Creates a new class identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier segments in declaration order.
    ///
    /// Empty segments (leading separators, doubled separators) are skipped.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(NAMESPACE_SEPARATOR).filter(|segment| !segment.is_empty())
    }

    /// Returns the leaf class name (the final segment), if any.
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.segments().last()
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ClassId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClassId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Segment Normalization
// ============================================================================

/// Normalizes one identifier segment into its filesystem form.
///
/// Lowercases the segment and replaces underscores with hyphens. Applied to
/// every directory component and to the leaf file stem.
#[must_use]
pub fn normalize_segment(segment: &str) -> String {
    segment.to_lowercase().replace('_', "-")
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

    use super::*;

    #[test]
    fn segments_split_on_backslash() {
        let id = ClassId::new("Themekit\\Settings\\Theme_Settings");
        let segments: Vec<&str> = id.segments().collect();
        assert_eq!(segments, vec!["Themekit", "Settings", "Theme_Settings"]);
    }

    #[test]
    fn segments_skip_empty_components() {
        let id = ClassId::new("\\Themekit\\\\Theme");
        let segments: Vec<&str> = id.segments().collect();
        assert_eq!(segments, vec!["Themekit", "Theme"]);
    }

    #[test]
    fn leaf_is_final_segment() {
        let id = ClassId::new("Themekit\\Utils\\Logger");
        assert_eq!(id.leaf(), Some("Logger"));
    }

    #[test]
    fn leaf_of_empty_identifier_is_none() {
        let id = ClassId::new("");
        assert_eq!(id.leaf(), None);
    }

    #[test]
    fn normalize_lowercases_and_hyphenates() {
        assert_eq!(normalize_segment("My_Widget"), "my-widget");
        assert_eq!(normalize_segment("SubNS"), "subns");
        assert_eq!(normalize_segment("already-flat"), "already-flat");
    }
}
