// crates/themekit-core/src/dump.rs
// ============================================================================
// Module: Pretty Dump
// Description: Human-readable rendering of JSON values for debug output.
// Purpose: One shared pretty-printer for diagnostics and tooling.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Debug tooling across the workspace renders sanitized settings and other
//! JSON values through one helper so the formatting stays consistent.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

// ============================================================================
// SECTION: Pretty Printer
// ============================================================================

/// Renders a JSON value with two-space indentation.
#[must_use]
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
