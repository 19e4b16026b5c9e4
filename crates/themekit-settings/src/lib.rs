// crates/themekit-settings/src/lib.rs
// ============================================================================
// Module: Themekit Settings Library
// Description: Theme settings document sanitization and cached access.
// Purpose: Prune untrusted settings documents to a recognized schema.
// Dependencies: themekit-core, serde_json, tracing
// ============================================================================

//! ## Overview
//! `themekit-settings` reads a theme's `theme-settings.json`, prunes it to
//! the keys a schema permits, and memoizes the sanitized result behind a
//! resolver context with explicit invalidation. Settings are optional
//! enhancements: a missing, unreadable, or malformed document degrades to an
//! empty document rather than an error.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod document;
pub mod resolver;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use document::DEFAULT_OPTION_NAMES;
pub use document::SettingsDocument;
pub use document::VALID_TOP_LEVEL_KEYS;
pub use resolver::SCHEMA_MARKER_FILE_NAME;
pub use resolver::SETTINGS_FILE_NAME;
pub use resolver::SettingsResolver;
pub use schema::SettingsSchema;
