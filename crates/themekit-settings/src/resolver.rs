// crates/themekit-settings/src/resolver.rs
// ============================================================================
// Module: Settings Resolver
// Description: Cached access to the theme's sanitized settings document.
// Purpose: Read, sanitize, and memoize theme-settings.json with invalidation.
// Dependencies: themekit-core, serde_json, tracing
// ============================================================================

//! ## Overview
//! The resolver is an explicit context object holding the memoized sanitized
//! document and the schema-support flag. Both fields are computed lazily,
//! returned unchanged on repeated access, and cleared together by
//! [`SettingsResolver::invalidate`]. Hosts that keep the resolver alive
//! across requests are responsible for invalidating it when theme files
//! change.
//!
//! Invariants:
//! - Repeated access without invalidation ignores new schema arguments.
//! - Invalidation clears both memoized fields; there is no partial reset.
//! - Document problems degrade to an empty document, never an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use themekit_core::ThemeDirs;
use themekit_core::ThemeFs;

use crate::document::SettingsDocument;
use crate::schema::SettingsSchema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Settings document file name, read from the active theme directory.
pub const SETTINGS_FILE_NAME: &str = "theme-settings.json";

/// Marker file gating schema support, checked in the active and parent theme
/// directories.
pub const SCHEMA_MARKER_FILE_NAME: &str = "theme.json";

// ============================================================================
// SECTION: Settings Resolver
// ============================================================================

/// Cached settings access for one theme.
#[derive(Debug, Clone)]
pub struct SettingsResolver<F: ThemeFs> {
    /// Filesystem the resolver reads from.
    fs: F,
    /// Theme directories probed for settings files.
    dirs: ThemeDirs,
    /// Memoized sanitized document.
    theme: Option<SettingsDocument>,
    /// Memoized schema-support flag.
    has_support: Option<bool>,
}

impl<F: ThemeFs> SettingsResolver<F> {
    /// Creates a resolver with uncomputed cache state.
    #[must_use]
    pub fn new(fs: F, dirs: ThemeDirs) -> Self {
        Self {
            fs,
            dirs,
            theme: None,
            has_support: None,
        }
    }

    /// Returns the sanitized settings document, computing it on first access.
    ///
    /// After the first call the memoized document is returned unchanged;
    /// callers must [`invalidate`](Self::invalidate) before changing the
    /// schema arguments.
    pub fn theme_settings(
        &mut self,
        valid_settings: &SettingsSchema,
        valid_options: &[String],
    ) -> &SettingsDocument {
        let document = match self.theme.take() {
            Some(document) => document,
            None => {
                let raw = self.read_settings_file();
                SettingsDocument::new(&raw, valid_settings, valid_options)
            }
        };
        self.theme.insert(document)
    }

    /// Returns whether the theme ships the schema marker file, memoized
    /// independently of the settings document.
    pub fn has_schema_support(&mut self) -> bool {
        if let Some(flag) = self.has_support {
            return flag;
        }
        let flag = self
            .dirs
            .file_from_theme(&self.fs, SCHEMA_MARKER_FILE_NAME, false)
            .is_some()
            || self
                .dirs
                .file_from_theme(&self.fs, SCHEMA_MARKER_FILE_NAME, true)
                .is_some();
        self.has_support = Some(flag);
        flag
    }

    /// Clears both memoized fields so the next access recomputes from the
    /// current filesystem state.
    pub fn invalidate(&mut self) {
        self.theme = None;
        self.has_support = None;
    }

    /// Reads and decodes the settings document, degrading to `Null` on any
    /// problem.
    fn read_settings_file(&self) -> Value {
        let Some(path) = self.dirs.file_from_theme(&self.fs, SETTINGS_FILE_NAME, false) else {
            tracing::debug!(file = SETTINGS_FILE_NAME, "settings document not found, using empty settings");
            return Value::Null;
        };
        let contents = match self.fs.read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "settings document unreadable, using empty settings");
                return Value::Null;
            }
        };
        match serde_json::from_str::<Value>(&contents) {
            Ok(value @ Value::Object(_)) => value,
            Ok(_) => {
                tracing::warn!(path = %path.display(), "settings document is not an object, using empty settings");
                Value::Null
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "settings document failed to parse, using empty settings");
                Value::Null
            }
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
