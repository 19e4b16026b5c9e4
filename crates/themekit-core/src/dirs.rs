// crates/themekit-core/src/dirs.rs
// ============================================================================
// Module: Theme Directories
// Description: The stylesheet/template directory pair for an active theme.
// Purpose: Anchor class and settings file probes to concrete directories.
// Dependencies: crate::fs
// ============================================================================

//! ## Overview
//! A theme installation exposes two directories: the stylesheet directory of
//! the active (child) theme and the template directory of its parent. For a
//! standalone theme both are the same path. File probes that honor the
//! child/parent fallback go through [`ThemeDirs::file_from_theme`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use crate::fs::ThemeFs;

// ============================================================================
// SECTION: Theme Directories
// ============================================================================

/// Directory pair for an active theme.
///
/// # Invariants
/// - Paths are held as given; no normalization beyond what callers supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDirs {
    /// Active (child) theme directory.
    stylesheet_dir: PathBuf,
    /// Parent (template) theme directory.
    template_dir: PathBuf,
}

impl ThemeDirs {
    /// Creates directories for a child theme setup.
    #[must_use]
    pub fn new(stylesheet_dir: impl Into<PathBuf>, template_dir: impl Into<PathBuf>) -> Self {
        Self {
            stylesheet_dir: stylesheet_dir.into(),
            template_dir: template_dir.into(),
        }
    }

    /// Creates directories for a standalone theme (no parent).
    #[must_use]
    pub fn standalone(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            stylesheet_dir: dir.clone(),
            template_dir: dir,
        }
    }

    /// Returns the active theme directory.
    #[must_use]
    pub fn stylesheet_dir(&self) -> &Path {
        &self.stylesheet_dir
    }

    /// Returns the parent theme directory.
    #[must_use]
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Builds the path to `file_name` in the selected theme directory and
    /// checks that it is readable.
    ///
    /// Returns the whole file path, or `None` when the file is not readable.
    /// `template` selects the parent theme directory instead of the active
    /// one.
    pub fn file_from_theme<F: ThemeFs + ?Sized>(
        &self,
        fs: &F,
        file_name: &str,
        template: bool,
    ) -> Option<PathBuf> {
        let base = if template { &self.template_dir } else { &self.stylesheet_dir };
        let candidate = base.join(file_name);
        fs.is_readable(&candidate).then_some(candidate)
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

    use crate::fs::MemoryThemeFs;

    use super::*;

    #[test]
    fn file_from_theme_returns_readable_candidate() {
        let mut fs = MemoryThemeFs::new();
        fs.insert("/child/theme.json", "{}");
        let dirs = ThemeDirs::new("/child", "/parent");
        let found = dirs.file_from_theme(&fs, "theme.json", false);
        assert_eq!(found, Some(PathBuf::from("/child/theme.json")));
    }

    #[test]
    fn file_from_theme_returns_none_for_missing_file() {
        let fs = MemoryThemeFs::new();
        let dirs = ThemeDirs::new("/child", "/parent");
        assert_eq!(dirs.file_from_theme(&fs, "theme.json", false), None);
    }

    #[test]
    fn template_flag_selects_parent_directory() {
        let mut fs = MemoryThemeFs::new();
        fs.insert("/parent/theme.json", "{}");
        let dirs = ThemeDirs::new("/child", "/parent");
        assert_eq!(dirs.file_from_theme(&fs, "theme.json", false), None);
        assert_eq!(
            dirs.file_from_theme(&fs, "theme.json", true),
            Some(PathBuf::from("/parent/theme.json"))
        );
    }

    #[test]
    fn standalone_uses_one_directory_for_both_roles() {
        let mut fs = MemoryThemeFs::new();
        fs.insert("/theme/theme.json", "{}");
        let dirs = ThemeDirs::standalone("/theme");
        assert!(dirs.file_from_theme(&fs, "theme.json", false).is_some());
        assert!(dirs.file_from_theme(&fs, "theme.json", true).is_some());
    }
}
