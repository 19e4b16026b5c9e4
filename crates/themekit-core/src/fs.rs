// crates/themekit-core/src/fs.rs
// ============================================================================
// Module: Theme Filesystem Seam
// Description: Minimal read-only filesystem abstraction for theme files.
// Purpose: Allow class resolution and settings loading against fake files.
// Dependencies: thiserror, std
// ============================================================================

//! ## Overview
//! Themekit reads exactly two kinds of files: class artifacts and settings
//! documents. [`ThemeFs`] is the seam both go through. [`OsThemeFs`] backs it
//! with `std::fs`; [`MemoryThemeFs`] is an in-memory reference implementation
//! for tests and embedded use.
//!
//! Invariants:
//! - Implementations are read-only; nothing in this workspace writes files.
//! - `is_readable` must not report paths `read_to_string` would reject.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// SECTION: Filesystem Errors
// ============================================================================

/// Errors emitted by [`ThemeFs`] implementations.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum FsError {
    /// The requested file does not exist.
    #[error("file not found: {0}")]
    NotFound(String),
    /// I/O failure while reading a file.
    #[error("file read error: {0}")]
    Io(String),
}

// ============================================================================
// SECTION: Filesystem Trait
// ============================================================================

/// Read-only filesystem surface used by Themekit.
pub trait ThemeFs {
    /// Returns whether `path` names a readable regular file.
    fn is_readable(&self, path: &Path) -> bool;

    /// Reads the full contents of `path` as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`FsError`] when the file is absent or cannot be read.
    fn read_to_string(&self, path: &Path) -> Result<String, FsError>;
}

// ============================================================================
// SECTION: OS Implementation
// ============================================================================

/// [`ThemeFs`] backed by the operating system filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsThemeFs;

impl ThemeFs for OsThemeFs {
    fn is_readable(&self, path: &Path) -> bool {
        path.is_file() && fs::File::open(path).is_ok()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        fs::read_to_string(path).map_err(|err| FsError::Io(err.to_string()))
    }
}

// ============================================================================
// SECTION: In-Memory Implementation
// ============================================================================

/// In-memory [`ThemeFs`] reference implementation.
///
/// # Invariants
/// - Every inserted path is readable; removal makes it unreadable again.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeFs {
    /// Mapping from path to file contents.
    files: BTreeMap<PathBuf, String>,
}

impl MemoryThemeFs {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) a file under `path`.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Removes the file under `path`, returning its contents if present.
    pub fn remove(&mut self, path: &Path) -> Option<String> {
        self.files.remove(path)
    }

    /// Returns the number of stored files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns whether no files are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ThemeFs for MemoryThemeFs {
    fn is_readable(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.display().to_string()))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
