// crates/themekit-core/src/lib.rs
// ============================================================================
// Module: Themekit Core Library
// Description: Shared vocabulary for Themekit crates.
// Purpose: Class identifiers, theme directories, filesystem seam, and utils.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `themekit-core` defines the types shared across the Themekit workspace:
//! theme class identifiers and their path normalization rules, the
//! stylesheet/template directory pair, the [`ThemeFs`] filesystem seam with
//! OS-backed and in-memory implementations, and the small utilities
//! (version checker, timer, pretty-dump) used by theme bootstrap code.
//!
//! All filesystem access in the workspace goes through [`ThemeFs`] so that
//! consumers can substitute fake file contents in tests.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod class_id;
pub mod dirs;
pub mod dump;
pub mod fs;
pub mod timer;
pub mod version;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use class_id::ClassId;
pub use class_id::NAMESPACE_SEPARATOR;
pub use class_id::normalize_segment;
pub use dirs::ThemeDirs;
pub use dump::pretty_json;
pub use fs::FsError;
pub use fs::MemoryThemeFs;
pub use fs::OsThemeFs;
pub use fs::ThemeFs;
pub use timer::Timer;
pub use version::Version;
pub use version::VersionError;
