// crates/themekit-resolver/src/resolver.rs
// ============================================================================
// Module: Namespace Class Resolver
// Description: Resolve class identifiers to class files on disk.
// Purpose: Implement the convention-over-configuration class file layout.
// Dependencies: themekit-core, thiserror, tracing
// ============================================================================

//! ## Overview
//! A class identifier in a recognized namespace maps to a file path: the
//! non-leaf segments form a directory path under the class root, the leaf
//! segment forms the file stem, and a fixed role prefix
//! (`class-`/`abstract-`/`interface-`) selects which kind of definition the
//! file holds. Prefixes are probed in priority order; the first existing file
//! wins.
//!
//! Invariants:
//! - Resolution is deterministic: one identifier plus one filesystem state
//!   always selects the same file.
//! - Identifiers outside the recognized namespaces are declined without
//!   touching the filesystem.
//! - A recognized identifier with no candidate file is a packaging defect
//!   and resolves to an error naming the searched directory.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use themekit_core::ClassId;
use themekit_core::ThemeDirs;
use themekit_core::ThemeFs;
use themekit_core::normalize_segment;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Built-in namespace every resolver recognizes.
pub const DEFAULT_NAMESPACE: &str = "Themekit";

/// Default class root directory relative to the stylesheet directory.
pub const DEFAULT_CLASS_ROOT: &str = "/classes";

/// File extension of class artifacts.
pub const ARTIFACT_EXTENSION: &str = "php";

/// Role prefixes in probe priority order: concrete class wins over abstract
/// class, which wins over interface.
pub const ROLE_PREFIXES: [ClassRole; 3] =
    [ClassRole::Concrete, ClassRole::Abstract, ClassRole::Interface];

// ============================================================================
// SECTION: Class Roles
// ============================================================================

/// Kind of type definition a class file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassRole {
    /// Concrete class definition (`class-` prefix).
    Concrete,
    /// Abstract class definition (`abstract-` prefix).
    Abstract,
    /// Interface definition (`interface-` prefix).
    Interface,
}

impl ClassRole {
    /// Returns the filename prefix for this role.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Concrete => "class",
            Self::Abstract => "abstract",
            Self::Interface => "interface",
        }
    }
}

impl fmt::Display for ClassRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

// ============================================================================
// SECTION: Resolution Results
// ============================================================================

/// A class file located and loaded by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedClass {
    /// Path of the chosen class file.
    pub path: PathBuf,
    /// Role prefix that matched.
    pub role: ClassRole,
    /// File contents.
    pub source: String,
}

/// Outcome of a resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The identifier was claimed and its class file loaded.
    Loaded(LoadedClass),
    /// The identifier is outside the recognized namespaces; other resolvers
    /// may claim it.
    Declined,
}

/// Class resolution errors.
///
/// # Invariants
/// - `MissingArtifact` messages name the searched directory.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No class file exists under any role prefix for a recognized
    /// identifier. This is a packaging defect, not a recoverable condition.
    #[error("the class file attempting to be loaded at {directory} does not exist")]
    MissingArtifact {
        /// Directory that was searched, with a trailing separator.
        directory: String,
    },
    /// A candidate file exists but could not be read.
    #[error("class file read failed: {0}")]
    Io(String),
}

// ============================================================================
// SECTION: Class Resolver
// ============================================================================

/// Resolves class identifiers to class files under a theme directory.
///
/// # Invariants
/// - The recognized namespace set is fixed at construction and always
///   contains [`DEFAULT_NAMESPACE`].
/// - The class root carries no trailing separator.
#[derive(Debug, Clone)]
pub struct ClassResolver<F: ThemeFs> {
    /// Filesystem the resolver probes.
    fs: F,
    /// Theme directories anchoring the class root.
    dirs: ThemeDirs,
    /// Recognized namespace names.
    namespaces: BTreeSet<String>,
    /// Class root relative to the stylesheet directory, trailing `/` trimmed.
    root: String,
}

impl<F: ThemeFs> ClassResolver<F> {
    /// Creates a resolver with the default namespace set and class root.
    #[must_use]
    pub fn new(fs: F, dirs: ThemeDirs) -> Self {
        Self::with_options(fs, dirs, Vec::new(), DEFAULT_CLASS_ROOT)
    }

    /// Creates a resolver recognizing extra namespaces under a custom root.
    ///
    /// [`DEFAULT_NAMESPACE`] is always merged into the recognized set.
    #[must_use]
    pub fn with_options(
        fs: F,
        dirs: ThemeDirs,
        namespaces: impl IntoIterator<Item = String>,
        root: &str,
    ) -> Self {
        let mut recognized: BTreeSet<String> = namespaces.into_iter().collect();
        recognized.insert(DEFAULT_NAMESPACE.to_string());
        Self {
            fs,
            dirs,
            namespaces: recognized,
            root: root.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the recognized namespace names.
    #[must_use]
    pub fn namespaces(&self) -> &BTreeSet<String> {
        &self.namespaces
    }

    /// Resolves a class identifier.
    ///
    /// Identifiers outside the recognized namespaces are declined without any
    /// filesystem access. For recognized identifiers, candidate files are
    /// probed per [`ROLE_PREFIXES`] order and the first existing file is
    /// loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingArtifact`] when a recognized identifier
    /// has no candidate file under any role prefix, and [`ResolveError::Io`]
    /// when the chosen file cannot be read.
    pub fn resolve(&self, class_id: &ClassId) -> Result<Resolution, ResolveError> {
        if !self.is_in_namespaces(class_id) {
            return Ok(Resolution::Declined);
        }
        let segments: Vec<&str> = class_id.segments().collect();
        let Some((leaf, namespace_segments)) = segments.split_last() else {
            return Ok(Resolution::Declined);
        };

        let file_name = format!("{}.{ARTIFACT_EXTENSION}", normalize_segment(leaf));
        let directory = self.class_directory(namespace_segments);

        for role in ROLE_PREFIXES {
            let candidate = directory.join(format!("{}-{file_name}", role.prefix()));
            if self.fs.is_readable(&candidate) {
                let source = self
                    .fs
                    .read_to_string(&candidate)
                    .map_err(|err| ResolveError::Io(err.to_string()))?;
                tracing::debug!(
                    class = %class_id,
                    path = %candidate.display(),
                    role = %role,
                    "loaded theme class file"
                );
                return Ok(Resolution::Loaded(LoadedClass {
                    path: candidate,
                    role,
                    source,
                }));
            }
        }

        Err(ResolveError::MissingArtifact {
            directory: format!("{}/", directory.display()),
        })
    }

    /// Returns whether the identifier contains a recognized namespace name.
    fn is_in_namespaces(&self, class_id: &ClassId) -> bool {
        self.namespaces.iter().any(|namespace| class_id.as_str().contains(namespace.as_str()))
    }

    /// Builds the directory searched for the given non-leaf segments.
    fn class_directory(&self, namespace_segments: &[&str]) -> PathBuf {
        let mut directory = self.dirs.stylesheet_dir().to_path_buf();
        let root = self.root.trim_start_matches('/');
        if !root.is_empty() {
            directory.push(root);
        }
        for segment in namespace_segments {
            directory.push(normalize_segment(segment));
        }
        directory
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

    use std::path::Path;

    use themekit_core::MemoryThemeFs;

    use super::*;

    fn resolver(files: &[(&str, &str)]) -> ClassResolver<MemoryThemeFs> {
        let mut fs = MemoryThemeFs::new();
        for (path, contents) in files {
            fs.insert(*path, *contents);
        }
        ClassResolver::new(fs, ThemeDirs::standalone("/theme"))
    }

    #[test]
    fn resolves_concrete_class_file() {
        let resolver = resolver(&[("/theme/classes/themekit/utils/class-logger.php", "<?php")]);
        let resolution = resolver.resolve(&ClassId::new("Themekit\\Utils\\Logger")).unwrap();
        let Resolution::Loaded(loaded) = resolution else {
            panic!("expected a loaded class");
        };
        assert_eq!(loaded.path, Path::new("/theme/classes/themekit/utils/class-logger.php"));
        assert_eq!(loaded.role, ClassRole::Concrete);
        assert_eq!(loaded.source, "<?php");
    }

    #[test]
    fn concrete_prefix_wins_over_interface() {
        let resolver = resolver(&[
            ("/theme/classes/themekit/class-foo.php", "concrete"),
            ("/theme/classes/themekit/interface-foo.php", "interface"),
        ]);
        let resolution = resolver.resolve(&ClassId::new("Themekit\\Foo")).unwrap();
        let Resolution::Loaded(loaded) = resolution else {
            panic!("expected a loaded class");
        };
        assert_eq!(loaded.role, ClassRole::Concrete);
        assert_eq!(loaded.source, "concrete");
    }

    #[test]
    fn abstract_prefix_wins_over_interface() {
        let resolver = resolver(&[
            ("/theme/classes/themekit/abstract-foo.php", "abstract"),
            ("/theme/classes/themekit/interface-foo.php", "interface"),
        ]);
        let resolution = resolver.resolve(&ClassId::new("Themekit\\Foo")).unwrap();
        let Resolution::Loaded(loaded) = resolution else {
            panic!("expected a loaded class");
        };
        assert_eq!(loaded.role, ClassRole::Abstract);
    }

    #[test]
    fn segments_are_lowercased_and_hyphenated() {
        let resolver =
            resolver(&[("/theme/classes/themekit/subns/class-my-widget.php", "<?php")]);
        let resolution = resolver.resolve(&ClassId::new("Themekit\\SubNS\\My_Widget")).unwrap();
        assert!(matches!(resolution, Resolution::Loaded(_)));
    }

    #[test]
    fn unrecognized_namespace_is_declined_without_fs_access() {
        let resolver = resolver(&[]);
        let resolution = resolver.resolve(&ClassId::new("Vendor\\Thing")).unwrap();
        assert_eq!(resolution, Resolution::Declined);
    }

    #[test]
    fn extra_namespaces_are_recognized() {
        let mut fs = MemoryThemeFs::new();
        fs.insert("/theme/classes/acme/class-thing.php", "<?php");
        let resolver = ClassResolver::with_options(
            fs,
            ThemeDirs::standalone("/theme"),
            vec!["Acme".to_string()],
            DEFAULT_CLASS_ROOT,
        );
        let resolution = resolver.resolve(&ClassId::new("Acme\\Thing")).unwrap();
        assert!(matches!(resolution, Resolution::Loaded(_)));
    }

    #[test]
    fn missing_artifact_error_names_searched_directory() {
        let resolver = resolver(&[]);
        let err = resolver.resolve(&ClassId::new("Themekit\\Absent")).unwrap_err();
        assert!(
            err.to_string().contains("/theme/classes/"),
            "error should name the searched directory: {err}"
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = resolver(&[
            ("/theme/classes/themekit/class-foo.php", "concrete"),
            ("/theme/classes/themekit/abstract-foo.php", "abstract"),
        ]);
        let id = ClassId::new("Themekit\\Foo");
        let first = resolver.resolve(&id).unwrap();
        let second = resolver.resolve(&id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_root_trailing_slash_is_trimmed() {
        let mut fs = MemoryThemeFs::new();
        fs.insert("/theme/lib/themekit/class-thing.php", "<?php");
        let resolver = ClassResolver::with_options(
            fs,
            ThemeDirs::standalone("/theme"),
            Vec::new(),
            "/lib/",
        );
        let resolution = resolver.resolve(&ClassId::new("Themekit\\Thing")).unwrap();
        assert!(matches!(resolution, Resolution::Loaded(_)));
    }
}
