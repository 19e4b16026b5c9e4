// crates/themekit-resolver/src/lib.rs
// ============================================================================
// Module: Themekit Resolver Library
// Description: Namespace-aware class file resolution for theme layouts.
// Purpose: Map class identifiers to class files and validate them at startup.
// Dependencies: themekit-core, thiserror, tracing
// ============================================================================

//! ## Overview
//! `themekit-resolver` locates theme class files laid out under the
//! convention `<stylesheet_dir>/<root>/<namespace path>/<prefix>-<stem>.php`.
//! [`ClassResolver`] performs single-identifier resolution; [`ClassRegistry`]
//! resolves a theme's declared class set eagerly at startup so that a
//! missing class file fails fast as a packaging defect instead of surfacing
//! lazily at first reference.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod registry;
pub mod resolver;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use registry::ClassRegistry;
pub use resolver::ARTIFACT_EXTENSION;
pub use resolver::ClassResolver;
pub use resolver::ClassRole;
pub use resolver::DEFAULT_CLASS_ROOT;
pub use resolver::DEFAULT_NAMESPACE;
pub use resolver::LoadedClass;
pub use resolver::ROLE_PREFIXES;
pub use resolver::Resolution;
pub use resolver::ResolveError;
