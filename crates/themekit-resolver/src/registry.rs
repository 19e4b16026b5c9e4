// crates/themekit-resolver/src/registry.rs
// ============================================================================
// Module: Startup Class Registry
// Description: Eagerly resolved mapping from class identifiers to class files.
// Purpose: Validate a theme's declared class set at startup, failing fast.
// Dependencies: themekit-core, tracing, crate::resolver
// ============================================================================

//! ## Overview
//! Instead of resolving class files lazily at first reference, a theme
//! declares its class identifiers up front and builds a [`ClassRegistry`]
//! during bootstrap. Every declared identifier is resolved immediately: a
//! recognized identifier with no class file aborts the build, surfacing
//! packaging defects at startup rather than mid-request.
//!
//! Invariants:
//! - A registry only ever holds successfully loaded classes.
//! - Declined identifiers are recorded as unclaimed, never as errors.
//! - Iteration order is deterministic (identifier order).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use themekit_core::ClassId;
use themekit_core::ThemeFs;

use crate::resolver::ClassResolver;
use crate::resolver::LoadedClass;
use crate::resolver::Resolution;
use crate::resolver::ResolveError;

// ============================================================================
// SECTION: Class Registry
// ============================================================================

/// Eagerly resolved class set for a theme.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    /// Claimed identifiers mapped to their loaded class files.
    classes: BTreeMap<ClassId, LoadedClass>,
    /// Identifiers outside the recognized namespaces.
    unclaimed: BTreeSet<ClassId>,
}

impl ClassRegistry {
    /// Builds a registry by resolving every declared identifier.
    ///
    /// Duplicate declarations are resolved once. Declined identifiers are
    /// kept as unclaimed so the host can fall through to other resolvers.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] as soon as any recognized identifier has no
    /// class file, naming the searched directory.
    pub fn build<F: ThemeFs>(
        resolver: &ClassResolver<F>,
        declared: impl IntoIterator<Item = ClassId>,
    ) -> Result<Self, ResolveError> {
        let mut classes = BTreeMap::new();
        let mut unclaimed = BTreeSet::new();
        for class_id in declared {
            if classes.contains_key(&class_id) || unclaimed.contains(&class_id) {
                continue;
            }
            match resolver.resolve(&class_id)? {
                Resolution::Loaded(loaded) => {
                    classes.insert(class_id, loaded);
                }
                Resolution::Declined => {
                    tracing::debug!(class = %class_id, "identifier left to other resolvers");
                    unclaimed.insert(class_id);
                }
            }
        }
        Ok(Self { classes, unclaimed })
    }

    /// Returns the loaded class for a claimed identifier.
    #[must_use]
    pub fn get(&self, class_id: &ClassId) -> Option<&LoadedClass> {
        self.classes.get(class_id)
    }

    /// Returns whether the identifier was claimed and loaded.
    #[must_use]
    pub fn is_claimed(&self, class_id: &ClassId) -> bool {
        self.classes.contains_key(class_id)
    }

    /// Returns whether the identifier was declared but left unclaimed.
    #[must_use]
    pub fn is_unclaimed(&self, class_id: &ClassId) -> bool {
        self.unclaimed.contains(class_id)
    }

    /// Returns the number of claimed classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns whether no classes were claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates claimed classes in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&ClassId, &LoadedClass)> {
        self.classes.iter()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
