// crates/themekit-core/src/version.rs
// ============================================================================
// Module: Host Version Checker
// Description: Dotted numeric version parsing and comparison.
// Purpose: Gate theme features on minimum host runtime versions.
// Dependencies: thiserror, std
// ============================================================================

//! ## Overview
//! Host runtimes report versions as dotted numeric strings (`"7.1"`,
//! `"8.0.2"`). Comparison is component-wise numeric with missing trailing
//! components treated as zero, so `"7.1"` equals `"7.1.0"`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// SECTION: Version Errors
// ============================================================================

/// Version parsing errors.
#[derive(Debug, Error)]
pub enum VersionError {
    /// The version string is empty or has a non-numeric component.
    #[error("invalid version: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Version
// ============================================================================

/// Dotted numeric version.
///
/// # Invariants
/// - Holds at least one component; every component is numeric.
/// - Equality and ordering ignore trailing zero components.
#[derive(Debug, Clone)]
pub struct Version(Vec<u64>);

impl Version {
    /// Parses a dotted numeric version string.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError`] when the string is empty or any component is
    /// not a non-negative integer.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Invalid("empty version string".to_string()));
        }
        let components = trimmed
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| VersionError::Invalid(format!("non-numeric component in {trimmed}")))
            })
            .collect::<Result<Vec<u64>, VersionError>>()?;
        Ok(Self(components))
    }

    /// Returns whether this version is greater than or equal to `min`.
    #[must_use]
    pub fn is_at_least(&self, min: &Self) -> bool {
        self >= min
    }

    /// Returns the version components.
    #[must_use]
    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.0.len().max(other.0.len());
        for index in 0..width {
            let left = self.0.get(index).copied().unwrap_or(0);
            let right = other.0.get(index).copied().unwrap_or(0);
            match left.cmp(&right) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
