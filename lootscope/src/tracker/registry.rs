//! The tracked-name registry.
//!
//! An ordered set of user-maintained name fragments. Membership is exact
//! string identity; matching against item names is the matcher's job and
//! is case-insensitive there, not here.

use serde::{Deserialize, Serialize};

/// Reserved control token: `remove(CLEAR_ALL)` empties the whole set.
pub const CLEAR_ALL: &str = "*";

/// Ordered collection of tracked name fragments.
///
/// Duplicates (by exact string equality) are rejected, as are fragments
/// that could never be a useful pattern: the empty string and
/// whitespace-only strings would match every item name under substring
/// semantics, and [`CLEAR_ALL`] is reserved for [`remove`].
///
/// [`remove`]: TrackedNames::remove
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackedNames(Vec<String>);

impl TrackedNames {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment if it is acceptable and not already present.
    ///
    /// Returns `true` if the fragment was added. Returns `false` (set
    /// unchanged) for duplicates, empty or whitespace-only strings, and
    /// the reserved [`CLEAR_ALL`] token.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.trim().is_empty() || name == CLEAR_ALL {
            return false;
        }
        if self.0.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    /// Remove a fragment by exact match, returning whether it was present.
    ///
    /// Passing [`CLEAR_ALL`] empties a non-empty set and returns `true`;
    /// on an already-empty set it returns `false`.
    pub fn remove(&mut self, name: &str) -> bool {
        if name == CLEAR_ALL {
            if self.0.is_empty() {
                return false;
            }
            self.0.clear();
            return true;
        }

        match self.0.iter().position(|n| n == name) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every fragment.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether a fragment is present, by exact string equality.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Number of tracked fragments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fragments are tracked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fragments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TrackedNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        for name in iter {
            names.add(name);
        }
        names
    }
}
