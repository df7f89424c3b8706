//! Name matching and owner-label composition.
//!
//! Matching is a case-insensitive substring test against the tracked
//! fragments, with no locale-sensitive collation: both sides are
//! lowercased with the locale-independent Unicode mapping and compared
//! byte for byte.

use super::registry::TrackedNames;

/// Does any tracked fragment appear in `candidate`, ignoring case?
///
/// Short-circuits on the first matching fragment. An empty registry never
/// matches anything; callers are expected to skip scanning entirely in
/// that case rather than probe every item against an empty set.
pub fn matches_any(candidate: &str, names: &TrackedNames) -> bool {
    if names.is_empty() {
        return false;
    }

    let candidate = candidate.to_lowercase();
    names
        .iter()
        .any(|fragment| candidate.contains(&fragment.to_lowercase()))
}

/// Compose the display name for an item found under `owner`.
///
/// Nested matches are disambiguated with their owner ("Bolts (in
/// Toolbox)") so same-named items in different containers stay apart.
/// When the item's own name already equals the owner label verbatim, the
/// suffix would be redundant and the bare name is kept.
pub fn compose_label(item_name: &str, owner: &str) -> String {
    if item_name == owner {
        item_name.to_string()
    } else {
        format!("{} (in {})", item_name, owner)
    }
}
