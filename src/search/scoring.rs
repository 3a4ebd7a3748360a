//! Match classification and result ordering.

use std::cmp::Ordering;

use crate::entry::Entry;

/// How a display key matched the query needle.
///
/// `Ord` puts `Prefix` before `Substring`, the order the tiers appear in
/// a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum MatchTier {
    /// Key starts with the needle.
    Prefix,
    /// Key contains the needle somewhere past the start.
    Substring,
}

/// Classifies how `key` matches `needle`, or `None` for no match at all.
/// Both sides must already be normalized.
pub(crate) fn match_tier(key: &str, needle: &str) -> Option<MatchTier> {
    if key.starts_with(needle) {
        Some(MatchTier::Prefix)
    } else if key.contains(needle) {
        Some(MatchTier::Substring)
    } else {
        None
    }
}

/// Ordering within one match tier: display key lexicographically, then
/// the first reference's scope for entries sharing a key.
pub(crate) fn entry_order(a: &Entry, b: &Entry) -> Ordering {
    a.display_key()
        .cmp(b.display_key())
        .then_with(|| a.primary_scope().cmp(b.primary_scope()))
}
