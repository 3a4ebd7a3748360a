//! Display-key normalization shared by index construction and queries.

/// Derives the lookup key for a symbol label.
///
/// Case-folds and strips punctuation so that `getNext`, `GETNEXT`, and
/// `get_next` all normalize to `getnext`. Unicode alphanumerics survive;
/// separators, operator glyphs, and template brackets do not. Query text
/// goes through the same derivation, so a key and the queries that should
/// reach it can never disagree on folding rules.
pub(crate) fn normalize_key(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
