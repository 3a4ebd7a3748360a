//! Result model for symbol lookups.

use serde::Serialize;

use crate::error::ReferenceOutOfRange;

/// One concrete link target for an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Enclosing namespace/class name, or empty if global.
    pub scope: String,
    /// Display form of the scope, possibly decorated (e.g. a file scope).
    pub scope_label: String,
    /// Relative URL fragment for the page and in-page anchor.
    pub anchor_url: String,
    /// True when this is the defining page of a type or file itself rather
    /// than a member anchor within one.
    pub is_declaration_only: bool,
}

/// One unique symbol occurrence with all of its link targets.
///
/// Entries are frozen once the index is built. `references` keeps the
/// producer's emission order; two entries may share a label while living
/// in unrelated scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    display_key: String,
    label: String,
    references: Vec<Reference>,
}

impl Entry {
    /// Callers must have validated that `references` is non-empty.
    pub(crate) fn new(display_key: String, label: String, references: Vec<Reference>) -> Self {
        debug_assert!(!references.is_empty());
        Self {
            display_key,
            label,
            references,
        }
    }

    /// Normalized lookup key this entry matches under.
    pub fn display_key(&self) -> &str {
        &self.display_key
    }

    /// Human-readable symbol name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Link targets in emission order, one per overload/occurrence.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Scope of the first reference; tie-break key for entries sharing a
    /// display key.
    pub(crate) fn primary_scope(&self) -> &str {
        &self.references[0].scope
    }

    /// Returns the anchor URL of the reference a user selected.
    pub fn resolve(&self, reference_index: usize) -> Result<&str, ReferenceOutOfRange> {
        self.references
            .get(reference_index)
            .map(|r| r.anchor_url.as_str())
            .ok_or_else(|| ReferenceOutOfRange {
                label: self.label.clone(),
                index: reference_index,
                len: self.references.len(),
            })
    }
}
