//! The documentation generator's raw record format.
//!
//! The producer emits an ordered list of `[label, [reference, ...]]`
//! pairs, each reference a positional 4-tuple
//! `[scope, scope_label, anchor_url, is_declaration_only]`. These types
//! mirror that wire shape one-to-one; structural validation happens when
//! an index is built from them.

use serde::Deserialize;

use crate::error::MalformedRecordKind;
use crate::search::normalize_key;

/// One reference tuple as emitted by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ReferenceTuple")]
pub struct RawReference {
    /// Enclosing namespace/class name, or empty if global.
    pub scope: String,
    /// Display form of the scope, possibly decorated (e.g. a file scope).
    pub scope_label: String,
    /// Relative URL fragment for the page and in-page anchor.
    pub anchor_url: String,
    /// True when this links to the defining page of a type or file itself
    /// rather than a member anchor within one.
    pub is_declaration_only: bool,
}

#[derive(Deserialize)]
struct ReferenceTuple(String, String, String, bool);

impl From<ReferenceTuple> for RawReference {
    fn from(t: ReferenceTuple) -> Self {
        Self {
            scope: t.0,
            scope_label: t.1,
            anchor_url: t.2,
            is_declaration_only: t.3,
        }
    }
}

/// One record pair as emitted by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RecordTuple")]
pub struct RawRecord {
    /// Human-readable symbol name.
    pub label: String,
    /// Link targets in emission order, one per overload/occurrence.
    pub references: Vec<RawReference>,
}

#[derive(Deserialize)]
struct RecordTuple(String, Vec<RawReference>);

impl From<RecordTuple> for RawRecord {
    fn from(t: RecordTuple) -> Self {
        Self {
            label: t.0,
            references: t.1,
        }
    }
}

impl RawRecord {
    /// Checks the structural invariants the index relies on.
    pub(crate) fn malformed_kind(&self) -> Option<MalformedRecordKind> {
        if self.label.is_empty() {
            Some(MalformedRecordKind::EmptyLabel)
        } else if self.references.is_empty() {
            Some(MalformedRecordKind::NoReferences)
        } else if normalize_key(&self.label).is_empty() {
            Some(MalformedRecordKind::UnsearchableLabel)
        } else {
            None
        }
    }
}

/// Parses the producer's serialized record stream.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>, serde_json::Error> {
    serde_json::from_str(text)
}
