//! Error types for index construction and reference resolution.

use thiserror::Error;

use crate::record::RawRecord;

/// Why a raw record was rejected at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedRecordKind {
    /// The record's label is the empty string.
    EmptyLabel,
    /// The record carries no references to link to.
    NoReferences,
    /// The label normalizes to an empty display key, so no query could
    /// ever reach it.
    UnsearchableLabel,
}

impl std::fmt::Display for MalformedRecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "empty label"),
            Self::NoReferences => write!(f, "no references"),
            Self::UnsearchableLabel => write!(f, "label has no searchable characters"),
        }
    }
}

/// A raw record the index refused to ingest.
///
/// Carries the offending record so callers can report or repair it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("record {position} rejected: {kind}")]
pub struct MalformedRecord {
    /// Zero-based position in the producer's record sequence.
    pub position: usize,
    pub kind: MalformedRecordKind,
    pub record: RawRecord,
}

/// The reference index passed to [`Entry::resolve`](crate::Entry::resolve)
/// was out of bounds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("reference {index} out of range for \"{label}\" ({len} references)")]
pub struct ReferenceOutOfRange {
    /// Label of the entry being resolved.
    pub label: String,
    /// The rejected reference index.
    pub index: usize,
    /// Number of references the entry actually has.
    pub len: usize,
}

/// Error loading an index from the producer's serialized record stream.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The record stream was not valid JSON in the expected shape.
    #[error("failed to parse record stream: {0}")]
    Parse(#[from] serde_json::Error),
    /// A record failed structural validation.
    #[error(transparent)]
    Malformed(#[from] MalformedRecord),
}
