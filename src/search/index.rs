//! The symbol index: construction, lookup, and resolve-on-select.

use std::time::Instant;

use crate::entry::{Entry, Reference};
use crate::error::{LoadError, MalformedRecord};
use crate::record::{RawRecord, parse_records};

use super::normalize::normalize_key;
use super::scoring::{MatchTier, entry_order, match_tier};

/// Default prefix-match count below which substring matches fill results.
const DEFAULT_MIN_PREFIX_MATCHES: usize = 5;

/// Per-query knobs for [`SymbolIndex::search_with`].
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// When fewer prefix matches than this exist, substring matches are
    /// appended so a query landing mid-token (`AdjList` against
    /// `GraphAdjList`) still returns results.
    pub min_prefix_matches: usize,
    /// Cap on the number of returned entries; `None` returns every match.
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_prefix_matches: DEFAULT_MIN_PREFIX_MATCHES,
            limit: None,
        }
    }
}

/// An immutable lookup table from symbol names to their link targets.
///
/// Built once from the documentation generator's record set and rebuilt
/// wholesale when the documentation changes. Queries are pure reads over
/// frozen data, so the index can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct SymbolIndex {
    /// Entries in producer emission order.
    entries: Vec<Entry>,
    /// Entry positions ordered by `(display_key, first scope)`. Prefix
    /// queries binary-search this instead of scanning `entries`.
    sorted: Vec<u32>,
}

impl SymbolIndex {
    /// Builds an index, aborting on the first malformed record.
    pub fn build<I>(records: I) -> Result<Self, MalformedRecord>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let start = Instant::now();
        let mut entries = Vec::new();
        for (position, record) in records.into_iter().enumerate() {
            entries.push(ingest(record, position)?);
        }
        Ok(Self::finish(entries, 0, start))
    }

    /// Builds an index, skipping malformed records and collecting them.
    ///
    /// One bad record never disables the whole index; callers that care
    /// about completeness inspect the returned rejects.
    pub fn build_lossy<I>(records: I) -> (Self, Vec<MalformedRecord>)
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let start = Instant::now();
        let mut entries = Vec::new();
        let mut rejected = Vec::new();
        for (position, record) in records.into_iter().enumerate() {
            match ingest(record, position) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    tracing::warn!("skipping record {}: {}", err.position, err.kind);
                    rejected.push(err);
                }
            }
        }
        let index = Self::finish(entries, rejected.len(), start);
        (index, rejected)
    }

    /// Parses the producer's serialized record stream and builds strictly.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let records = parse_records(text)?;
        Ok(Self::build(records)?)
    }

    /// Parses the producer's serialized record stream and builds lossily.
    ///
    /// Parse failures are still fatal: without valid JSON there is no
    /// record boundary left to skip to.
    pub fn from_json_lossy(text: &str) -> Result<(Self, Vec<MalformedRecord>), LoadError> {
        let records = parse_records(text)?;
        Ok(Self::build_lossy(records))
    }

    fn finish(entries: Vec<Entry>, rejected: usize, start: Instant) -> Self {
        let mut sorted: Vec<u32> = (0..entries.len() as u32).collect();
        sorted.sort_by(|&a, &b| entry_order(&entries[a as usize], &entries[b as usize]));

        tracing::info!(
            "Built symbol index: {} entries, {} rejected, in {:?}",
            entries.len(),
            rejected,
            start.elapsed()
        );

        Self { entries, sorted }
    }

    /// Looks up `query` with default [`SearchOptions`].
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        self.search_with(query, SearchOptions::default())
    }

    /// Looks up `query` against entry display keys.
    ///
    /// Prefix matches come first; when they number fewer than
    /// `options.min_prefix_matches`, substring matches are appended. Both
    /// tiers are ordered by display key, then by the first reference's
    /// scope for entries sharing a key. An empty query (or one that
    /// normalizes to nothing) returns no results rather than everything.
    pub fn search_with(&self, query: &str, options: SearchOptions) -> Vec<&Entry> {
        let needle = normalize_key(query);
        if needle.is_empty() {
            return Vec::new();
        }

        // In the sorted view the prefix tier is one contiguous run.
        let lo = self
            .sorted
            .partition_point(|&i| self.entry_at(i).display_key() < needle.as_str());
        let prefix_len = self.sorted[lo..]
            .partition_point(|&i| self.entry_at(i).display_key().starts_with(&needle));

        let mut results: Vec<&Entry> = self.sorted[lo..lo + prefix_len]
            .iter()
            .map(|&i| self.entry_at(i))
            .collect();

        if results.len() < options.min_prefix_matches {
            results.extend(
                self.sorted
                    .iter()
                    .map(|&i| self.entry_at(i))
                    .filter(|entry| {
                        match_tier(entry.display_key(), &needle) == Some(MatchTier::Substring)
                    }),
            );
        }

        tracing::debug!(
            "query {:?} matched {} entries ({} by prefix)",
            query,
            results.len(),
            prefix_len
        );

        if let Some(limit) = options.limit {
            results.truncate(limit);
        }
        results
    }

    /// Number of entries in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the index holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in producer emission order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    fn entry_at(&self, i: u32) -> &Entry {
        &self.entries[i as usize]
    }
}

/// Validates one raw record and freezes it into an entry.
fn ingest(record: RawRecord, position: usize) -> Result<Entry, MalformedRecord> {
    if let Some(kind) = record.malformed_kind() {
        return Err(MalformedRecord {
            position,
            kind,
            record,
        });
    }

    let display_key = normalize_key(&record.label);
    let references = record
        .references
        .into_iter()
        .map(|raw| Reference {
            scope: raw.scope,
            scope_label: raw.scope_label,
            anchor_url: raw.anchor_url,
            is_declaration_only: raw.is_declaration_only,
        })
        .collect();

    Ok(Entry::new(display_key, record.label, references))
}
