//! In-memory symbol search index for generated API documentation.
//!
//! Built once from a documentation generator's record set, queried with
//! partial symbol names to power a search-as-you-type box.

pub mod entry;
pub mod error;
pub mod record;
pub mod search;

pub use entry::{Entry, Reference};
pub use error::{LoadError, MalformedRecord, MalformedRecordKind, ReferenceOutOfRange};
pub use record::{RawRecord, RawReference, parse_records};
pub use search::{SearchOptions, SymbolIndex};
