//! # ll-store-memory
//!
//! In-memory implementations of `RequestRepo` and `ForumRepo`.
//! Records live in maps keyed by id; listing order comes from a
//! store-owned sequence so deletions or clock skew never reorder anything.

mod forum;
mod requests;

pub use forum::InMemoryForumStore;
pub use requests::InMemoryRequestStore;

/// A stored record plus its insertion sequence number.
#[derive(Debug, Clone)]
struct Entry<T> {
    seq: u64,
    record: T,
}

/// Clones the records out of `entries`, highest sequence (newest) first.
fn newest_first<T: Clone>(mut entries: Vec<Entry<T>>) -> Vec<T> {
    entries.sort_unstable_by(|a, b| b.seq.cmp(&a.seq));
    entries.into_iter().map(|e| e.record).collect()
}
