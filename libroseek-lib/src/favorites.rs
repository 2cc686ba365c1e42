//! The ordered collection of favorited books.

use std::collections::HashSet;

use log::trace;

use crate::{book::BookSummary, Error, ErrorKind};

/// An ordered collection of favorited book summaries.
///
/// Entries keep insertion order (most-recently-added last) and no two
/// entries share an id. The collection is loaded once at startup and every
/// mutation marks it dirty so the caller knows to rewrite the backing file.
#[derive(Debug, Default)]
pub struct Favorites {
    dirty: bool,
    entries: Vec<BookSummary>,
}

impl Favorites {
    /// Create a collection from a list of summaries.
    ///
    /// Later entries sharing an id with an earlier one are discarded so the
    /// uniqueness invariant holds even for stored text edited by hand.
    #[must_use]
    pub fn new(mut entries: Vec<BookSummary>) -> Self {
        let mut seen = HashSet::new();
        entries.retain(|entry| seen.insert(entry.id.clone()));

        Self {
            dirty: false,
            entries,
        }
    }

    /// Create a collection from persisted JSON text.
    ///
    /// Absent or malformed text is not an error - the collection simply
    /// starts out empty.
    #[must_use]
    pub fn from_json(text: &str) -> Self {
        let entries = serde_json::from_str(text).unwrap_or_else(|err| {
            trace!("Stored favorites are not valid JSON ({err}) - starting with an empty collection");
            Vec::new()
        });
        Self::new(entries)
    }

    /// Serialize the full collection as JSON text.
    ///
    /// # Errors
    ///
    /// An `Err` of kind [`ErrorKind::Deserialize`] when serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(&self.entries).map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
    }

    /// Checks and resets the `dirty` flag.
    ///
    /// The `dirty` flag will return true when this instance has been edited
    /// since it was created. The default value of the `dirty` flag is
    /// `false`, therefore calling this function will always reset the
    /// `dirty` flag to `false`.
    pub fn dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    /// True iff an entry with that `id` exists.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Flip membership of `summary`, returning whether the book is now a
    /// favorite.
    ///
    /// If an entry with the same id exists it is removed, otherwise the
    /// summary is appended. Two consecutive toggles of the same id are a net
    /// no-op.
    pub fn toggle(&mut self, summary: BookSummary) -> bool {
        self.dirty = true;
        if let Some(index) = self.entries.iter().position(|entry| entry.id == summary.id) {
            self.entries.remove(index);
            false
        } else {
            self.entries.push(summary);
            true
        }
    }

    /// Remove the entry with that `id`, returning whether anything was
    /// removed. Removing an absent id is a no-op, not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let mut removed = false;
        self.entries.retain(|entry| {
            let keep = entry.id != id;
            removed |= !keep;
            keep
        });

        self.dirty |= removed;
        removed
    }

    /// The favorited summaries in insertion order.
    #[must_use]
    pub fn list(&self) -> &[BookSummary] {
        &self.entries
    }
}
