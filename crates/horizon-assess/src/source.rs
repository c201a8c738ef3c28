//! Sources of ranked results.
//!
//! A [`ResultSource`] is an ordered, finite, indexable sequence of results.
//! It may pair each result with a pre-existing [`EditEntry`], which is how a
//! previously saved assessment session is reloaded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::edits::EditEntry;

/// An ordered sequence of ranked results.
pub trait ResultSource {
    /// The result type.
    type Item;

    /// Returns the number of results.
    fn len(&self) -> usize;

    /// Returns the result at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns the edit entry paired with the result at `index`, if any.
    fn entry(&self, _index: usize) -> Option<EditEntry> {
        None
    }

    /// Returns `true` if there are no results.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R> ResultSource for [R] {
    type Item = R;

    fn len(&self) -> usize {
        <[R]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&R> {
        <[R]>::get(self, index)
    }
}

impl<R> ResultSource for Vec<R> {
    type Item = R;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&R> {
        self.as_slice().get(index)
    }
}

/// A saved assessment sample: results plus the edits made to them.
///
/// # Example
///
/// ```
/// use horizon_assess::{EditEntry, ResultSource, Sample};
///
/// let sample = Sample::new(vec!["cafe", "museum"])
///     .with_entry(EditEntry::new(1, true));
///
/// assert_eq!(sample.len(), 2);
/// assert_eq!(sample.entry(1), Some(EditEntry::new(1, true)));
/// assert_eq!(sample.entry(0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample<R> {
    results: Vec<R>,
    entries: BTreeMap<usize, EditEntry>,
}

impl<R> Default for Sample<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R> Sample<R> {
    /// Creates a sample with no edits.
    pub fn new(results: Vec<R>) -> Self {
        Self {
            results,
            entries: BTreeMap::new(),
        }
    }

    /// Attaches an edit entry, replacing any entry with the same index.
    pub fn with_entry(mut self, entry: EditEntry) -> Self {
        self.set_entry(entry);
        self
    }

    /// Attaches an edit entry, replacing any entry with the same index.
    pub fn set_entry(&mut self, entry: EditEntry) {
        self.entries.insert(entry.index, entry);
    }

    /// Creates a sample from results paired with their edits.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, Option<EditEntry>)>,
    {
        let mut sample = Self::new(Vec::new());
        for (result, entry) in pairs {
            let index = sample.results.len();
            sample.results.push(result);
            if let Some(entry) = entry {
                sample.set_entry(EditEntry::new(index, entry.deleted));
            }
        }
        sample
    }

    /// Returns the results.
    pub fn results(&self) -> &[R] {
        &self.results
    }
}

impl<R> ResultSource for Sample<R> {
    type Item = R;

    fn len(&self) -> usize {
        self.results.len()
    }

    fn get(&self, index: usize) -> Option<&R> {
        self.results.get(index)
    }

    fn entry(&self, index: usize) -> Option<EditEntry> {
        if index < self.results.len() {
            self.entries.get(&index).copied()
        } else {
            None
        }
    }
}
