//! Edit tracking for assessed result lists.
//!
//! [`EditLedger`] records, per result index, whether the assessor has marked
//! the result as deleted, and translates edit requests into [`Update`] events
//! that a [`ResultListController`](crate::ResultListController) applies to its
//! rows.
//!
//! # Example
//!
//! ```
//! use horizon_assess::{EditLedger, Update};
//!
//! let mut ledger = EditLedger::new(3);
//! ledger.updated.connect(|update| println!("edit: {:?}", update));
//!
//! assert_eq!(ledger.mark_deleted(1).unwrap(), Update::Delete(1));
//! assert!(ledger.is_deleted(1));
//! assert!(ledger.has_changes());
//!
//! assert_eq!(ledger.mark_resurrected(1).unwrap(), Update::Resurrect(1));
//! assert!(!ledger.has_changes());
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use horizon_assess_core::{targets, Signal};
use serde::{Deserialize, Serialize};

use crate::error::{check_index, Result};
use crate::source::ResultSource;

/// The edit state of a single result.
///
/// Entries are created the first time a result is edited and are only ever
/// flipped afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditEntry {
    /// Position of the result in its list.
    pub index: usize,
    /// Whether the assessor marked the result as deleted.
    pub deleted: bool,
}

impl EditEntry {
    /// Creates an entry for the given index.
    pub fn new(index: usize, deleted: bool) -> Self {
        Self { index, deleted }
    }
}

/// The kind of an [`Update`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateKind {
    /// One result's content changed.
    Single,
    /// Every result may have changed.
    All,
    /// A result was appended.
    Add,
    /// A result was marked deleted.
    Delete,
    /// A deleted result was restored.
    Resurrect,
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "single",
            Self::All => "all",
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Resurrect => "resurrect",
        };
        f.write_str(name)
    }
}

/// A change notification describing what a result list must refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Update {
    /// Re-render the row at the index.
    Single(usize),
    /// Re-render every row.
    All,
    /// The row at the index was appended; re-render it.
    Add(usize),
    /// Hide the row at the index.
    Delete(usize),
    /// Show the row at the index again.
    Resurrect(usize),
}

impl Update {
    /// Returns the kind of this update.
    pub fn kind(&self) -> UpdateKind {
        match self {
            Self::Single(_) => UpdateKind::Single,
            Self::All => UpdateKind::All,
            Self::Add(_) => UpdateKind::Add,
            Self::Delete(_) => UpdateKind::Delete,
            Self::Resurrect(_) => UpdateKind::Resurrect,
        }
    }

    /// Returns the result index this update targets, or `None` for [`Update::All`].
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Single(index)
            | Self::Add(index)
            | Self::Delete(index)
            | Self::Resurrect(index) => Some(index),
            Self::All => None,
        }
    }
}

/// Tracks deletion edits over a list of results.
///
/// Every operation that produces an [`Update`] both returns it and emits it on
/// [`updated`](Self::updated), so history loggers can observe edits without
/// sitting between the ledger and the view.
pub struct EditLedger {
    len: usize,
    entries: BTreeMap<usize, EditEntry>,
    /// Deleted indices at the last clean point.
    baseline: BTreeSet<usize>,

    // Signals
    /// Emitted for every update the ledger produces, in production order.
    pub updated: Signal<Update>,
}

impl fmt::Debug for EditLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditLedger")
            .field("len", &self.len)
            .field("entries", &self.entries)
            .field("has_changes", &self.has_changes())
            .finish()
    }
}

impl Default for EditLedger {
    fn default() -> Self {
        Self::new(0)
    }
}

impl EditLedger {
    /// Creates a ledger tracking `len` results, none of them edited.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            entries: BTreeMap::new(),
            baseline: BTreeSet::new(),
            updated: Signal::new(),
        }
    }

    /// Creates a ledger that adopts the edits a source pairs with its results.
    pub fn from_source<S: ResultSource + ?Sized>(source: &S) -> Self {
        let mut ledger = Self::new(0);
        ledger.restore(source);
        ledger
    }

    // =========================================================================
    // Size
    // =========================================================================

    /// Returns the number of tracked results.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no results are tracked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Tracks one more result and returns its index.
    ///
    /// Pair this with the list's append and then [`notify_added`](Self::notify_added).
    pub fn push(&mut self) -> usize {
        let index = self.len;
        self.len += 1;
        index
    }

    /// Forgets every edit and tracks `len` fresh results.
    pub fn reset(&mut self, len: usize) {
        tracing::debug!(target: targets::EDITS, len, "resetting edit ledger");
        self.len = len;
        self.entries.clear();
        self.baseline.clear();
    }

    /// Resets to the source's size and adopts every edit entry it carries.
    ///
    /// Entries whose index lies outside the source are ignored. The restored
    /// state becomes the clean baseline.
    pub fn restore<S: ResultSource + ?Sized>(&mut self, source: &S) {
        self.reset(source.len());
        for index in 0..self.len {
            if let Some(entry) = source.entry(index) {
                if entry.index != index {
                    tracing::warn!(
                        target: targets::EDITS,
                        position = index,
                        entry_index = entry.index,
                        "edit entry index does not match its result position, using position"
                    );
                }
                self.entries.insert(index, EditEntry::new(index, entry.deleted));
            }
        }
        self.mark_clean();
        tracing::debug!(
            target: targets::EDITS,
            len = self.len,
            deleted = self.deleted_count(),
            "restored edit ledger"
        );
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Marks the result at `index` as deleted.
    ///
    /// Marking an already deleted result changes nothing but still produces
    /// the update.
    ///
    /// # Errors
    ///
    /// Returns [`AssessError::IndexOutOfRange`](crate::AssessError::IndexOutOfRange)
    /// if `index >= len()`.
    pub fn mark_deleted(&mut self, index: usize) -> Result<Update> {
        self.set_deleted(index, true)?;
        Ok(self.produce(Update::Delete(index)))
    }

    /// Marks the result at `index` as no longer deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AssessError::IndexOutOfRange`](crate::AssessError::IndexOutOfRange)
    /// if `index >= len()`.
    pub fn mark_resurrected(&mut self, index: usize) -> Result<Update> {
        self.set_deleted(index, false)?;
        Ok(self.produce(Update::Resurrect(index)))
    }

    /// Reports that the result at `index` changed content without any change
    /// to its deletion state.
    ///
    /// # Errors
    ///
    /// Returns [`AssessError::IndexOutOfRange`](crate::AssessError::IndexOutOfRange)
    /// if `index >= len()`.
    pub fn notify_changed(&mut self, index: usize) -> Result<Update> {
        self.check(index)?;
        Ok(self.produce(Update::Single(index)))
    }

    /// Reports that every result may have changed, e.g. after re-scoring.
    pub fn notify_all_changed(&mut self) -> Update {
        self.produce(Update::All)
    }

    /// Reports that the result at `index` was appended.
    ///
    /// # Errors
    ///
    /// Returns [`AssessError::IndexOutOfRange`](crate::AssessError::IndexOutOfRange)
    /// if `index >= len()`; call [`push`](Self::push) first.
    pub fn notify_added(&mut self, index: usize) -> Result<Update> {
        self.check(index)?;
        Ok(self.produce(Update::Add(index)))
    }

    fn set_deleted(&mut self, index: usize, deleted: bool) -> Result<()> {
        self.check(index)?;
        let entry = self
            .entries
            .entry(index)
            .or_insert_with(|| EditEntry::new(index, false));
        if entry.deleted != deleted {
            entry.deleted = deleted;
            tracing::debug!(target: targets::EDITS, index, deleted, "edit entry flipped");
        }
        Ok(())
    }

    fn check(&self, index: usize) -> Result<()> {
        check_index(index, self.len).inspect_err(|err| {
            tracing::warn!(target: targets::EDITS, %err, "rejected edit");
        })
    }

    fn produce(&self, update: Update) -> Update {
        tracing::trace!(target: targets::EDITS, kind = %update.kind(), index = ?update.index(), "update produced");
        self.updated.emit(update);
        update
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the entry for `index`, if the result was ever edited.
    pub fn entry(&self, index: usize) -> Option<&EditEntry> {
        self.entries.get(&index)
    }

    /// Returns whether the result at `index` is currently marked deleted.
    pub fn is_deleted(&self, index: usize) -> bool {
        self.entries.get(&index).is_some_and(|entry| entry.deleted)
    }

    /// Iterates over all entries in ascending index order.
    pub fn entries(&self) -> impl Iterator<Item = &EditEntry> {
        self.entries.values()
    }

    /// Returns the number of results currently marked deleted.
    pub fn deleted_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.deleted).count()
    }

    /// Returns whether the deleted set differs from the last clean point.
    pub fn has_changes(&self) -> bool {
        !self
            .entries
            .values()
            .filter(|entry| entry.deleted)
            .map(|entry| entry.index)
            .eq(self.baseline.iter().copied())
    }

    /// Records the current state as the clean point, e.g. after it was saved.
    pub fn mark_clean(&mut self) {
        self.baseline = self
            .entries
            .values()
            .filter(|entry| entry.deleted)
            .map(|entry| entry.index)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Sample;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_mark_deleted_creates_entry() {
        let mut ledger = EditLedger::new(3);
        assert!(ledger.entry(1).is_none());

        let update = ledger.mark_deleted(1).unwrap();
        assert_eq!(update, Update::Delete(1));
        assert_eq!(ledger.entry(1), Some(&EditEntry::new(1, true)));
        assert!(ledger.is_deleted(1));
        assert!(!ledger.is_deleted(0));
    }

    #[test]
    fn test_mark_deleted_is_idempotent() {
        let mut ledger = EditLedger::new(2);
        ledger.mark_deleted(0).unwrap();
        assert_eq!(ledger.mark_deleted(0).unwrap(), Update::Delete(0));
        assert_eq!(ledger.deleted_count(), 1);
        assert_eq!(ledger.entries().count(), 1);
    }

    #[test]
    fn test_resurrect_keeps_entry() {
        let mut ledger = EditLedger::new(2);
        assert_eq!(ledger.mark_resurrected(1).unwrap(), Update::Resurrect(1));
        assert_eq!(ledger.entry(1), Some(&EditEntry::new(1, false)));

        ledger.mark_deleted(1).unwrap();
        ledger.mark_resurrected(1).unwrap();
        assert!(!ledger.is_deleted(1));
        assert_eq!(ledger.entries().count(), 1);
    }

    #[test]
    fn test_notifications() {
        let mut ledger = EditLedger::new(2);
        assert_eq!(ledger.notify_changed(1).unwrap(), Update::Single(1));
        assert_eq!(ledger.notify_all_changed(), Update::All);
        assert_eq!(ledger.notify_added(0).unwrap(), Update::Add(0));
        assert!(ledger.entries().next().is_none());
    }

    #[test]
    fn test_out_of_range_leaves_state_alone() {
        let mut ledger = EditLedger::new(2);
        let emitted = Arc::new(Mutex::new(0));
        let emitted_clone = emitted.clone();
        ledger.updated.connect(move |_| *emitted_clone.lock() += 1);

        assert!(ledger.mark_deleted(2).unwrap_err().is_index_out_of_range());
        assert!(ledger.mark_resurrected(5).is_err());
        assert!(ledger.notify_changed(2).is_err());
        assert!(ledger.notify_added(2).is_err());

        assert!(ledger.entries().next().is_none());
        assert_eq!(*emitted.lock(), 0);
    }

    #[test]
    fn test_updated_signal_order() {
        let mut ledger = EditLedger::new(3);
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        ledger.updated.connect(move |update| log_clone.lock().push(*update));

        ledger.mark_deleted(2).unwrap();
        ledger.notify_changed(0).unwrap();
        ledger.notify_all_changed();
        ledger.mark_resurrected(2).unwrap();

        assert_eq!(
            *log.lock(),
            vec![
                Update::Delete(2),
                Update::Single(0),
                Update::All,
                Update::Resurrect(2)
            ]
        );
    }

    #[test]
    fn test_push_then_notify_added() {
        let mut ledger = EditLedger::new(1);
        assert!(ledger.notify_added(1).is_err());
        let index = ledger.push();
        assert_eq!(index, 1);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.notify_added(index).unwrap(), Update::Add(1));
    }

    #[test]
    fn test_has_changes_tracks_baseline() {
        let mut ledger = EditLedger::new(3);
        assert!(!ledger.has_changes());

        ledger.mark_deleted(0).unwrap();
        assert!(ledger.has_changes());

        ledger.mark_clean();
        assert!(!ledger.has_changes());

        ledger.mark_resurrected(0).unwrap();
        assert!(ledger.has_changes());
        ledger.mark_deleted(0).unwrap();
        assert!(!ledger.has_changes());
    }

    #[test]
    fn test_restore_from_sample() {
        let sample = Sample::new(vec!["a", "b", "c"])
            .with_entry(EditEntry::new(1, true))
            .with_entry(EditEntry::new(2, false));
        let ledger = EditLedger::from_source(&sample);

        assert_eq!(ledger.len(), 3);
        assert!(!ledger.is_deleted(0));
        assert!(ledger.is_deleted(1));
        assert!(!ledger.is_deleted(2));
        assert_eq!(ledger.entries().count(), 2);
        assert!(!ledger.has_changes());
    }

    #[test]
    fn test_reset_forgets_entries() {
        let mut ledger = EditLedger::new(2);
        ledger.mark_deleted(1).unwrap();
        ledger.reset(4);
        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.deleted_count(), 0);
        assert!(!ledger.has_changes());
    }

    #[test]
    fn test_update_accessors() {
        assert_eq!(Update::All.index(), None);
        assert_eq!(Update::Add(4).index(), Some(4));
        assert_eq!(Update::Resurrect(2).kind(), UpdateKind::Resurrect);
        assert_eq!(UpdateKind::Delete.to_string(), "delete");
    }

    #[test]
    fn test_entry_serialization() {
        let entry = EditEntry::new(3, true);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"index":3,"deleted":true}"#);
        let back: EditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
