//! Result list controller for search-quality assessment.
//!
//! [`ResultListController`] owns one [`RowHandle`] per ranked result, keeps
//! each row's index equal to its position, and applies [`Update`] events
//! produced by an [`EditLedger`](crate::EditLedger) to those rows.
//!
//! # Example
//!
//! ```
//! use horizon_assess::{EditLedger, ResultListController};
//!
//! let results = vec!["Cafe Central", "Museum of Art", "Central Station"];
//!
//! let mut view = ResultListController::new(|name: &&str| name.to_uppercase());
//! view.populate(&results);
//! let mut ledger = EditLedger::from_source(&results);
//!
//! view.set_listener(|row| println!("result {} selected", row));
//!
//! let update = ledger.mark_deleted(1).unwrap();
//! view.apply(update).unwrap();
//!
//! assert_eq!(view.row_count(), 3);
//! assert!(!view.row_at(1).unwrap().is_visible());
//! assert_eq!(view.row_at(2).unwrap().content(), "CENTRAL STATION");
//! ```
//!
//! # Listener
//!
//! A controller reports selections to at most one listener. The listener runs
//! synchronously inside [`handle_selection_changed`] and [`handle_item_clicked`]
//! and must not call back into the controller; re-entrant use is not supported.
//!
//! [`handle_selection_changed`]: ResultListController::handle_selection_changed
//! [`handle_item_clicked`]: ResultListController::handle_item_clicked

use std::fmt;

use horizon_assess_core::{span_names, targets, ConnectionId, Signal};

use crate::config::ResultsViewConfig;
use crate::edits::{EditEntry, Update};
use crate::error::{check_index, Result};
use crate::row::{RowHandle, RowRenderer};
use crate::source::ResultSource;

/// An ordered list of result rows driven by edit updates.
///
/// Row indices are contiguous from zero and never change while the row
/// exists: deleting a result hides its row, it does not remove it. Rows are
/// only discarded by [`clear`](Self::clear) or [`populate`](Self::populate).
///
/// Every fallible operation validates its indices before touching any row,
/// so an error always leaves the list exactly as it was.
pub struct ResultListController<R, V>
where
    V: RowRenderer<R>,
{
    rows: Vec<RowHandle<R, V::Content>>,
    renderer: V,
    config: ResultsViewConfig,

    // Selection reporting
    result_selected: Signal<usize>,
    listener: Option<ConnectionId>,
}

impl<R, V> fmt::Debug for ResultListController<R, V>
where
    V: RowRenderer<R>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultListController")
            .field("row_count", &self.rows.len())
            .field("visible_count", &self.visible_count())
            .field("config", &self.config)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl<R, V> ResultListController<R, V>
where
    V: RowRenderer<R>,
{
    /// Creates an empty list with default settings.
    pub fn new(renderer: V) -> Self {
        Self::with_config(renderer, ResultsViewConfig::default())
    }

    /// Creates an empty list with the given settings.
    pub fn with_config(renderer: V, config: ResultsViewConfig) -> Self {
        Self {
            rows: Vec::new(),
            renderer,
            config,
            result_selected: Signal::new(),
            listener: None,
        }
    }

    /// Returns the settings.
    pub fn config(&self) -> &ResultsViewConfig {
        &self.config
    }

    /// Replaces the settings.
    pub fn set_config(&mut self, config: ResultsViewConfig) {
        self.config = config;
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    // =========================================================================
    // Population
    // =========================================================================

    /// Replaces all rows with one row per result of `source`, in order.
    ///
    /// A row starts hidden if the source pairs its result with an edit entry
    /// marked deleted.
    pub fn populate<S>(&mut self, source: &S)
    where
        S: ResultSource<Item = R> + ?Sized,
        R: Clone,
    {
        let _span = tracing::debug_span!(
            target: targets::RESULTS_VIEW,
            span_names::POPULATE,
            len = source.len()
        )
        .entered();

        self.clear();
        self.rows.reserve(source.len());
        for index in 0..source.len() {
            let Some(result) = source.get(index) else {
                tracing::warn!(
                    target: targets::RESULTS_VIEW,
                    index,
                    "result source is shorter than reported, stopping"
                );
                break;
            };
            let hidden = source.entry(index).is_some_and(|entry| entry.deleted);
            self.push_row(result.clone(), hidden);
        }

        tracing::debug!(
            target: targets::RESULTS_VIEW,
            rows = self.rows.len(),
            hidden = self.rows.len() - self.visible_count(),
            "populated result list"
        );
    }

    /// Appends a visible row for `result` and returns its index.
    pub fn append(&mut self, result: R) -> usize {
        self.push_row(result, false)
    }

    /// Appends a row for `result`, hidden if `entry` is marked deleted, and
    /// returns its index.
    pub fn append_with_entry(&mut self, result: R, entry: &EditEntry) -> usize {
        self.push_row(result, entry.deleted)
    }

    fn push_row(&mut self, result: R, hidden: bool) -> usize {
        let index = self.rows.len();
        self.rows
            .push(RowHandle::new(index, result, !hidden, &self.renderer));
        tracing::trace!(target: targets::RESULTS_VIEW, index, hidden, "row appended");
        index
    }

    /// Discards every row.
    pub fn clear(&mut self) {
        if !self.rows.is_empty() {
            tracing::debug!(target: targets::RESULTS_VIEW, rows = self.rows.len(), "clearing result list");
        }
        self.rows.clear();
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Returns the number of rows, hidden ones included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the list has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of visible rows.
    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_visible()).count()
    }

    /// Returns the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AssessError::IndexOutOfRange`](crate::AssessError::IndexOutOfRange)
    /// if `index >= row_count()`.
    pub fn row_at(&self, index: usize) -> Result<&RowHandle<R, V::Content>> {
        self.check(index)?;
        Ok(&self.rows[index])
    }

    /// Returns the row at `index` for modifying its result.
    ///
    /// # Errors
    ///
    /// Returns [`AssessError::IndexOutOfRange`](crate::AssessError::IndexOutOfRange)
    /// if `index >= row_count()`.
    pub fn row_at_mut(&mut self, index: usize) -> Result<&mut RowHandle<R, V::Content>> {
        self.check(index)?;
        Ok(&mut self.rows[index])
    }

    /// Iterates over all rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &RowHandle<R, V::Content>> {
        self.rows.iter()
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Applies an edit update to the rows.
    ///
    /// - `Single` and `Add` re-render one row in place.
    /// - `All` re-renders every row in index order.
    /// - `Delete` hides one row, `Resurrect` shows it again.
    ///
    /// Re-rendering never changes visibility, and hiding never removes or
    /// reorders rows.
    ///
    /// # Errors
    ///
    /// Returns [`AssessError::IndexOutOfRange`](crate::AssessError::IndexOutOfRange)
    /// if the update targets an index `>= row_count()`. No row is changed.
    pub fn apply(&mut self, update: Update) -> Result<()> {
        let _span = tracing::debug_span!(
            target: targets::RESULTS_VIEW,
            span_names::APPLY_UPDATE,
            kind = %update.kind()
        )
        .entered();

        if let Some(index) = update.index() {
            self.check(index)?;
        }

        match update {
            Update::Single(index) | Update::Add(index) => {
                self.rows[index].refresh(&self.renderer);
            }
            Update::All => {
                for row in &mut self.rows {
                    row.refresh(&self.renderer);
                }
            }
            Update::Delete(index) => self.set_visible(index, false),
            Update::Resurrect(index) => self.set_visible(index, true),
        }

        tracing::trace!(target: targets::RESULTS_VIEW, ?update, "update applied");
        Ok(())
    }

    /// The only visibility transition; `index` is already validated.
    fn set_visible(&mut self, index: usize, visible: bool) {
        let row = &mut self.rows[index];
        if row.is_visible() != visible {
            row.set_visible(visible);
            tracing::debug!(target: targets::RESULTS_VIEW, index, visible, "row visibility changed");
        }
    }

    fn check(&self, index: usize) -> Result<()> {
        check_index(index, self.rows.len()).inspect_err(|err| {
            tracing::warn!(target: targets::RESULTS_VIEW, %err, "rejected row access");
        })
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Sets the listener that receives the index of each selected result,
    /// replacing any previous listener.
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.clear_listener();
        let id = self.result_selected.connect(move |&row| listener(row));
        self.listener = Some(id);
    }

    /// Removes the listener, if any.
    pub fn clear_listener(&mut self) {
        if let Some(id) = self.listener.take() {
            self.result_selected.disconnect(id);
        }
    }

    /// Returns whether a listener is set.
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Reports rows that just became selected.
    ///
    /// The listener is called once per row, in ascending index order, with
    /// duplicates collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`AssessError::IndexOutOfRange`](crate::AssessError::IndexOutOfRange)
    /// if any row is `>= row_count()`. The listener is not called at all.
    pub fn handle_selection_changed(&self, selected: &[usize]) -> Result<()> {
        let mut rows = selected.to_vec();
        rows.sort_unstable();
        rows.dedup();

        if let Some(&last) = rows.last() {
            self.check(last)?;
        }

        for row in rows {
            tracing::trace!(target: targets::RESULTS_VIEW, row, "result selected");
            self.result_selected.emit(row);
        }
        Ok(())
    }

    /// Reports a click on a row.
    ///
    /// The listener is called only if [`ResultsViewConfig::report_clicks`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`AssessError::IndexOutOfRange`](crate::AssessError::IndexOutOfRange)
    /// if `row >= row_count()`.
    pub fn handle_item_clicked(&self, row: usize) -> Result<()> {
        self.check(row)?;
        if self.config.report_clicks {
            tracing::trace!(target: targets::RESULTS_VIEW, row, "result clicked");
            self.result_selected.emit(row);
        }
        Ok(())
    }
}
