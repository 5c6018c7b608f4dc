//! Selection store: the per-row selection vector for one dataset.

use std::sync::Arc;

use super::aggregate::Aggregates;
use super::interaction::RowBindings;
use super::row::TableRow;
use super::view::{RowView, TableSummary};

/// Owns the rows of the current dataset and which of them are selected.
///
/// Selection is positional: `selected[i]` refers to `rows[i]`. A selected
/// entry is always an eligible row; every mutation maintains this.
///
/// Dataset identity is the `Arc` itself. Handing the store a different
/// `Arc` discards the whole selection, even when the new rows carry the same
/// ids as the old ones.
#[derive(Debug)]
pub struct SelectionStore<R> {
    rows: Arc<[R]>,
    /// Eligibility per row, computed once per dataset.
    eligible: Vec<bool>,
    selected: Vec<bool>,
    /// Bumped on every reset so stale gesture bindings can be detected.
    generation: u64,
}

impl<R: TableRow> SelectionStore<R> {
    /// Create a store for the given rows with nothing selected.
    pub fn new(rows: impl Into<Arc<[R]>>) -> Self {
        let rows = rows.into();
        let mut store = Self {
            eligible: Vec::new(),
            selected: Vec::new(),
            rows,
            generation: 0,
        };
        store.reset();
        store
    }

    /// Adopt a new dataset.
    ///
    /// Returns `true` if the selection was reset, which happens whenever
    /// `rows` is not the same allocation as the current dataset.
    pub fn replace_rows(&mut self, rows: Arc<[R]>) -> bool {
        if Arc::ptr_eq(&self.rows, &rows) {
            return false;
        }
        self.rows = rows;
        self.reset();
        true
    }

    /// Drop the selection and allocate an all-unselected vector.
    fn reset(&mut self) {
        let row_count = self.rows.len();
        self.eligible = self
            .rows
            .iter()
            .map(|row| row.eligibility().is_eligible())
            .collect();
        self.selected = vec![false; row_count];
        self.generation += 1;
        log::debug!(
            "selection reset: {} rows, {} eligible (generation {})",
            row_count,
            self.eligible.iter().filter(|e| **e).count(),
            self.generation
        );
    }

    /// Flip the selection of one row.
    ///
    /// Ineligible rows and out-of-range indices are left alone. Returns
    /// `true` if the vector changed.
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.is_eligible(index) {
            log::trace!("toggle ignored: row {} is not selectable", index);
            return false;
        }
        self.selected[index] = !self.selected[index];
        true
    }

    /// Set every eligible row to `value`; ineligible rows are always cleared.
    pub fn set_all(&mut self, value: bool) {
        for (selected, eligible) in self.selected.iter_mut().zip(&self.eligible) {
            *selected = *eligible && value;
        }
    }

    /// Rows of the current dataset.
    ///
    /// Handing this back to [`replace_rows`](Self::replace_rows) keeps the
    /// selection.
    pub fn rows(&self) -> &Arc<[R]> {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check whether a row is selected. Out of range is unselected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Check whether a row may be selected. Out of range is ineligible.
    pub fn is_eligible(&self, index: usize) -> bool {
        self.eligible.get(index).copied().unwrap_or(false)
    }

    /// The selection vector, parallel to [`rows`](Self::rows).
    pub fn selection(&self) -> &[bool] {
        &self.selected
    }

    /// Ids of the selected rows, in row order.
    pub fn selected_ids(&self) -> Vec<&R::Id> {
        self.rows
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(row, _)| row.id())
            .collect()
    }

    /// Dataset generation, incremented on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Derive the aggregates for the current state.
    pub fn aggregates(&self) -> Aggregates {
        Aggregates::derive(&self.rows, &self.selected)
    }

    /// Aggregates plus the select-all state, for header rendering.
    pub fn summary(&self) -> TableSummary {
        TableSummary::from(self.aggregates())
    }

    /// Per-row render data.
    pub fn row_views(&self) -> impl Iterator<Item = RowView<'_, R>> {
        self.rows.iter().enumerate().map(|(index, row)| RowView {
            index,
            row,
            selected: self.is_selected(index),
            eligible: self.is_eligible(index),
        })
    }

    /// Gesture handlers for the current dataset.
    pub fn bindings(&self) -> RowBindings {
        RowBindings::new(self.generation, self.eligible.clone())
    }
}

impl<R: TableRow> Default for SelectionStore<R> {
    fn default() -> Self {
        Self::new(Vec::<R>::new())
    }
}
