//! Aggregate figures derived from rows and the selection vector.

use super::row::TableRow;
use super::select_all::TriState;

/// Counts and totals derived from the current selection.
///
/// Never stored alongside the selection; recompute with [`Aggregates::derive`]
/// whenever the rows or the selection vector change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aggregates {
    /// Rows that may be selected.
    pub eligible_count: usize,
    /// Rows that are both selected and eligible.
    pub selected_count: usize,
    /// Sum of [`TableRow::weight`] over selected eligible rows.
    pub selected_weight_total: f64,
}

impl Aggregates {
    /// Fold rows and selection into aggregates in a single pass.
    ///
    /// A selection entry only counts when its row is eligible, and a missing
    /// entry (shorter vector) counts as unselected.
    pub fn derive<R: TableRow>(rows: &[R], selected: &[bool]) -> Self {
        rows.iter()
            .enumerate()
            .fold(Self::default(), |mut acc, (index, row)| {
                if !row.eligibility().is_eligible() {
                    return acc;
                }
                acc.eligible_count += 1;
                if selected.get(index).copied().unwrap_or(false) {
                    acc.selected_count += 1;
                    acc.selected_weight_total += row.weight();
                }
                acc
            })
    }

    /// Tri-state value of the "select all" control for these counts.
    pub fn select_all(&self) -> TriState {
        TriState::from_counts(self.selected_count, self.eligible_count)
    }

    /// Returns `true` if no eligible row is selected.
    pub fn is_empty(&self) -> bool {
        self.selected_count == 0
    }
}
