//! The tri-state "select all" control.

use super::aggregate::Aggregates;
use super::row::TableRow;
use super::store::SelectionStore;

/// Renderable state of a checkbox that can also be partially checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    #[default]
    Unchecked,
    Indeterminate,
    Checked,
}

impl TriState {
    /// Derive the state from the selected and eligible counts.
    pub fn from_counts(selected: usize, eligible: usize) -> Self {
        if eligible > 0 && selected == eligible {
            TriState::Checked
        } else if selected > 0 && selected < eligible {
            TriState::Indeterminate
        } else {
            TriState::Unchecked
        }
    }

    pub fn is_checked(self) -> bool {
        matches!(self, TriState::Checked)
    }

    /// The `checked` value a native checkbox reports after being activated
    /// in this state.
    ///
    /// An indeterminate checkbox becomes checked, so both it and an
    /// unchecked one request "select all".
    pub fn requested_on_activate(self) -> bool {
        !self.is_checked()
    }
}

/// Controller for the header checkbox.
///
/// Reads are pure functions of the aggregates; the single write forwards the
/// user's raw intent to [`SelectionStore::set_all`].
pub struct SelectAll;

impl SelectAll {
    /// Current tri-state value.
    pub fn state(aggregates: &Aggregates) -> TriState {
        aggregates.select_all()
    }

    /// Apply the checkbox's requested value: `true` selects every eligible
    /// row, `false` clears the selection.
    pub fn on_changed<R: TableRow>(store: &mut SelectionStore<R>, requested_checked: bool) {
        log::debug!("select all changed: requested={}", requested_checked);
        store.set_all(requested_checked);
    }

    /// Activate the control the way a click or key press would, returning
    /// the resulting state.
    pub fn activate<R: TableRow>(store: &mut SelectionStore<R>) -> TriState {
        let requested = Self::state(&store.aggregates()).requested_on_activate();
        Self::on_changed(store, requested);
        Self::state(&store.aggregates())
    }
}
