//! Row gestures: clicks on a row body or on its embedded checkbox.
//!
//! Both gestures end in the same single-row toggle. The checkbox sits inside
//! the row, so a click on it bubbles to the row; the checkbox handler stops
//! propagation so the row handler does not toggle a second time. The row
//! handler is only attached to eligible rows in the first place, so an
//! ineligible row ignores clicks even if propagation is never stopped.

use super::row::TableRow;
use super::store::SelectionStore;

/// Where a gesture landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Anywhere on the row outside its checkbox.
    Row(usize),
    /// The row's embedded selection checkbox.
    Control(usize),
}

impl Target {
    /// Row index this target belongs to.
    pub fn index(self) -> usize {
        match self {
            Target::Row(index) | Target::Control(index) => index,
        }
    }

    /// Enclosing target the gesture bubbles to.
    fn parent(self) -> Option<Target> {
        match self {
            Target::Control(index) => Some(Target::Row(index)),
            Target::Row(_) => None,
        }
    }
}

/// Result of dispatching a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A row was toggled and now has the given selection.
    Toggled { index: usize, selected: bool },
    /// No handler changed anything.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Propagation {
    Continue,
    Stop,
}

/// Gesture handlers attached to the rows of one dataset.
///
/// Obtained from [`SelectionStore::bindings`]. Bindings remember the dataset
/// generation they were built for; dispatching them against a store that has
/// since been reset is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowBindings {
    generation: u64,
    /// `true` where a row-level handler (and an enabled checkbox) exists.
    attached: Vec<bool>,
}

impl RowBindings {
    pub(crate) fn new(generation: u64, attached: Vec<bool>) -> Self {
        Self {
            generation,
            attached,
        }
    }

    /// Whether clicking the row body does anything.
    pub fn has_row_handler(&self, index: usize) -> bool {
        self.attached.get(index).copied().unwrap_or(false)
    }

    /// Whether the row's checkbox is enabled.
    pub fn control_enabled(&self, index: usize) -> bool {
        self.has_row_handler(index)
    }

    /// Number of rows these bindings cover.
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    /// Deliver a gesture, bubbling from `target` up through its parents.
    pub fn dispatch<R: TableRow>(
        &self,
        store: &mut SelectionStore<R>,
        target: Target,
    ) -> GestureOutcome {
        if store.generation() != self.generation {
            log::warn!(
                "Dropping gesture {:?} from stale bindings (generation {} != {})",
                target,
                self.generation,
                store.generation()
            );
            return GestureOutcome::Ignored;
        }

        let mut outcome = GestureOutcome::Ignored;
        let mut current = Some(target);
        while let Some(node) = current {
            let (result, propagation) = self.handle(store, node);
            if let Some(result) = result {
                outcome = result;
            }
            current = match propagation {
                Propagation::Stop => None,
                Propagation::Continue => node.parent(),
            };
        }
        log::debug!("gesture {:?} -> {:?}", target, outcome);
        outcome
    }

    /// Run the handler attached to `target`, if any.
    fn handle<R: TableRow>(
        &self,
        store: &mut SelectionStore<R>,
        target: Target,
    ) -> (Option<GestureOutcome>, Propagation) {
        match target {
            Target::Control(index) if self.control_enabled(index) => {
                (Some(toggle(store, index)), Propagation::Stop)
            }
            Target::Row(index) if self.has_row_handler(index) => {
                (Some(toggle(store, index)), Propagation::Continue)
            }
            // Disabled checkbox or bare row: nothing attached
            _ => (None, Propagation::Continue),
        }
    }
}

fn toggle<R: TableRow>(store: &mut SelectionStore<R>, index: usize) -> GestureOutcome {
    if store.toggle(index) {
        GestureOutcome::Toggled {
            index,
            selected: store.is_selected(index),
        }
    } else {
        GestureOutcome::Ignored
    }
}
