//! Render data handed to the presentation layer.

use std::fmt;

use super::aggregate::Aggregates;
use super::select_all::TriState;

/// Everything needed to draw one row without recomputing eligibility.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a, R> {
    /// Position within the current dataset.
    pub index: usize,
    pub row: &'a R,
    pub selected: bool,
    pub eligible: bool,
}

/// Header figures: aggregates and the select-all state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TableSummary {
    pub aggregates: Aggregates,
    pub select_all: TriState,
}

impl From<Aggregates> for TableSummary {
    fn from(aggregates: Aggregates) -> Self {
        Self {
            select_all: aggregates.select_all(),
            aggregates,
        }
    }
}

impl TableSummary {
    /// Header text, e.g. `Selected 2 (Total impact 8)` or `None selected`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let aggregates = &self.aggregates;
        if aggregates.is_empty() {
            write!(f, "None selected")?;
        } else {
            write!(f, "Selected {}", aggregates.selected_count)?;
        }
        if aggregates.selected_weight_total > 0.0 {
            write!(f, " (Total impact {})", aggregates.selected_weight_total)?;
        }
        Ok(())
    }
}
