//! Selection engine for tables where only some rows may be selected.
//!
//! The engine is split along the data flow:
//! - [`SelectionStore`] owns the per-row selection vector and resets it when
//!   the dataset changes
//! - [`Aggregates`] folds rows and selection into counts and a weight total
//! - [`SelectAll`] derives the tri-state header control and applies bulk updates
//! - [`RowBindings`] turns clicks on a row or its checkbox into single toggles
//!
//! # Example
//!
//! ```ignore
//! use triage_lib::table::{SelectAll, SelectionStore, Target, TriState};
//!
//! let mut store = SelectionStore::new(issues);
//! let bindings = store.bindings();
//!
//! bindings.dispatch(&mut store, Target::Control(0));
//! assert_eq!(store.summary().select_all, TriState::Indeterminate);
//!
//! SelectAll::on_changed(&mut store, true);
//! assert_eq!(store.summary().select_all, TriState::Checked);
//! ```

mod aggregate;
mod interaction;
mod row;
mod select_all;
mod store;
mod view;

pub use aggregate::Aggregates;
pub use interaction::{GestureOutcome, RowBindings, Target};
pub use row::{Eligibility, TableRow};
pub use select_all::{SelectAll, TriState};
pub use store::SelectionStore;
pub use view::{RowView, TableSummary};
