//! Issue triage library
//!
//! Selection engine for tables where only some rows may be selected, plus the
//! dataset sources that feed it (JSON issue files, the Hacker News top list).

pub mod error;
pub mod model;
pub mod source;
pub mod table;

pub use error::{ApiError, Error};
pub use model::{HnItem, Issue, IssueStatus};
pub use table::{
    Aggregates, Eligibility, GestureOutcome, RowBindings, RowView, SelectAll, SelectionStore,
    TableRow, TableSummary, Target, TriState,
};
