//! Typed rows produced by the dataset sources.

mod issue;
mod story;

pub use issue::{Issue, IssueStatus};
pub use story::HnItem;
