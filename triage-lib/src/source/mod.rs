//! Dataset sources that feed the selection engine with typed rows.

pub mod hn;
pub mod json;

pub use hn::{HnClient, HnClientBuilder, Pagination, StoriesPage};
pub use json::{load_issues, parse_issues};
