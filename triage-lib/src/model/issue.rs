//! Issue rows for the triage table.

use serde::{Deserialize, Serialize};

use crate::table::{Eligibility, TableRow};

/// Lifecycle status of an issue as it appears in source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Open,
    Resolved,
    /// Any status label this build does not know about.
    #[serde(other)]
    Unknown,
}

impl IssueStatus {
    /// Display label for the status column.
    pub fn label(self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Unknown => "Unknown",
        }
    }

    /// Only open issues can be selected.
    pub fn eligibility(self) -> Eligibility {
        match self {
            IssueStatus::Open => Eligibility::Eligible,
            IssueStatus::Resolved | IssueStatus::Unknown => Eligibility::Ineligible,
        }
    }
}

/// A single reported issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub error_message: String,
    pub status: IssueStatus,
    pub num_events: u64,
    pub num_users: u64,
    /// Higher means the issue matters more when selected issues are summed.
    pub impact_score: f64,
}

impl TableRow for Issue {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn eligibility(&self) -> Eligibility {
        self.status.eligibility()
    }

    fn weight(&self) -> f64 {
        self.impact_score
    }
}
