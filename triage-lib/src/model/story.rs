//! Hacker News items.

use serde::{Deserialize, Serialize};

use crate::source::hn::{format_host, item_url};

/// An item from the Hacker News API (`/v0/item/{id}.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HnItem {
    pub id: u64,
    #[serde(default)]
    pub by: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendants: Option<u64>,
}

impl HnItem {
    /// Link target for the title: the story URL, or its discussion page.
    pub fn link(&self) -> String {
        self.url.clone().unwrap_or_else(|| item_url(self.id))
    }

    /// Host shown next to the title.
    pub fn host(&self) -> String {
        format_host(self.url.as_deref())
    }

    /// Link to the discussion thread.
    pub fn discussion_url(&self) -> String {
        item_url(self.id)
    }

    /// Label for the discussion link.
    pub fn comments_label(&self) -> String {
        match self.descendants {
            Some(n) => format!("{} comments", n),
            None => "discuss".to_string(),
        }
    }
}
