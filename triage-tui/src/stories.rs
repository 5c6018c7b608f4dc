//! `stories` command: print one page of Hacker News top stories.

use std::fmt::Write;
use std::time::Duration;

use triage_lib::source::hn::{HN_SITE, Pagination, StoriesPage};
use triage_lib::source::HnClient;

use crate::error::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Format a page the way the site lists it.
pub fn format_page(page: &StoriesPage, pagination: &Pagination) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Hacker News | top ({})", HN_SITE);
    let _ = writeln!(out);

    for (index, item) in page.items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}. {} ({})",
            pagination.rank(index),
            item.title,
            item.host()
        );

        let mut meta = Vec::new();
        if let Some(score) = item.score {
            meta.push(format!("{} points", score));
        }
        meta.push(format!("by {}", item.by));
        meta.push(item.comments_label());
        let _ = writeln!(out, "      {}", meta.join(" | "));
        let _ = writeln!(out, "      {}", item.link());
        if item.url.is_some() {
            let _ = writeln!(out, "      {}", item.discussion_url());
        }
    }

    let _ = writeln!(out);
    let _ = write!(
        out,
        "Page {} of {}",
        pagination.page,
        pagination.total_pages()
    );
    if let Some(prev) = pagination.prev_link() {
        let _ = write!(out, "  Prev: {}", prev);
    }
    if let Some(next) = pagination.next_link() {
        let _ = write!(out, "  Next: {}", next);
    }
    let _ = writeln!(out);
    out
}

/// Fetch and print a page of stories.
pub fn run(page: usize, page_size: usize) -> Result<(), AppError> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = HnClient::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(triage_lib::Error::from)?;

    log::info!("Fetching top stories page {} (size {})", page, page_size);
    let stories = runtime.block_on(client.stories_page(page, page_size))?;
    let pagination = Pagination::new(page, page_size, stories.total);

    print!("{}", format_page(&stories, &pagination));
    Ok(())
}
