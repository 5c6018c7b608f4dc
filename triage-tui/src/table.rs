//! Issue table view: turns the selection store into styled lines and the
//! clickable regions that go with them.

use triage_lib::{Issue, IssueStatus, RowBindings, RowView, SelectionStore, Target, TriState};

use crate::hit::{Hit, HitMap, Rect};
use crate::render::{Line, Rgb, Style, palette};

/// Row of the select-all checkbox and selection summary.
pub const SUMMARY_Y: u16 = 2;
/// First row of table data.
pub const BODY_Y: u16 = 5;
/// Column of the checkbox glyph within a row.
pub const CHECKBOX_X: u16 = 2;
const CHECKBOX_WIDTH: u16 = 3;

const CHECKBOX_COLUMN: usize = 6;
const TYPE_COLUMN: usize = 18;
const STATUS_COLUMN: usize = 12;

const HINTS: &str = "↑/↓ move  space toggle  a select all  r reload  q quit";

/// Number of data rows that fit in a terminal of the given height.
pub fn body_height(height: u16) -> usize {
    height.saturating_sub(BODY_Y + 1) as usize
}

/// Glyph for the header checkbox.
pub fn select_all_glyph(state: TriState) -> &'static str {
    match state {
        TriState::Unchecked => "[ ]",
        TriState::Indeterminate => "[-]",
        TriState::Checked => "[x]",
    }
}

fn row_glyph(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}

fn status_color(status: IssueStatus) -> Rgb {
    match status {
        IssueStatus::Open => palette::OPEN,
        IssueStatus::Resolved => palette::RESOLVED,
        IssueStatus::Unknown => palette::MUTED,
    }
}

/// Everything the table needs to draw one frame.
pub struct TableView<'a> {
    pub store: &'a SelectionStore<Issue>,
    pub bindings: &'a RowBindings,
    pub cursor: Option<usize>,
    pub scroll: usize,
    /// Replaces the key hints in the footer, e.g. a reload error.
    pub message: Option<&'a str>,
}

impl TableView<'_> {
    /// Render exactly `height` lines of `width` columns.
    pub fn render(&self, width: u16, height: u16) -> (Vec<Line>, HitMap) {
        let w = width as usize;
        let base = Style::new().fg(palette::TEXT).bg(palette::BACKGROUND);
        let mut lines = Vec::with_capacity(height as usize);
        let mut hits = HitMap::new();

        lines.push(self.title_line(base));
        lines.push(Line::new());
        lines.push(self.summary_line(base));
        hits.push(
            Rect::new(CHECKBOX_X, SUMMARY_Y, CHECKBOX_WIDTH, 1),
            Hit::SelectAll,
        );
        lines.push(self.columns_line(w, base));

        let mut separator = Line::new();
        separator.push("─".repeat(w), base.fg(palette::BORDER));
        lines.push(separator);

        let mut views = self.store.row_views().skip(self.scroll);
        for slot in 0..body_height(height) {
            let y = BODY_Y + slot as u16;
            let line = match views.next() {
                Some(view) => {
                    self.register_row(&mut hits, &view, y, width);
                    self.row_line(&view, w, base)
                }
                None if slot == 0 && self.store.is_empty() => {
                    let mut line = Line::new();
                    line.push("  No issues", base.fg(palette::MUTED));
                    line
                }
                None => Line::new(),
            };
            lines.push(line);
        }

        lines.push(self.footer_line(base));

        lines.truncate(height as usize);
        for line in &mut lines {
            line.fit_to(w, base);
        }
        (lines, hits)
    }

    /// Row body and checkbox, checkbox on top. Ineligible rows get neither,
    /// so a click on them reaches nothing.
    fn register_row(&self, hits: &mut HitMap, view: &RowView<'_, Issue>, y: u16, width: u16) {
        if self.bindings.has_row_handler(view.index) {
            hits.push(Rect::new(0, y, width, 1), Hit::Row(Target::Row(view.index)));
        }
        if self.bindings.control_enabled(view.index) {
            hits.push(
                Rect::new(CHECKBOX_X, y, CHECKBOX_WIDTH, 1),
                Hit::Row(Target::Control(view.index)),
            );
        }
    }

    fn title_line(&self, base: Style) -> Line {
        let aggregates = self.store.aggregates();
        let mut line = Line::new();
        line.push(" Issues", base.bold());
        line.push(
            format!(
                "  {} total, {} open",
                self.store.len(),
                aggregates.eligible_count
            ),
            base.fg(palette::MUTED),
        );
        line
    }

    fn summary_line(&self, base: Style) -> Line {
        let summary = self.store.summary();
        let mut line = Line::new();
        line.push("  ", base);
        line.push(select_all_glyph(summary.select_all), base.bold());
        line.push(" ", base);
        line.push(summary.label(), base.bold());
        line
    }

    fn columns_line(&self, width: usize, base: Style) -> Line {
        let style = base.fg(palette::MUTED).bold();
        let mut line = Line::new();
        line.push_cell("", CHECKBOX_COLUMN, style);
        line.push_cell("Type", TYPE_COLUMN, style);
        line.push_cell("Error message", message_width(width), style);
        line.push_cell("Status", STATUS_COLUMN, style);
        line
    }

    fn row_line(&self, view: &RowView<'_, Issue>, width: usize, base: Style) -> Line {
        let focused = self.cursor == Some(view.index);
        let mut style = if focused {
            base.fg(palette::BACKGROUND).bg(palette::CURSOR)
        } else if view.selected {
            base.fg(palette::BACKGROUND).bg(palette::SELECTED)
        } else {
            base
        };
        if !view.eligible {
            style = style.dim();
            if !focused {
                style = style.fg(palette::MUTED);
            }
        }

        let issue = view.row;
        let mut line = Line::new();
        line.push_cell(
            &format!("  {} ", row_glyph(view.selected)),
            CHECKBOX_COLUMN,
            style,
        );
        line.push_cell(&issue.kind, TYPE_COLUMN, style);
        line.push_cell(&issue.error_message, message_width(width), style);
        line.push("● ", style.fg(status_color(issue.status)));
        line.push_cell(issue.status.label(), STATUS_COLUMN - 2, style);
        line.pad_to(width, style);
        line
    }

    fn footer_line(&self, base: Style) -> Line {
        let mut line = Line::new();
        match self.message {
            Some(message) => line.push(format!(" {}", message), base.fg(palette::ERROR)),
            None => line.push(format!(" {}", HINTS), base.fg(palette::MUTED)),
        };
        line
    }
}

fn message_width(width: usize) -> usize {
    width.saturating_sub(CHECKBOX_COLUMN + TYPE_COLUMN + STATUS_COLUMN)
}
