//! Interactive issue table.

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use triage_lib::source::{load_issues, parse_issues};
use triage_lib::{Issue, RowBindings, SelectAll, SelectionStore, Target};

use crate::error::AppError;
use crate::hit::{Hit, HitMap};
use crate::render::Line;
use crate::table::{TableView, body_height};
use crate::terminal::Terminal;

/// Issues shipped with the binary, used when no dataset path is configured.
const BUNDLED_ISSUES: &str = include_str!("../data/issues.json");

/// Where the table's rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Bundled,
}

impl DatasetSource {
    /// Load a fresh copy of the dataset.
    pub fn load(&self) -> Result<Vec<Issue>, triage_lib::Error> {
        match self {
            DatasetSource::File(path) => load_issues(path),
            DatasetSource::Bundled => parse_issues(BUNDLED_ISSUES),
        }
    }
}

/// Application state for the issue table.
///
/// Events are handled one at a time to completion: every gesture mutates the
/// store and the next frame is derived from it before another event is read.
pub struct App {
    store: SelectionStore<Issue>,
    bindings: RowBindings,
    source: DatasetSource,
    cursor: Option<usize>,
    scroll: usize,
    /// Visible data rows in the last frame.
    page_rows: usize,
    /// Clickable regions of the last frame.
    hits: HitMap,
    message: Option<String>,
    quit: bool,
}

impl App {
    pub fn new(rows: Vec<Issue>, source: DatasetSource) -> Self {
        let store = SelectionStore::new(rows);
        let bindings = store.bindings();
        let cursor = (!store.is_empty()).then_some(0);
        Self {
            store,
            bindings,
            source,
            cursor,
            scroll: 0,
            page_rows: 0,
            hits: HitMap::new(),
            message: None,
            quit: false,
        }
    }

    /// Load the dataset from `source` and build the app around it.
    pub fn load(source: DatasetSource) -> Result<Self, AppError> {
        let rows = source.load()?;
        Ok(Self::new(rows, source))
    }

    pub fn store(&self) -> &SelectionStore<Issue> {
        &self.store
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Swap in a new dataset. The selection always starts over.
    pub fn replace_rows(&mut self, rows: Vec<Issue>) {
        self.store.replace_rows(Arc::from(rows));
        self.bindings = self.store.bindings();
        self.scroll = 0;
        self.cursor = match self.store.len() {
            0 => None,
            len => Some(self.cursor.unwrap_or(0).min(len - 1)),
        };
    }

    /// Re-read the dataset from its source.
    pub fn reload(&mut self) {
        match self.source.load() {
            Ok(rows) => {
                log::info!("Reloaded {} issues", rows.len());
                self.replace_rows(rows);
                self.message = None;
            }
            Err(e) => {
                log::error!("Reload failed: {}", e);
                self.message = Some(format!("Reload failed: {}", e));
            }
        }
    }

    /// Render the next frame and remember its clickable regions.
    pub fn frame(&mut self, width: u16, height: u16) -> Vec<Line> {
        self.page_rows = body_height(height);
        self.scroll_to_cursor();

        let view = TableView {
            store: &self.store,
            bindings: &self.bindings,
            cursor: self.cursor,
            scroll: self.scroll,
            message: self.message.as_deref(),
        };
        let (lines, hits) = view.render(width, height);
        self.hits = hits;
        lines
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            _ => {}
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-(self.page_rows.max(1) as isize)),
            KeyCode::PageDown => self.move_cursor(self.page_rows.max(1) as isize),
            KeyCode::Home => self.set_cursor(0),
            KeyCode::End => self.set_cursor(self.store.len().saturating_sub(1)),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(index) = self.cursor {
                    self.bindings
                        .dispatch(&mut self.store, Target::Control(index));
                }
            }
            KeyCode::Char('a') => {
                SelectAll::activate(&mut self.store);
            }
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            MouseEventKind::ScrollUp => self.move_cursor(-1),
            MouseEventKind::ScrollDown => self.move_cursor(1),
            _ => {}
        }
    }

    /// Left click at a screen position from the last frame.
    pub fn click(&mut self, x: u16, y: u16) {
        match self.hits.hit_test(x, y) {
            Some(Hit::SelectAll) => {
                SelectAll::activate(&mut self.store);
            }
            Some(Hit::Row(target)) => {
                self.cursor = Some(target.index());
                self.bindings.dispatch(&mut self.store, target);
            }
            None => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let Some(cursor) = self.cursor else { return };
        self.set_cursor(cursor.saturating_add_signed(delta));
    }

    fn set_cursor(&mut self, index: usize) {
        if self.store.is_empty() {
            self.cursor = None;
            return;
        }
        self.cursor = Some(index.min(self.store.len() - 1));
    }

    fn scroll_to_cursor(&mut self) {
        let Some(cursor) = self.cursor else {
            self.scroll = 0;
            return;
        };
        if self.page_rows == 0 {
            return;
        }
        if cursor < self.scroll {
            self.scroll = cursor;
        } else if cursor >= self.scroll + self.page_rows {
            self.scroll = cursor + 1 - self.page_rows;
        }
    }
}

/// Run the table until the user quits.
pub fn run(mut app: App) -> Result<(), AppError> {
    let mut terminal = Terminal::new()?;

    loop {
        let (width, height) = terminal.size()?;
        let frame = app.frame(width, height);
        terminal.draw(&frame)?;

        if app.should_quit() {
            break;
        }

        for event in terminal.poll(None)? {
            app.handle_event(event);
        }
    }

    let aggregates = app.store().aggregates();
    log::info!(
        "Exiting with {} of {} open issues selected (total impact {})",
        aggregates.selected_count,
        aggregates.eligible_count,
        aggregates.selected_weight_total
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{BODY_Y, CHECKBOX_X, SUMMARY_Y};
    use triage_lib::{IssueStatus, TriState};

    fn issue(id: &str, status: IssueStatus, impact: f64) -> Issue {
        Issue {
            id: id.to_string(),
            kind: "TypeError".to_string(),
            error_message: format!("boom {}", id),
            status,
            num_events: 1,
            num_users: 1,
            impact_score: impact,
        }
    }

    fn rows() -> Vec<Issue> {
        vec![
            issue("a", IssueStatus::Open, 5.0),
            issue("b", IssueStatus::Resolved, 9.0),
            issue("c", IssueStatus::Open, 3.0),
        ]
    }

    fn app() -> App {
        let mut app = App::new(rows(), DatasetSource::Bundled);
        app.frame(80, 24);
        app
    }

    fn key(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn row_y(index: usize) -> u16 {
        BODY_Y + index as u16
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    #[test]
    fn test_click_row_body_toggles() {
        let mut app = app();

        app.click(40, row_y(0));

        assert!(app.store().is_selected(0));
        assert_eq!(app.cursor, Some(0));
    }

    #[test]
    fn test_click_checkbox_toggles_once() {
        let mut app = app();

        app.click(CHECKBOX_X + 1, row_y(2));
        assert!(app.store().is_selected(2));

        app.frame(80, 24);
        app.click(CHECKBOX_X + 1, row_y(2));
        assert!(!app.store().is_selected(2));
    }

    #[test]
    fn test_click_ineligible_row_does_nothing() {
        let mut app = app();

        app.click(40, row_y(1));
        app.click(CHECKBOX_X, row_y(1));

        assert_eq!(app.store().selection(), &[false, false, false]);
    }

    #[test]
    fn test_click_ineligible_checkbox_keeps_cursor() {
        let mut app = app();
        app.click(40, row_y(0));
        app.frame(80, 24);

        app.click(CHECKBOX_X + 1, row_y(1));

        assert_eq!(app.cursor, Some(0));
        assert_eq!(app.store().selection(), &[true, false, false]);
    }

    #[test]
    fn test_click_select_all() {
        let mut app = app();
        app.click(40, row_y(0));
        app.frame(80, 24);

        app.click(CHECKBOX_X, SUMMARY_Y);
        assert_eq!(app.store().selection(), &[true, false, true]);

        app.frame(80, 24);
        app.click(CHECKBOX_X, SUMMARY_Y);
        assert_eq!(app.store().selection(), &[false, false, false]);
    }

    #[test]
    fn test_click_outside_table_ignored() {
        let mut app = app();

        app.click(40, 0);
        app.click(40, row_y(10));

        assert_eq!(app.store().aggregates().selected_count, 0);
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    #[test]
    fn test_space_toggles_cursor_row() {
        let mut app = app();

        key(&mut app, KeyCode::Char(' '));
        assert!(app.store().is_selected(0));

        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Char(' '));
        assert!(!app.store().is_selected(1));

        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Enter);
        assert!(app.store().is_selected(2));
        assert_eq!(app.store().summary().select_all, TriState::Checked);
    }

    #[test]
    fn test_select_all_key() {
        let mut app = app();

        key(&mut app, KeyCode::Char('a'));
        assert_eq!(app.store().summary().select_all, TriState::Checked);

        key(&mut app, KeyCode::Char('a'));
        assert_eq!(app.store().summary().select_all, TriState::Unchecked);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app();

        key(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, Some(0));

        key(&mut app, KeyCode::End);
        key(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, Some(2));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = self::app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    // ========================================================================
    // Dataset
    // ========================================================================

    #[test]
    fn test_replace_rows_with_same_ids_resets() {
        let mut app = app();
        key(&mut app, KeyCode::Char('a'));

        app.replace_rows(rows());

        assert_eq!(app.store().aggregates().selected_count, 0);
    }

    #[test]
    fn test_replace_rows_clamps_cursor() {
        let mut app = app();
        key(&mut app, KeyCode::End);

        app.replace_rows(vec![issue("z", IssueStatus::Open, 1.0)]);
        assert_eq!(app.cursor, Some(0));

        app.replace_rows(Vec::new());
        assert_eq!(app.cursor, None);
    }

    #[test]
    fn test_reload_bundled_resets_selection() {
        let mut app = App::load(DatasetSource::Bundled).unwrap();
        app.frame(120, 40);
        key(&mut app, KeyCode::Char('a'));
        assert!(app.store().aggregates().selected_count > 0);

        key(&mut app, KeyCode::Char('r'));

        assert_eq!(app.store().aggregates().selected_count, 0);
        assert_eq!(app.message.as_deref(), None);
    }

    #[test]
    fn test_reload_failure_keeps_selection() {
        let mut app = App::new(
            rows(),
            DatasetSource::File(PathBuf::from("/no/such/triage/issues.json")),
        );
        app.frame(80, 24);
        key(&mut app, KeyCode::Char(' '));

        app.reload();

        assert!(app.store().is_selected(0));
        assert!(app.message.as_deref().is_some_and(|m| m.starts_with("Reload failed")));
    }

    // ========================================================================
    // Frame
    // ========================================================================

    #[test]
    fn test_frame_fills_terminal() {
        let mut app = app();

        let lines = app.frame(80, 24);

        assert_eq!(lines.len(), 24);
        assert!(lines.iter().all(|l| l.width() == 80));
    }

    #[test]
    fn test_frame_summary_line() {
        let mut app = app();
        app.click(40, row_y(0));

        let lines = app.frame(80, 24);

        assert!(
            lines[SUMMARY_Y as usize]
                .text()
                .starts_with("  [-] Selected 1 (Total impact 5)")
        );
        assert!(lines[row_y(0) as usize].text().starts_with("  [x] TypeError"));
        assert!(lines[row_y(1) as usize].text().contains("● Resolved"));
    }

    #[test]
    fn test_frame_error_message_stays_on_one_line() {
        let mut noisy = rows();
        noisy[0].error_message = "line one\nline two\tx\x1b[2J\r".to_string();
        let mut app = App::new(noisy, DatasetSource::Bundled);

        let lines = app.frame(80, 24);

        let text = lines[row_y(0) as usize].text();
        assert!(text.contains("line one line two x [2J"));
        assert!(!text.chars().any(char::is_control));
        assert!(lines.iter().all(|l| l.width() == 80));
    }

    #[test]
    fn test_frame_empty_dataset() {
        let mut app = App::new(Vec::new(), DatasetSource::Bundled);

        let lines = app.frame(80, 24);

        assert!(lines[SUMMARY_Y as usize].text().starts_with("  [ ] None selected"));
        assert!(lines[BODY_Y as usize].text().starts_with("  No issues"));
        app.click(CHECKBOX_X, SUMMARY_Y);
        assert!(app.store().selection().is_empty());
    }

    #[test]
    fn test_scrolled_click_maps_to_row() {
        let many: Vec<Issue> = (0..20)
            .map(|i| issue(&i.to_string(), IssueStatus::Open, 1.0))
            .collect();
        let mut app = App::new(many, DatasetSource::Bundled);
        // 10 lines high leaves 4 data rows
        app.frame(80, 10);

        key(&mut app, KeyCode::End);
        app.frame(80, 10);
        app.click(40, BODY_Y);

        // Rows 16..20 are visible after scrolling to the end
        assert!(app.store().is_selected(16));
        assert_eq!(app.store().aggregates().selected_count, 1);
    }
}
