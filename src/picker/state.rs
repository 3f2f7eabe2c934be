//! Selection state and mode transitions
//!
//! `Picker` owns everything the interactive loop mutates: the mode, the
//! catalog snapshot, the ranked list, and the cursor. Transitions go through
//! the methods below; key handling lives in `events.rs`.

use super::action::{Action, entry_action, resolve};
use super::mode::Mode;
use super::rank::rank;
use super::viewport::{Cursor, visible_window};
use crate::backend::{ProjectSource, SessionBackend};
use crate::catalog::{Catalog, Entry, Source};
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Default cap on rows shown while filtering
pub const DEFAULT_MAX_RESULTS: usize = 15;

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Startup options for the picker
#[derive(Debug, Clone, Copy)]
pub struct PickerOptions {
    /// Rows shown while filtering
    pub max_results: usize,
    /// Source browsed first
    pub initial_source: Source,
    /// How long status messages stay visible
    pub message_ttl: Duration,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            initial_source: Source::Sessions,
            message_ttl: Duration::from_secs(5),
        }
    }
}

/// Result of handling one input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep running
    Continue,
    /// Key had no effect
    Ignored,
    /// Leave without an action
    Quit,
    /// Leave and run this action
    Commit(Action),
}

/// Interactive selection state
pub struct Picker<'a> {
    sessions: &'a dyn SessionBackend,
    projects: &'a dyn ProjectSource,
    mode: Mode,
    source: Source,
    catalog: Catalog,
    ranked: Vec<Entry>,
    cursor: Cursor,
    max_results: usize,
    viewport_height: Option<usize>,
    status: Option<StatusMessage>,
    message_ttl: Duration,
}

impl<'a> Picker<'a> {
    /// Create the picker and pull the initial catalog
    ///
    /// When starting on sessions and none exist, the project list is shown
    /// instead.
    #[must_use]
    pub fn new(
        sessions: &'a dyn SessionBackend,
        projects: &'a dyn ProjectSource,
        options: PickerOptions,
    ) -> Self {
        let mut picker = Self {
            sessions,
            projects,
            mode: Mode::Browse,
            source: options.initial_source,
            catalog: Catalog::default(),
            ranked: Vec::new(),
            cursor: Cursor::default(),
            max_results: options.max_results.max(1),
            viewport_height: None,
            status: None,
            message_ttl: options.message_ttl,
        };

        picker.refresh();
        if picker.source == Source::Sessions && picker.catalog.is_empty() {
            picker.source = Source::Projects;
            picker.refresh();
        }
        picker
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Source browsed in browse mode
    #[must_use]
    pub const fn source(&self) -> Source {
        self.source
    }

    /// Catalog snapshot the ranked list is computed from
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current ranked list
    #[must_use]
    pub fn ranked(&self) -> &[Entry] {
        &self.ranked
    }

    /// Cursor index into the ranked list
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor.index()
    }

    /// Entry under the cursor
    #[must_use]
    pub fn selected(&self) -> Option<&Entry> {
        self.ranked.get(self.cursor.index())
    }

    /// Active status message, if not expired
    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref().filter(|m| !m.is_expired(self.message_ttl))
    }

    /// Drop an expired status message
    pub fn cleanup_status(&mut self) {
        if self.status.as_ref().is_some_and(|m| m.is_expired(self.message_ttl)) {
            self.status = None;
        }
    }

    /// Row limit for the current mode, if any
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        let mode_cap = self.mode.is_filtering().then_some(self.max_results);
        match (mode_cap, self.viewport_height) {
            (Some(cap), Some(height)) => Some(cap.min(height)),
            (cap, height) => cap.or(height),
        }
    }

    /// Rows the renderer can fit; zero means "unknown"
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = (height > 0).then_some(height);
    }

    /// Visible slice of the ranked list and its start offset
    #[must_use]
    pub fn visible(&self) -> (&[Entry], usize) {
        match self.capacity() {
            Some(capacity) => visible_window(&self.ranked, self.cursor.index(), capacity),
            None => (&self.ranked, 0),
        }
    }

    // ------------------------------------------------------------------
    // Catalog and list maintenance
    // ------------------------------------------------------------------

    fn set_status(&mut self, level: MessageLevel, text: String) {
        self.status = Some(StatusMessage::new(level, text));
    }

    fn load(&mut self, source: Source) -> Catalog {
        let loaded = match source {
            Source::Sessions => Catalog::sessions(self.sessions),
            Source::Projects => Catalog::projects(self.projects),
        };
        match loaded {
            Ok(catalog) => {
                tracing::debug!(%source, count = catalog.len(), "catalog loaded");
                catalog
            }
            Err(e) => {
                tracing::warn!(%source, error = %e, "catalog refresh failed");
                self.set_status(MessageLevel::Error, format!("Error loading {source}: {e}"));
                Catalog::default()
            }
        }
    }

    /// Reload the browse source and show it unfiltered
    pub fn refresh(&mut self) {
        self.catalog = self.load(self.source);
        self.ranked = self.catalog.entries().to_vec();
        self.cursor = Cursor::default();
    }

    /// Recompute the ranked list for the current query and reset the cursor
    fn requery(&mut self) {
        let direction = self.mode.sort_direction();
        self.ranked = rank(self.catalog.entries(), self.mode.query(), direction);
        self.cursor.reset(direction, self.ranked.len());
    }

    // ------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------

    /// Move the cursor up
    pub const fn move_up(&mut self) {
        self.cursor.move_up();
    }

    /// Move the cursor down
    pub fn move_down(&mut self) {
        self.cursor.move_down(self.ranked.len());
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Browse → Filter
    pub fn enter_filter(&mut self) {
        self.mode = Mode::filter();
        self.ranked = self.catalog.entries().to_vec();
        self.cursor = Cursor::default();
    }

    /// Browse → Create, listing projects with the cursor on the last one
    pub fn enter_create(&mut self) {
        self.mode = Mode::create();
        self.catalog = self.load(Source::Projects);
        self.ranked = self.catalog.entries().to_vec();
        self.cursor.reset(self.mode.sort_direction(), self.ranked.len());
    }

    /// Browse → Rename, only when the cursor is on a session
    pub fn enter_rename(&mut self) -> bool {
        match self.selected() {
            Some(entry) if entry.is_session() => {
                self.mode = Mode::rename(entry.title.clone());
                true
            }
            _ => false,
        }
    }

    /// Any mode → Browse with a fresh catalog
    pub fn return_to_browse(&mut self) {
        self.mode = Mode::Browse;
        self.refresh();
    }

    /// Leave rename without touching the session
    pub fn cancel_rename(&mut self) {
        self.mode = Mode::Browse;
    }

    /// Switch the browse source and reload
    pub fn set_source(&mut self, source: Source) {
        self.source = source;
        self.refresh();
    }

    /// Explicit refresh from browse mode
    pub fn manual_refresh(&mut self) {
        self.status = None;
        self.refresh();
        if self.status.is_none() {
            self.set_status(MessageLevel::Info, "Refreshed".to_string());
        }
    }

    /// Apply an edit to the current text input
    ///
    /// Filtering modes re-rank on every change.
    pub fn edit_input(&mut self, key: crossterm::event::KeyEvent) -> super::query::EditResult {
        use super::query::EditResult;

        let Some(input) = self.mode.input_mut() else {
            return EditResult::Unhandled;
        };
        let result = input.apply_key(key);
        if result == EditResult::Changed && self.mode.is_filtering() {
            self.requery();
        }
        result
    }

    /// Kill the session under the cursor and reload
    pub fn kill_selected(&mut self) -> bool {
        let Some(name) = self
            .selected()
            .filter(|entry| entry.is_session())
            .map(|entry| entry.target.clone())
        else {
            return false;
        };

        match self.sessions.kill_session(&name) {
            Ok(()) => {
                tracing::info!(session = %name, "session killed");
                self.refresh();
                self.set_status(MessageLevel::Success, format!("Session '{name}' killed"));
            }
            Err(e) => {
                tracing::warn!(session = %name, error = %e, "kill failed");
                self.set_status(MessageLevel::Error, format!("Error killing session: {e}"));
            }
        }
        true
    }

    /// Commit the rename buffer
    ///
    /// Unchanged or empty text returns to browse without calling the backend.
    /// A failed rename stays in rename mode so the name can be corrected.
    pub fn commit_rename(&mut self) {
        let Mode::Rename { input, target } = &self.mode else {
            return;
        };
        let new_name = input.text().trim().to_string();
        let target = target.clone();

        if new_name.is_empty() || new_name == target {
            self.mode = Mode::Browse;
            return;
        }

        match self.sessions.rename_session(&target, &new_name) {
            Ok(()) => {
                tracing::info!(from = %target, to = %new_name, "session renamed");
                self.return_to_browse();
                self.set_status(
                    MessageLevel::Success,
                    format!("Session renamed to '{new_name}'"),
                );
            }
            Err(e) => {
                tracing::warn!(session = %target, error = %e, "rename failed");
                self.set_status(MessageLevel::Error, format!("Error renaming session: {e}"));
            }
        }
    }

    /// Resolve a commit in browse, filter, or create mode
    #[must_use]
    pub fn commit(&self) -> Option<Action> {
        resolve(&self.mode, &self.ranked, self.cursor.index())
    }

    /// Pick the `n`-th (1-based) row of the visible window
    #[must_use]
    pub fn quick_select(&self, n: usize) -> Option<Action> {
        let (visible, _) = self.visible();
        n.checked_sub(1)
            .and_then(|idx| visible.get(idx))
            .map(entry_action)
    }
}

impl std::fmt::Debug for Picker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Picker")
            .field("mode", &self.mode)
            .field("source", &self.source)
            .field("ranked", &self.ranked.len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeProjects, FakeSessions};

    #[test]
    fn test_starts_on_sessions() {
        let sessions = FakeSessions::with(&["web", "api"]);
        let projects = FakeProjects::default();
        let picker = Picker::new(&sessions, &projects, PickerOptions::default());

        assert_eq!(picker.source(), Source::Sessions);
        assert_eq!(picker.ranked()[0].title, "api");
        assert_eq!(picker.cursor(), 0);
    }

    #[test]
    fn test_falls_back_to_projects_without_sessions() {
        let sessions = FakeSessions::default();
        let projects = FakeProjects::with(&["/dev/widgets"]);
        let picker = Picker::new(&sessions, &projects, PickerOptions::default());

        assert_eq!(picker.source(), Source::Projects);
        assert_eq!(picker.ranked().len(), 1);
    }

    #[test]
    fn test_capacity_by_mode_and_viewport() {
        let sessions = FakeSessions::with(&["a"]);
        let projects = FakeProjects::default();
        let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

        assert_eq!(picker.capacity(), None);
        picker.set_viewport_height(10);
        assert_eq!(picker.capacity(), Some(10));

        picker.enter_filter();
        assert_eq!(picker.capacity(), Some(10));
        picker.set_viewport_height(40);
        assert_eq!(picker.capacity(), Some(DEFAULT_MAX_RESULTS));
    }

    #[test]
    fn test_load_failure_sets_status() {
        let sessions = FakeSessions::failing_list();
        let projects = FakeProjects::default();
        let picker = Picker::new(&sessions, &projects, PickerOptions::default());

        let status = picker.status().unwrap();
        assert_eq!(status.level, MessageLevel::Error);
        assert!(status.text.starts_with("Error loading sessions"));
    }

    #[test]
    fn test_status_expires() {
        let sessions = FakeSessions::with(&["a"]);
        let projects = FakeProjects::default();
        let options = PickerOptions {
            message_ttl: Duration::ZERO,
            ..PickerOptions::default()
        };
        let mut picker = Picker::new(&sessions, &projects, options);
        picker.manual_refresh();
        std::thread::sleep(Duration::from_millis(2));

        assert!(picker.status().is_none());
        picker.cleanup_status();
        assert!(picker.status.is_none());
    }
}
