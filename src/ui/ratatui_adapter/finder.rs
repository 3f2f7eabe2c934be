//! Terminal ownership and the interactive loop
//!
//! Sets up the alternate screen, redraws after every event, and hands back
//! the committed action once the terminal has been restored.

use super::theme::Theme;
use super::view;
use crate::backend::{SessionBackend, SessionDetails};
use crate::catalog::Entry;
use crate::picker::{Action, Outcome, Picker, poll_and_handle};
use crate::ui::error::{Result, UiError};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

/// How long to wait for input before redrawing (status messages expire)
const TICK: Duration = Duration::from_millis(100);

/// Window details of the highlighted session, fetched once per selection
#[derive(Debug, Default)]
struct DetailsCache {
    name: Option<String>,
    details: Option<SessionDetails>,
}

impl DetailsCache {
    fn get(
        &mut self,
        sessions: &dyn SessionBackend,
        selected: Option<&Entry>,
    ) -> Option<&SessionDetails> {
        let wanted = selected
            .filter(|entry| entry.is_session())
            .map(|entry| entry.target.as_str());

        if self.name.as_deref() != wanted {
            self.name = wanted.map(str::to_string);
            self.details = wanted.and_then(|name| match sessions.session_details(name) {
                Ok(details) => Some(details),
                Err(e) => {
                    tracing::debug!(session = name, error = %e, "no session details");
                    None
                }
            });
        }
        self.details.as_ref()
    }

    fn invalidate(&mut self) {
        self.name = None;
        self.details = None;
    }
}

/// Full-screen session picker
pub struct SessionFinder {
    theme: Theme,
}

impl SessionFinder {
    /// Create a finder with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        picker: &mut Picker<'_>,
        sessions: &dyn SessionBackend,
    ) -> Result<Option<Action>> {
        let mut cache = DetailsCache::default();

        loop {
            picker.cleanup_status();

            let details = if view::shows_details(picker) {
                cache.get(sessions, picker.selected())
            } else {
                None
            };
            terminal.draw(|frame| view::render(frame, picker, &self.theme, details))?;

            match poll_and_handle(picker, TICK)? {
                None | Some(Outcome::Ignored) => {}
                Some(Outcome::Continue) => cache.invalidate(),
                Some(Outcome::Quit) => {
                    tracing::debug!("picker closed without a selection");
                    return Ok(None);
                }
                Some(Outcome::Commit(action)) => {
                    tracing::info!(%action, "committed");
                    return Ok(Some(action));
                }
            }
        }
    }

    /// Run the picker until the user commits or quits
    ///
    /// The terminal is restored before returning, so the caller can run the
    /// action with a normal screen.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if stdin/stdout is not a terminal or terminal I/O fails.
    pub fn run(
        &self,
        picker: &mut Picker<'_>,
        sessions: &dyn SessionBackend,
    ) -> Result<Option<Action>> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(UiError::NotInteractive);
        }

        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, picker, sessions);

        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}

impl Default for SessionFinder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSessions;

    #[test]
    fn test_details_cache_fetches_sessions_only() {
        let sessions = FakeSessions::with(&["api"]);
        let mut cache = DetailsCache::default();

        let session = Entry::session("api", false, 1);
        assert_eq!(cache.get(&sessions, Some(&session)).map(|d| d.name.as_str()), Some("api"));

        let project = Entry::project(std::path::Path::new("/code/api"), None);
        assert!(cache.get(&sessions, Some(&project)).is_none());
        assert!(cache.get(&sessions, None).is_none());
    }

    #[test]
    fn test_details_cache_invalidate() {
        let sessions = FakeSessions::with(&["api"]);
        let mut cache = DetailsCache::default();
        let session = Entry::session("api", false, 1);

        cache.get(&sessions, Some(&session));
        cache.invalidate();
        assert!(cache.name.is_none());
        assert!(cache.get(&sessions, Some(&session)).is_some());
    }
}
