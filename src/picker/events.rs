//! Key handling for each mode
//!
//! Maps crossterm key events onto `Picker` transitions. Every event is fully
//! applied before the next one is read.

use super::mode::Mode;
use super::query::EditResult;
use super::state::{Outcome, Picker};
use crate::catalog::Source;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

impl Picker<'_> {
    /// Apply one key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        match self.mode() {
            Mode::Browse => self.handle_browse(key),
            Mode::Filter { .. } | Mode::Create { .. } => self.handle_search(key),
            Mode::Rename { .. } => self.handle_rename(key),
        }
    }

    fn handle_browse(&mut self, key: KeyEvent) -> Outcome {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _)
            | (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Outcome::Quit,

            (KeyCode::Enter, _) => self.commit().map_or(Outcome::Ignored, Outcome::Commit),

            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                self.move_up();
                Outcome::Continue
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                self.move_down();
                Outcome::Continue
            }

            (KeyCode::Char(digit @ '1'..='9'), KeyModifiers::NONE) => {
                let n = digit.to_digit(10).map_or(0, |d| d as usize);
                self.quick_select(n).map_or(Outcome::Ignored, Outcome::Commit)
            }

            (KeyCode::Char('i' | '/'), KeyModifiers::NONE) => {
                self.enter_filter();
                Outcome::Continue
            }
            (KeyCode::Char('n'), KeyModifiers::NONE) => {
                self.enter_create();
                Outcome::Continue
            }
            (KeyCode::Char('r'), KeyModifiers::NONE) => {
                if self.enter_rename() {
                    Outcome::Continue
                } else {
                    Outcome::Ignored
                }
            }
            (KeyCode::Char('d'), KeyModifiers::NONE) => {
                if self.kill_selected() {
                    Outcome::Continue
                } else {
                    Outcome::Ignored
                }
            }
            (KeyCode::Char('R'), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.manual_refresh();
                Outcome::Continue
            }
            (KeyCode::Char('s'), KeyModifiers::NONE) => {
                self.set_source(Source::Sessions);
                Outcome::Continue
            }
            (KeyCode::Char('p'), KeyModifiers::NONE) => {
                self.set_source(Source::Projects);
                Outcome::Continue
            }

            _ => Outcome::Ignored,
        }
    }

    /// Filter and create share navigation, editing, and commit handling
    fn handle_search(&mut self, key: KeyEvent) -> Outcome {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.return_to_browse();
                Outcome::Continue
            }
            (KeyCode::Enter, _) => self.commit().map_or(Outcome::Ignored, Outcome::Commit),
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
                self.move_up();
                Outcome::Continue
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
                self.move_down();
                Outcome::Continue
            }
            _ => self.edit_outcome(key),
        }
    }

    fn handle_rename(&mut self, key: KeyEvent) -> Outcome {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.cancel_rename();
                Outcome::Continue
            }
            (KeyCode::Enter, _) => {
                self.commit_rename();
                Outcome::Continue
            }
            _ => self.edit_outcome(key),
        }
    }

    fn edit_outcome(&mut self, key: KeyEvent) -> Outcome {
        match self.edit_input(key) {
            EditResult::Changed | EditResult::Unchanged => Outcome::Continue,
            EditResult::Unhandled => Outcome::Ignored,
        }
    }
}

/// Wait up to `timeout` for a key press and apply it
///
/// Returns `None` when no event arrived. A resize is reported as
/// `Continue` so the caller redraws.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    picker: &mut Picker<'_>,
    timeout: Duration,
) -> std::io::Result<Option<Outcome>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let outcome = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => picker.handle_key(key),
        Event::Resize(_, _) => Outcome::Continue,
        _ => Outcome::Ignored,
    };
    Ok(Some(outcome))
}
