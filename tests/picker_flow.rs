//! Integration tests for the picker
//!
//! Drive `Picker` with key events against recording backends, and against a
//! real project scan of a temporary directory tree.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mux_sesh::backend::{
    BackendError, FsProjectScanner, ProjectSource, Result, SessionBackend, SessionDetails,
    SessionInfo,
};
use mux_sesh::picker::{Action, Mode, Outcome, Picker, PickerOptions};
use mux_sesh::ui::MessageLevel;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Session backend that records kills and renames
#[derive(Default)]
struct Sessions {
    names: RefCell<Vec<String>>,
    log: RefCell<Vec<String>>,
    broken: bool,
}

impl Sessions {
    fn with(names: &[&str]) -> Self {
        Self {
            names: RefCell::new(names.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }

    fn broken(names: &[&str]) -> Self {
        Self {
            broken: true,
            ..Self::with(names)
        }
    }

    fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    fn fail(&self, command: &str) -> Result<()> {
        if self.broken {
            Err(BackendError::CommandFailed {
                program: "tmux".to_string(),
                command: command.to_string(),
                detail: "no such session".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl SessionBackend for Sessions {
    fn list_sessions(&self) -> Result<Vec<SessionInfo>> {
        Ok(self
            .names
            .borrow()
            .iter()
            .map(|name| SessionInfo {
                name: name.clone(),
                attached: false,
                windows: 1,
            })
            .collect())
    }

    fn session_details(&self, name: &str) -> Result<SessionDetails> {
        Ok(SessionDetails {
            name: name.to_string(),
            windows: Vec::new(),
        })
    }

    fn switch_to(&self, name: &str) -> Result<()> {
        self.log.borrow_mut().push(format!("switch {name}"));
        Ok(())
    }

    fn create_at(&self, path: &Path) -> Result<String> {
        self.log.borrow_mut().push(format!("create {}", path.display()));
        Ok(String::new())
    }

    fn create_named(&self, name: &str) -> Result<()> {
        self.log.borrow_mut().push(format!("create {name}"));
        Ok(())
    }

    fn kill_session(&self, name: &str) -> Result<()> {
        self.fail("kill-session")?;
        self.names.borrow_mut().retain(|n| n != name);
        self.log.borrow_mut().push(format!("kill {name}"));
        Ok(())
    }

    fn rename_session(&self, old: &str, new: &str) -> Result<()> {
        self.fail("rename-session")?;
        for name in self.names.borrow_mut().iter_mut() {
            if name == old {
                *name = new.to_string();
            }
        }
        self.log.borrow_mut().push(format!("rename {old} {new}"));
        Ok(())
    }
}

#[derive(Default)]
struct Projects(Vec<PathBuf>);

impl Projects {
    fn with(paths: &[&str]) -> Self {
        Self(paths.iter().map(PathBuf::from).collect())
    }
}

impl ProjectSource for Projects {
    fn list_projects(&self) -> Result<Vec<PathBuf>> {
        Ok(self.0.clone())
    }
}

fn press(picker: &mut Picker<'_>, code: KeyCode) -> Outcome {
    picker.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(picker: &mut Picker<'_>, text: &str) {
    for c in text.chars() {
        press(picker, KeyCode::Char(c));
    }
}

fn titles(picker: &Picker<'_>) -> Vec<String> {
    picker.ranked().iter().map(|e| e.title.clone()).collect()
}

#[test]
fn test_search_then_switch() {
    let sessions = Sessions::with(&["alpha", "alphabet", "beta"]);
    let projects = Projects::default();
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    press(&mut picker, KeyCode::Char('i'));
    type_text(&mut picker, "alpha");
    assert_eq!(titles(&picker), vec!["alpha", "alphabet"]);

    assert_eq!(
        press(&mut picker, KeyCode::Enter),
        Outcome::Commit(Action::Switch("alpha".to_string()))
    );
}

#[test]
fn test_rename_unchanged_makes_no_call() {
    let sessions = Sessions::with(&["api"]);
    let projects = Projects::default();
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    press(&mut picker, KeyCode::Char('r'));
    assert!(matches!(picker.mode(), Mode::Rename { .. }));
    press(&mut picker, KeyCode::Enter);

    assert_eq!(picker.mode(), &Mode::Browse);
    assert!(sessions.log().is_empty());
}

#[test]
fn test_rename_commits_new_name() {
    let sessions = Sessions::with(&["api"]);
    let projects = Projects::default();
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    press(&mut picker, KeyCode::Char('r'));
    for _ in 0..3 {
        press(&mut picker, KeyCode::Backspace);
    }
    type_text(&mut picker, "gateway");
    press(&mut picker, KeyCode::Enter);

    assert_eq!(sessions.log(), vec!["rename api gateway".to_string()]);
    assert_eq!(picker.mode(), &Mode::Browse);
    assert_eq!(titles(&picker), vec!["gateway"]);
    assert_eq!(picker.status().map(|s| s.level), Some(MessageLevel::Success));
}

#[test]
fn test_failed_rename_keeps_mode_and_reports() {
    let sessions = Sessions::broken(&["api"]);
    let projects = Projects::default();
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    press(&mut picker, KeyCode::Char('r'));
    type_text(&mut picker, "2");
    press(&mut picker, KeyCode::Enter);

    assert!(matches!(picker.mode(), Mode::Rename { .. }));
    let status = picker.status().unwrap();
    assert_eq!(status.level, MessageLevel::Error);
    assert!(status.text.contains("no such session"));
}

#[test]
fn test_kill_refreshes_list() {
    let sessions = Sessions::with(&["api", "web"]);
    let projects = Projects::default();
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    assert_eq!(press(&mut picker, KeyCode::Char('d')), Outcome::Continue);

    assert_eq!(sessions.log(), vec!["kill api".to_string()]);
    assert_eq!(titles(&picker), vec!["web"]);
    assert_eq!(picker.cursor(), 0);
    assert_eq!(picker.status().map(|s| s.level), Some(MessageLevel::Success));
}

#[test]
fn test_failed_kill_keeps_list() {
    let sessions = Sessions::broken(&["api", "web"]);
    let projects = Projects::default();
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    press(&mut picker, KeyCode::Down);
    press(&mut picker, KeyCode::Char('d'));

    assert_eq!(picker.mode(), &Mode::Browse);
    assert_eq!(titles(&picker), vec!["api", "web"]);
    assert_eq!(picker.cursor(), 1);
    assert_eq!(picker.status().map(|s| s.level), Some(MessageLevel::Error));
}

#[test]
fn test_create_lists_best_match_last() {
    let sessions = Sessions::with(&["scratch"]);
    let projects = Projects::with(&["/code/web", "/code/apigw", "/code/api"]);
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    press(&mut picker, KeyCode::Char('n'));
    assert!(matches!(picker.mode(), Mode::Create { .. }));
    assert_eq!(picker.ranked().len(), 3);
    assert_eq!(picker.cursor(), 2);

    type_text(&mut picker, "api");
    assert_eq!(titles(&picker), vec!["apigw", "api"]);
    assert_eq!(picker.cursor(), 1);

    assert_eq!(
        press(&mut picker, KeyCode::Enter),
        Outcome::Commit(Action::CreateFromPath(PathBuf::from("/code/api")))
    );
}

#[test]
fn test_create_needs_a_query_to_commit() {
    let sessions = Sessions::with(&["scratch"]);
    let projects = Projects::with(&["/code/web", "/code/api"]);
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    press(&mut picker, KeyCode::Char('n'));
    assert_eq!(press(&mut picker, KeyCode::Enter), Outcome::Ignored);

    type_text(&mut picker, "web");
    assert_eq!(
        press(&mut picker, KeyCode::Enter),
        Outcome::Commit(Action::CreateFromPath(PathBuf::from("/code/web")))
    );
}

#[test]
fn test_create_remote_reference_wins() {
    let sessions = Sessions::with(&["scratch"]);
    let projects = Projects::with(&["/code/widgets"]);
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    press(&mut picker, KeyCode::Char('n'));
    type_text(&mut picker, "https://github.com/acme/widgets");

    assert_eq!(
        press(&mut picker, KeyCode::Enter),
        Outcome::Commit(Action::CloneAndCreate(
            "https://github.com/acme/widgets".to_string()
        ))
    );
}

#[test]
fn test_create_free_text_name() {
    let sessions = Sessions::with(&["scratch"]);
    let projects = Projects::with(&["/code/web"]);
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    press(&mut picker, KeyCode::Char('n'));
    type_text(&mut picker, "notes");

    assert!(picker.ranked().is_empty());
    assert_eq!(
        press(&mut picker, KeyCode::Enter),
        Outcome::Commit(Action::CreateNamed("notes".to_string()))
    );
}

#[test]
fn test_escape_from_create_returns_to_sessions() {
    let sessions = Sessions::with(&["scratch"]);
    let projects = Projects::with(&["/code/web"]);
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    press(&mut picker, KeyCode::Char('n'));
    press(&mut picker, KeyCode::Esc);

    assert_eq!(picker.mode(), &Mode::Browse);
    assert_eq!(titles(&picker), vec!["scratch"]);
}

#[test]
fn test_quick_select_uses_visible_window() {
    let sessions = Sessions::with(&["p1", "p2", "p3", "p4", "p5"]);
    let projects = Projects::default();
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());
    picker.set_viewport_height(3);

    for _ in 0..4 {
        press(&mut picker, KeyCode::Down);
    }
    let (visible, offset) = picker.visible();
    assert_eq!(offset, 2);
    assert_eq!(visible.len(), 3);

    assert_eq!(
        press(&mut picker, KeyCode::Char('1')),
        Outcome::Commit(Action::Switch("p3".to_string()))
    );
    assert_eq!(press(&mut picker, KeyCode::Char('4')), Outcome::Ignored);
}

#[test]
fn test_cursor_stays_in_bounds() {
    let sessions = Sessions::with(&["a", "b"]);
    let projects = Projects::default();
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    for _ in 0..5 {
        press(&mut picker, KeyCode::Up);
    }
    assert_eq!(picker.cursor(), 0);
    for _ in 0..5 {
        press(&mut picker, KeyCode::Down);
    }
    assert_eq!(picker.cursor(), 1);
}

#[test]
fn test_empty_catalog_commit_is_ignored() {
    let sessions = Sessions::default();
    let projects = Projects::default();
    let mut picker = Picker::new(&sessions, &projects, PickerOptions::default());

    assert!(picker.ranked().is_empty());
    assert_eq!(press(&mut picker, KeyCode::Enter), Outcome::Ignored);
    assert_eq!(picker.cursor(), 0);
}

#[test]
fn test_create_from_scanned_tree() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    for dir in ["work/api", "work/api/node_modules/dep", "work/.cache", "site"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }

    let sessions = Sessions::default();
    let scanner = FsProjectScanner::new(vec![root.to_path_buf()]);
    let mut picker = Picker::new(&sessions, &scanner, PickerOptions::default());

    let mut found = titles(&picker);
    found.sort();
    assert_eq!(found, vec!["api", "site", "work"]);

    press(&mut picker, KeyCode::Char('n'));
    type_text(&mut picker, "api");
    assert_eq!(
        press(&mut picker, KeyCode::Enter),
        Outcome::Commit(Action::CreateFromPath(root.join("work/api")))
    );
}
