//! tmux-backed session operations

use super::error::{BackendError, Result};
use super::traits::{SessionBackend, SessionDetails, SessionInfo, WindowInfo};
use super::{run_captured, run_interactive};
use std::path::Path;
use std::process::Command;
use std::thread;
use std::time::Duration;

const TMUX: &str = "tmux";

/// Delay before the editor command is sent to a freshly attached server
const EDITOR_DELAY: Duration = Duration::from_millis(100);

const SESSION_FORMAT: &str = "#{session_name}:#{session_attached}:#{session_windows}";
const WINDOW_FORMAT: &str =
    "#{window_index}\t#{window_name}\t#{pane_current_command}\t#{pane_current_path}";

/// Session backend that shells out to `tmux`
#[derive(Debug, Clone, Default)]
pub struct TmuxBackend {
    /// Command typed into new sessions (empty disables it)
    editor_cmd: String,
}

impl TmuxBackend {
    /// Create a backend that opens `editor_cmd` in new sessions
    #[must_use]
    pub fn new(editor_cmd: impl Into<String>) -> Self {
        Self {
            editor_cmd: editor_cmd.into(),
        }
    }

    fn inside_tmux() -> bool {
        std::env::var_os("TMUX").is_some_and(|v| !v.is_empty())
    }

    fn server_running() -> bool {
        Command::new(TMUX)
            .arg("list-sessions")
            .output()
            .is_ok_and(|output| output.status.success())
    }

    fn has_session(name: &str) -> bool {
        Command::new(TMUX)
            .args(["has-session", "-t", &exact(name)])
            .output()
            .is_ok_and(|output| output.status.success())
    }

    fn send_editor(&self, name: &str) {
        if self.editor_cmd.trim().is_empty() {
            return;
        }
        if let Err(e) = run_captured(TMUX, &["send-keys", "-t", name, &self.editor_cmd, "Enter"]) {
            tracing::debug!(session = name, error = %e, "editor command not sent");
        }
    }

    /// Send the editor command once the attached server is up
    ///
    /// Fire-and-forget: the thread is never joined and failures are dropped.
    fn spawn_editor_later(&self, name: &str) {
        if self.editor_cmd.trim().is_empty() {
            return;
        }
        let name = name.to_string();
        let editor_cmd = self.editor_cmd.clone();
        thread::spawn(move || {
            thread::sleep(EDITOR_DELAY);
            let _ = Command::new(TMUX)
                .args(["send-keys", "-t", &name, &editor_cmd, "Enter"])
                .output();
        });
    }

    fn create_session(&self, name: &str, dir: Option<&Path>) -> Result<()> {
        let dir = dir.map(|d| d.to_string_lossy().into_owned());

        if !Self::inside_tmux() && !Self::server_running() {
            tracing::info!(session = name, "starting tmux server with new session");
            let mut args = vec!["new-session", "-s", name];
            if let Some(dir) = dir.as_deref() {
                args.extend(["-c", dir]);
            }
            self.spawn_editor_later(name);
            return run_interactive(TMUX, &args);
        }

        if !Self::has_session(name) {
            tracing::info!(session = name, "creating detached session");
            let mut args = vec!["new-session", "-d", "-s", name];
            if let Some(dir) = dir.as_deref() {
                args.extend(["-c", dir]);
            }
            run_captured(TMUX, &args)?;
            self.send_editor(name);
        }

        self.switch_to(name)
    }
}

impl SessionBackend for TmuxBackend {
    fn list_sessions(&self) -> Result<Vec<SessionInfo>> {
        match run_captured(TMUX, &["list-sessions", "-F", SESSION_FORMAT]) {
            Ok(output) => Ok(parse_sessions(&String::from_utf8_lossy(&output.stdout))),
            // No server means no sessions
            Err(BackendError::CommandFailed { .. }) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    fn session_details(&self, name: &str) -> Result<SessionDetails> {
        let output = run_captured(
            TMUX,
            &["list-windows", "-t", &exact(name), "-F", WINDOW_FORMAT],
        )?;
        Ok(SessionDetails {
            name: name.to_string(),
            windows: parse_windows(&String::from_utf8_lossy(&output.stdout)),
        })
    }

    fn switch_to(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }
        if Self::inside_tmux() {
            run_captured(TMUX, &["switch-client", "-t", &exact(name)]).map(|_| ())
        } else {
            run_interactive(TMUX, &["attach-session", "-t", &exact(name)])
        }
    }

    fn create_at(&self, path: &Path) -> Result<String> {
        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = sanitize_session_name(&base);
        if name.is_empty() {
            return Err(BackendError::EmptyName);
        }
        self.create_session(&name, Some(path))?;
        Ok(name)
    }

    fn create_named(&self, name: &str) -> Result<()> {
        let name = sanitize_session_name(name);
        if name.is_empty() {
            return Err(BackendError::EmptyName);
        }
        self.create_session(&name, None)
    }

    fn kill_session(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }
        run_captured(TMUX, &["kill-session", "-t", &exact(name)]).map(|_| ())
    }

    fn rename_session(&self, old: &str, new: &str) -> Result<()> {
        let new = sanitize_session_name(new);
        if old.is_empty() || new.is_empty() {
            return Err(BackendError::EmptyName);
        }
        run_captured(TMUX, &["rename-session", "-t", &exact(old), &new]).map(|_| ())
    }
}

/// Exact-match target so `web` never resolves to `webapp`
fn exact(name: &str) -> String {
    format!("={name}")
}

/// Make a name acceptable to tmux
///
/// tmux rejects `.` and `:` in session names; whitespace is replaced too so
/// names stay easy to type.
#[must_use]
pub fn sanitize_session_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == '.' || c == ':' || c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Parse `list-sessions` output in `name:attached:windows` form
#[must_use]
pub fn parse_sessions(output: &str) -> Vec<SessionInfo> {
    output.lines().filter_map(parse_session_line).collect()
}

fn parse_session_line(line: &str) -> Option<SessionInfo> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let mut parts = line.rsplitn(3, ':');
    let windows = parts.next()?.parse().ok()?;
    let attached = parts.next()?.parse::<u32>().ok()? > 0;
    let name = parts.next()?;
    if name.is_empty() {
        return None;
    }
    Some(SessionInfo {
        name: name.to_string(),
        attached,
        windows,
    })
}

/// Parse tab-separated `list-windows` output
#[must_use]
pub fn parse_windows(output: &str) -> Vec<WindowInfo> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.splitn(4, '\t');
            let index = parts.next()?.trim().parse().ok()?;
            Some(WindowInfo {
                index,
                name: parts.next()?.to_string(),
                command: parts.next().unwrap_or_default().to_string(),
                path: parts.next().unwrap_or_default().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sessions() {
        let output = "api:1:3\nweb:0:1\n\nbroken\n";
        let sessions = parse_sessions(output);

        assert_eq!(sessions.len(), 2);
        assert_eq!(
            sessions[0],
            SessionInfo {
                name: "api".to_string(),
                attached: true,
                windows: 3,
            }
        );
        assert!(!sessions[1].attached);
    }

    #[test]
    fn test_parse_sessions_multiple_clients_counts_as_attached() {
        let sessions = parse_sessions("pair:2:5");
        assert!(sessions[0].attached);
        assert_eq!(sessions[0].windows, 5);
    }

    #[test]
    fn test_parse_windows() {
        let output = "0\teditor\tnvim\t/home/me/dev/api\n1\tshell\tzsh\t/tmp\n";
        let windows = parse_windows(output);

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].name, "editor");
        assert_eq!(windows[0].command, "nvim");
        assert_eq!(windows[1].index, 1);
        assert_eq!(windows[1].path, "/tmp");
    }

    #[test]
    fn test_sanitize_session_name() {
        assert_eq!(sanitize_session_name("my.project"), "my_project");
        assert_eq!(sanitize_session_name(" new session "), "new_session");
        assert_eq!(sanitize_session_name("a:b"), "a_b");
        assert_eq!(sanitize_session_name("   "), "");
    }

    #[test]
    fn test_exact_target() {
        assert_eq!(exact("web"), "=web");
    }
}
