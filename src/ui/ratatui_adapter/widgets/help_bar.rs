//! Help bar widget for displaying keybind hints

use crate::picker::Mode;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "enter", "ctrl+j")
    pub key: String,
    /// Action description (e.g., "switch", "kill")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints for the keys that work in `mode`
#[must_use]
pub fn hints_for(mode: &Mode) -> Vec<KeyHint> {
    match mode {
        Mode::Browse => vec![
            KeyHint::new("↑/↓", "move"),
            KeyHint::new("enter", "open"),
            KeyHint::new("1-9", "quick"),
            KeyHint::new("i", "search"),
            KeyHint::new("n", "new"),
            KeyHint::new("r", "rename"),
            KeyHint::new("d", "kill"),
            KeyHint::new("s/p", "sessions/projects"),
            KeyHint::new("R", "refresh"),
            KeyHint::new("q", "quit"),
        ],
        Mode::Filter { .. } => vec![
            KeyHint::new("↑/↓", "move"),
            KeyHint::new("enter", "open"),
            KeyHint::new("esc", "back"),
        ],
        Mode::Create { .. } => vec![
            KeyHint::new("↑/↓", "move"),
            KeyHint::new("enter", "create"),
            KeyHint::new("esc", "back"),
        ],
        Mode::Rename { .. } => vec![
            KeyHint::new("enter", "rename"),
            KeyHint::new("esc", "cancel"),
        ],
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(" ", self.theme.dimmed_style()));
            spans.push(Span::styled(hint.action.as_str(), self.theme.dimmed_style()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
