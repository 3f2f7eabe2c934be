//! Status bar widget for the count line and transient messages

use crate::picker::StatusMessage;
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget showing `shown/total` and the latest message
pub struct StatusBar<'a> {
    /// Entries in the ranked list
    shown: usize,
    /// Entries in the catalog
    total: usize,
    /// Active message, if any
    message: Option<&'a StatusMessage>,
    /// Extra hint on the right (pending create/clone target)
    hint: Option<String>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(shown: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            shown,
            total,
            message: None,
            hint: None,
            theme,
        }
    }

    /// Show a status message
    #[must_use]
    pub const fn message(mut self, message: Option<&'a StatusMessage>) -> Self {
        self.message = message;
        self
    }

    /// Show a hint next to the count
    #[must_use]
    pub fn hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        if let Some(msg) = self.message {
            let style = self.theme.level_style(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        let mut right = Vec::new();
        if let Some(hint) = self.hint {
            right.push(Span::styled(hint, self.theme.cursor_style()));
            right.push(Span::raw("  "));
        }
        right.push(Span::styled(
            format!("{}/{}", self.shown, self.total),
            self.theme.dimmed_style(),
        ));
        Paragraph::new(Line::from(right))
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}
