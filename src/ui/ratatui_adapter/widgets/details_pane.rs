//! Side panel listing the windows of the highlighted session

use crate::backend::SessionDetails;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Session details widget
pub struct DetailsPane<'a> {
    details: Option<&'a SessionDetails>,
    theme: &'a Theme,
}

impl<'a> DetailsPane<'a> {
    /// Create a details pane; `None` renders a placeholder
    #[must_use]
    pub const fn new(details: Option<&'a SessionDetails>, theme: &'a Theme) -> Self {
        Self { details, theme }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let Some(details) = self.details else {
            return vec![Line::styled("No session selected", self.theme.dimmed_style())];
        };

        let mut lines = vec![
            Line::styled(details.name.as_str(), self.theme.title_style()),
            Line::raw(""),
        ];
        if details.windows.is_empty() {
            lines.push(Line::styled("No windows", self.theme.dimmed_style()));
        }
        for window in &details.windows {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", window.index), self.theme.cursor_style()),
                Span::raw(window.name.as_str()),
                Span::styled(format!(" ({})", window.command), self.theme.dimmed_style()),
            ]));
            lines.push(Line::styled(
                format!("   {}", window.path),
                self.theme.path_style(),
            ));
        }
        lines
    }
}

impl Widget for DetailsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Details ");

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
