//! Search bar widget for query and rename input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the input with a caret
pub struct SearchBar<'a> {
    /// Current input text
    text: &'a str,
    /// Caret byte offset in the text
    caret: usize,
    /// Prompt text
    prompt: &'a str,
    /// Block title
    title: &'a str,
    /// Shown dimmed while the input is empty
    placeholder: Option<&'a str>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(text: &'a str, caret: usize, prompt: &'a str, theme: &'a Theme) -> Self {
        Self {
            text,
            caret,
            prompt,
            title: " Search ",
            placeholder: None,
            theme,
        }
    }

    /// Set the block title
    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Set the placeholder shown for empty input
    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(self.title);

        let inner = block.inner(area);
        block.render(area, buf);

        let caret_span = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![
            Span::styled(self.prompt, self.theme.cursor_style()),
            Span::raw(" "),
        ];

        if self.text.is_empty() {
            spans.push(caret_span);
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(placeholder, self.theme.dimmed_style()));
            }
        } else {
            let caret = self.caret.min(self.text.len());
            let (before, after) = self.text.split_at(caret);
            spans.push(Span::raw(before));
            spans.push(caret_span);
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
