//! Item list widget for the visible window of ranked entries

use crate::catalog::{Entry, EntryKind};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Rows that get a quick-select number
const NUMBERED_ROWS: usize = 9;

/// Split `text` into runs, marking case-insensitive occurrences of `query`
///
/// Occurrences do not overlap. An empty query marks nothing.
#[must_use]
pub fn highlight_segments<'t>(text: &'t str, query: &str) -> Vec<(&'t str, bool)> {
    if query.is_empty() {
        return vec![(text, false)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(end) = match_at(text, pos, query) {
            if plain_start < pos {
                segments.push((&text[plain_start..pos], false));
            }
            segments.push((&text[pos..end], true));
            pos = end;
            plain_start = end;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() || segments.is_empty() {
        segments.push((&text[plain_start..], false));
    }
    segments
}

/// End offset of a case-insensitive match of `query` starting at `start`
fn match_at(text: &str, start: usize, query: &str) -> Option<usize> {
    let mut chars = text[start..].char_indices();
    let mut end = start;
    for qc in query.chars() {
        let (offset, tc) = chars.next()?;
        if !tc.to_lowercase().eq(qc.to_lowercase()) {
            return None;
        }
        end = start + offset + tc.len_utf8();
    }
    Some(end)
}

/// List widget showing the visible window, numbered for quick select
pub struct ItemList<'a> {
    /// Entries in the visible window
    entries: &'a [Entry],
    /// Index of the first visible entry in the ranked list
    offset: usize,
    /// Cursor index into the ranked list
    cursor: usize,
    /// Query highlighted inside project paths
    highlight: Option<&'a str>,
    /// Lines shown when there is nothing to list
    empty_message: Vec<Line<'a>>,
    /// Block title
    title: String,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub fn new(entries: &'a [Entry], offset: usize, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            entries,
            offset,
            cursor,
            highlight: None,
            empty_message: Vec::new(),
            title: String::new(),
            theme,
        }
    }

    /// Highlight occurrences of `query` in paths
    #[must_use]
    pub fn highlight(mut self, query: &'a str) -> Self {
        self.highlight = (!query.is_empty()).then_some(query);
        self
    }

    /// Lines to show when the list is empty
    #[must_use]
    pub fn empty_message(mut self, lines: Vec<Line<'a>>) -> Self {
        self.empty_message = lines;
        self
    }

    /// Set the block title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn path_spans(&self, path: &'a str, base: Style) -> Vec<Span<'a>> {
        let Some(query) = self.highlight else {
            return vec![Span::styled(path, base)];
        };
        highlight_segments(path, query)
            .into_iter()
            .map(|(text, matched)| {
                if matched {
                    Span::styled(text, base.patch(self.theme.match_style()))
                } else {
                    Span::styled(text, base)
                }
            })
            .collect()
    }

    fn render_item(&self, entry: &'a Entry, row: usize) -> ListItem<'a> {
        let is_cursor = self.offset + row == self.cursor;

        let number = if row < NUMBERED_ROWS {
            format!("{} ", row + 1)
        } else {
            "  ".to_string()
        };
        let cursor_char = if is_cursor { "> " } else { "  " };
        let text_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let mut spans = vec![
            Span::styled(number, self.theme.dimmed_style()),
            Span::styled(cursor_char, self.theme.cursor_style()),
        ];

        match entry.kind {
            EntryKind::Session => {
                let (indicator, style) = if entry.attached {
                    ("● ", self.theme.attached_style())
                } else {
                    ("○ ", self.theme.dimmed_style())
                };
                spans.push(Span::styled(indicator, style));
                spans.push(Span::styled(entry.title.as_str(), text_style));
                let plural = if entry.window_count == 1 { "" } else { "s" };
                spans.push(Span::styled(
                    format!("  {} window{plural}", entry.window_count),
                    self.theme.dimmed_style(),
                ));
            }
            EntryKind::Project => {
                spans.push(Span::styled(entry.title.as_str(), text_style));
                spans.push(Span::raw("  "));
                spans.extend(self.path_spans(&entry.description, self.theme.path_style()));
            }
        }

        ListItem::new(Line::from(spans))
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.clone());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            Paragraph::new(self.empty_message.clone()).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(row, entry)| self.render_item(entry, row))
            .collect();

        List::new(items).render(inner, buf);
    }
}
