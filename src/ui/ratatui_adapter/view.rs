//! Frame layout for the picker
//!
//! Pure rendering: everything drawn here is read from the `Picker`, apart
//! from the viewport height which is written back before the list is sliced.

use super::theme::Theme;
use super::widgets::{DetailsPane, HelpBar, ItemList, SearchBar, StatusBar, hints_for};
use crate::backend::SessionDetails;
use crate::backend::git::{is_remote_reference, repo_name};
use crate::catalog::Source;
use crate::picker::{Action, Mode, Picker};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Whether the details panel is shown for the current state
#[must_use]
pub fn shows_details(picker: &Picker<'_>) -> bool {
    matches!(picker.mode(), Mode::Browse) && picker.source() == Source::Sessions
}

/// Lines shown in place of an empty list
#[must_use]
pub fn empty_state(picker: &Picker<'_>) -> Vec<String> {
    match picker.mode() {
        Mode::Browse | Mode::Rename { .. } => match picker.source() {
            Source::Sessions => vec![
                "No tmux sessions found".to_string(),
                "Press 'n' to create a new session".to_string(),
            ],
            Source::Projects => vec!["No projects found".to_string()],
        },
        Mode::Filter { query } => {
            if query.is_empty() {
                vec!["Start typing to search...".to_string()]
            } else {
                vec!["No matches found".to_string()]
            }
        }
        Mode::Create { query } => {
            let typed = query.text().trim();
            if is_remote_reference(typed) {
                let name = repo_name(typed).unwrap_or_else(|| typed.to_string());
                vec![format!("▶ Clone & create session: {name}")]
            } else if typed.is_empty() {
                vec!["No projects found".to_string()]
            } else {
                vec![format!("▶ Create session: {typed}")]
            }
        }
    }
}

/// What Enter would do in create mode, when it is not simply a listed project
#[must_use]
pub fn pending_hint(picker: &Picker<'_>) -> Option<String> {
    if !matches!(picker.mode(), Mode::Create { .. }) {
        return None;
    }
    match picker.commit()? {
        Action::CloneAndCreate(url) => {
            let name = repo_name(&url).unwrap_or(url);
            Some(format!("▶ clone {name}"))
        }
        Action::CreateNamed(name) => Some(format!("▶ new {name}")),
        Action::Switch(_) | Action::CreateFromPath(_) => None,
    }
}

fn title_line<'a>(picker: &Picker<'_>, theme: &Theme) -> Line<'a> {
    let detail = match picker.mode() {
        Mode::Browse => picker.source().to_string(),
        Mode::Rename { target, .. } => format!("'{target}'"),
        Mode::Filter { .. } | Mode::Create { .. } => String::new(),
    };
    let mut spans = vec![
        Span::styled(" mux-sesh ", theme.title_style()),
        Span::styled("· ", theme.dimmed_style()),
        Span::styled(picker.mode().label(), theme.cursor_style()),
    ];
    if !detail.is_empty() {
        spans.push(Span::styled(format!(" · {detail}"), theme.dimmed_style()));
    }
    Line::from(spans)
}

fn render_input(frame: &mut Frame, picker: &Picker<'_>, theme: &Theme, area: Rect) {
    let Some(input) = picker.mode().input() else {
        return;
    };
    let bar = match picker.mode() {
        Mode::Create { .. } => SearchBar::new(input.text(), input.caret(), ">", theme)
            .title(" New session ")
            .placeholder("project, name, or GitHub URL"),
        Mode::Rename { .. } => SearchBar::new(input.text(), input.caret(), "→", theme)
            .title(" New name "),
        Mode::Browse | Mode::Filter { .. } => {
            SearchBar::new(input.text(), input.caret(), "/", theme)
        }
    };
    frame.render_widget(bar, area);
}

/// Draw the whole picker into `frame`
pub fn render(
    frame: &mut Frame,
    picker: &mut Picker<'_>,
    theme: &Theme,
    details: Option<&SessionDetails>,
) {
    let has_input = picker.mode().input().is_some();
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                             // Title
            Constraint::Length(if has_input { 3 } else { 0 }), // Input
            Constraint::Min(3),                                // List (+ details)
            Constraint::Length(3),                             // Status bar
            Constraint::Length(1),                             // Help bar
        ])
        .split(frame.area());

    let with_details = shows_details(picker);
    let (list_area, details_area) = if with_details {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_layout[2]);
        (chunks[0], Some(chunks[1]))
    } else {
        (main_layout[2], None)
    };

    picker.set_viewport_height(usize::from(list_area.height.saturating_sub(2)));
    let picker: &Picker<'_> = picker;

    frame.render_widget(Paragraph::new(title_line(picker, theme)), main_layout[0]);
    render_input(frame, picker, theme, main_layout[1]);

    let (visible, offset) = picker.visible();
    let empty: Vec<Line> = empty_state(picker).into_iter().map(Line::from).collect();
    let mut list = ItemList::new(visible, offset, picker.cursor(), theme)
        .title(format!(" {} ", picker.source()))
        .empty_message(empty);
    if matches!(picker.mode(), Mode::Create { .. }) {
        list = list.title(" projects ").highlight(picker.mode().query());
    }
    frame.render_widget(list, list_area);

    if let Some(area) = details_area {
        frame.render_widget(DetailsPane::new(details, theme), area);
    }

    let status = StatusBar::new(picker.ranked().len(), picker.catalog().len(), theme)
        .message(picker.status())
        .hint(pending_hint(picker));
    frame.render_widget(status, main_layout[3]);

    let hints = hints_for(picker.mode());
    frame.render_widget(HelpBar::new(&hints, theme), main_layout[4]);
}
