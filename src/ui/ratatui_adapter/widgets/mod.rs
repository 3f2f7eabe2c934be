//! Ratatui widgets for the picker TUI

mod details_pane;
mod help_bar;
mod item_list;
mod search_bar;
mod status_bar;

pub use details_pane::DetailsPane;
pub use help_bar::{HelpBar, KeyHint, hints_for};
pub use item_list::{ItemList, highlight_segments};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
