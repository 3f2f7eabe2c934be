//! Ratatui-based picker frontend
//!
//! Draws the `Picker` state and feeds it crossterm key events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           SessionFinder                     │
//! │  (terminal setup, event loop)               │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │   Picker   │ │   view    │ │ Crossterm │
//! │  (state)   │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod finder;
mod theme;
pub mod view;
pub mod widgets;

pub use finder::SessionFinder;
pub use theme::Theme;
