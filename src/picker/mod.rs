//! Interactive selection engine
//!
//! The part of mux-sesh with real behavior: turning a query into a ranked
//! list, keeping a cursor and a visible window over it, and moving between
//! modes in response to keys.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──► rank(query, direction) ──► ranked list ──► visible_window
//!                                              │
//!                         commit ──► resolve(mode, ranked, cursor) ──► Action
//! ```
//!
//! # Modes
//!
//! - **Browse** - the full catalog; single-key commands
//! - **Filter** - incremental search, best match first
//! - **Create** - project search, best match last next to the input
//! - **Rename** - edit a session name

pub mod action;
pub mod events;
pub mod mode;
pub mod query;
pub mod rank;
pub mod score;
pub mod state;
pub mod viewport;

pub use action::{Action, resolve};
pub use events::poll_and_handle;
pub use mode::Mode;
pub use query::{EditResult, QueryInput};
pub use rank::{RankedEntry, SortDirection, rank, rank_scored};
pub use score::{Score, normalize_query, score};
pub use state::{DEFAULT_MAX_RESULTS, Outcome, Picker, PickerOptions, StatusMessage};
pub use viewport::{Cursor, visible_window, window_range};
