//! User interface layer
//!
//! The interactive picker frontend plus the plain output used before and
//! after it runs.
//!
//! # Output Messages
//!
//! ```
//! use mux_sesh::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Switched to 'api'");
//! output.error("Something went wrong");
//! output.info("Additional info");
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::{SessionFinder, Theme};
