//! Interaction modes
//!
//! Each variant carries only the state that mode needs, so a rename target
//! can only exist while renaming.

use super::query::QueryInput;
use super::rank::SortDirection;

/// Current interaction mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Plain list of the browse source; single-key commands
    #[default]
    Browse,
    /// Incremental search over existing targets
    Filter {
        /// Search query
        query: QueryInput,
    },
    /// Project search, free-text session name, or remote URL
    Create {
        /// Search query / new session name / remote reference
        query: QueryInput,
    },
    /// Editing a session's name
    Rename {
        /// New name being edited
        input: QueryInput,
        /// Session being renamed
        target: String,
    },
}

impl Mode {
    /// Enter filter mode with an empty query
    #[must_use]
    pub fn filter() -> Self {
        Self::Filter {
            query: QueryInput::new(),
        }
    }

    /// Enter create mode with an empty query
    #[must_use]
    pub fn create() -> Self {
        Self::Create {
            query: QueryInput::new(),
        }
    }

    /// Enter rename mode for `target`, seeded with its current name
    #[must_use]
    pub fn rename(target: impl Into<String>) -> Self {
        let target = target.into();
        Self::Rename {
            input: QueryInput::with_text(target.clone()),
            target,
        }
    }

    /// Short label for titles
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Browse => "Browse",
            Self::Filter { .. } => "Search",
            Self::Create { .. } => "New Session",
            Self::Rename { .. } => "Rename Session",
        }
    }

    /// Order of the ranked list in this mode
    #[must_use]
    pub const fn sort_direction(&self) -> SortDirection {
        match self {
            Self::Create { .. } => SortDirection::Ascending,
            Self::Browse | Self::Filter { .. } | Self::Rename { .. } => SortDirection::Descending,
        }
    }

    /// Whether the list is capped at the result limit
    #[must_use]
    pub const fn is_filtering(&self) -> bool {
        matches!(self, Self::Filter { .. } | Self::Create { .. })
    }

    /// The text input of this mode, if it has one
    #[must_use]
    pub const fn input(&self) -> Option<&QueryInput> {
        match self {
            Self::Browse => None,
            Self::Filter { query } | Self::Create { query } => Some(query),
            Self::Rename { input, .. } => Some(input),
        }
    }

    /// Mutable text input of this mode
    pub const fn input_mut(&mut self) -> Option<&mut QueryInput> {
        match self {
            Self::Browse => None,
            Self::Filter { query } | Self::Create { query } => Some(query),
            Self::Rename { input, .. } => Some(input),
        }
    }

    /// The query used for ranking (empty outside filtering modes)
    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::Filter { query } | Self::Create { query } => query.text(),
            Self::Browse | Self::Rename { .. } => "",
        }
    }
}
