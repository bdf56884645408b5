//! Error types for the anatomy system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result type alias using the anatomy [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for anatomy operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an empty value error.
    #[must_use]
    pub fn empty_value() -> Self {
        Self::new(ErrorKind::EmptyValue)
    }

    /// Creates an index out of range error.
    #[must_use]
    pub fn index_out_of_range(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfRange { index, length })
    }

    /// Creates a detached node error for a handle that no longer resolves.
    #[must_use]
    pub fn detached_node(slot: usize, id: u32) -> Self {
        Self::new(ErrorKind::DetachedNode { slot, id })
    }

    /// Creates a root removal error.
    #[must_use]
    pub fn root_removal() -> Self {
        Self::new(ErrorKind::RootRemoval)
    }

    /// Creates a corrupt state error.
    #[must_use]
    pub fn corrupt_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CorruptState(message.into()))
    }

    /// Returns true if this error signals a broken tree invariant rather than caller misuse.
    #[must_use]
    pub fn is_corruption(&self) -> bool {
        matches!(self.kind, ErrorKind::CorruptState(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// An absent optional value was unwrapped.
    #[error("attempted to unwrap an empty value")]
    EmptyValue,

    /// Child index or insertion position out of bounds.
    #[error("index out of range: {index} (length {length})")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of elements actually present.
        length: usize,
    },

    /// A part handle does not resolve against the tree it was passed to.
    #[error("detached part handle: slot {slot}, id {id}")]
    DetachedNode {
        /// The slot the handle points at.
        slot: usize,
        /// The part id carried by the handle.
        id: u32,
    },

    /// The root of a tree cannot be removed.
    #[error("cannot remove the root of a tree")]
    RootRemoval,

    /// A tree invariant was violated (should not happen).
    #[error("corrupt tree state: {0}")]
    CorruptState(String),

    /// An editing command needs a selected part, but none is selected.
    #[error("no part is selected")]
    NoSelection,

    /// Archetype name is not in the catalog.
    #[error("unknown archetype: {0}")]
    UnknownArchetype(String),

    /// Editor command was not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Editor command was recognized but its arguments were not.
    #[error("usage: {0}")]
    Usage(String),

    /// Session configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Undo was requested with an empty history.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that failed, e.g. `insert_child`.
    pub operation: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operation {
            Some(operation) => write!(f, "in {operation}"),
            None => Ok(()),
        }
    }
}
