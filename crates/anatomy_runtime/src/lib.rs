//! Editing session, menu rendering, and REPL for anatomy trees.
//!
//! This crate provides:
//! - [`EditSession`] - Tree, selection, and undo state for an editor
//! - [`Menu`] - Preorder rows rebuilt from pooled options
//! - [`Repl`] - Interactive command loop over a session

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod history;
pub mod menu;
pub mod repl;
pub mod session;

pub use config::SessionConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use history::TreeHistory;
pub use menu::{Menu, MenuOption};
pub use repl::{Command, Repl, Reply};
pub use session::EditSession;
