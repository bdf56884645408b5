//! Anatomy - Persistent creature anatomy trees
//!
//! This crate re-exports all layers of the anatomy system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: anatomy_runtime    - Editing session, menu, undo, REPL
//! Layer 1: anatomy_tree       - Arena tree, parts, archetypes, traversal
//! Layer 0: anatomy_foundation - Maybe, Pool, persistent collections, Error
//! ```

pub use anatomy_foundation as foundation;
pub use anatomy_runtime as runtime;
pub use anatomy_tree as tree;
