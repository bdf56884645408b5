//! Errors, optional values, object pools, and persistent collections for anatomy trees.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Maybe`] - Explicit presence/absence container
//! - [`Pool`] - Reusable object cache
//! - Persistent collections ([`LtVec`], [`LtOrdSet`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod maybe;
pub mod pool;

pub use collections::{LtOrdSet, LtVec};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use maybe::Maybe;
pub use pool::Pool;
