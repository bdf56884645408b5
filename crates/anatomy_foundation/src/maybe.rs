//! Explicit presence/absence container.
//!
//! [`Maybe`] is a thin wrapper over [`Option`] whose `unwrap` reports an
//! [`ErrorKind::EmptyValue`](crate::ErrorKind::EmptyValue) instead of panicking.
//! It marks fields that may legitimately be unset: a root's parent link, an
//! unspecified insertion position, a tombstoned arena slot.

use std::fmt;

use crate::error::{Error, Result};

/// A value that is either present or absent.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    /// Creates a present value.
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// Creates an absent value.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Returns true if a value is held.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Takes the held value.
    ///
    /// # Errors
    ///
    /// Returns `EmptyValue` if nothing is held.
    pub fn unwrap(self) -> Result<T> {
        self.0.ok_or_else(Error::empty_value)
    }

    /// Borrows the held value, if any.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Converts into a standard [`Option`].
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => write!(f, "None"),
        }
    }
}
