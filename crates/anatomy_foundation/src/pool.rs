//! Reusable object cache.
//!
//! A [`Pool`] hands out previously returned values instead of allocating new
//! ones. Values come back as they were given back: callers must overwrite
//! every field they rely on before use.

/// Stack-backed pool of reusable values.
///
/// Not synchronized. A pool belongs to a single owner.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    stack: Vec<T>,
}

impl<T: Default> Pool<T> {
    /// Creates a pool pre-filled with `initial_count` default values.
    #[must_use]
    pub fn new(initial_count: usize) -> Self {
        let mut stack = Vec::with_capacity(initial_count);
        stack.resize_with(initial_count, T::default);
        Self { stack }
    }

    /// Takes a value from the pool, constructing a default one if the pool is empty.
    ///
    /// The returned value holds whatever content it had when it was given back.
    pub fn take(&mut self) -> T {
        self.stack.pop().unwrap_or_default()
    }
}

impl<T> Pool<T> {
    /// Puts a value back for reuse. Its fields are not reset.
    pub fn give_back(&mut self, value: T) {
        self.stack.push(value);
    }

    /// Returns the number of values currently available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if the next `take` will construct a new value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl<T: Default> Default for Pool<T> {
    fn default() -> Self {
        Self::new(0)
    }
}
