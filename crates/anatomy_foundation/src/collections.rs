//! Persistent collections with structural sharing.
//!
//! These are thin wrappers around the `im` crate's persistent data structures.
//! Every modifying method leaves `self` untouched and returns a new collection
//! that shares unmodified structure with the original.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// Persistent vector with structural sharing.
///
/// Cloning is O(1). Modifications return a new vector sharing structure
/// with the original.
#[derive(Clone, Default)]
pub struct LtVec<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> LtVec<T> {
    /// Creates an empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Creates a vector holding a single element.
    #[must_use]
    pub fn unit(value: T) -> Self {
        Self(im::Vector::unit(value))
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a new vector with the element appended.
    #[must_use]
    pub fn push_back(&self, value: T) -> Self {
        let mut new = self.0.clone();
        new.push_back(value);
        Self(new)
    }

    /// Returns a new vector with the element at `index` replaced.
    ///
    /// Returns `None` if `index` is out of bounds.
    #[must_use]
    pub fn update(&self, index: usize, value: T) -> Option<Self> {
        if index >= self.len() {
            return None;
        }
        let mut new = self.0.clone();
        new.set(index, value);
        Some(Self(new))
    }

    /// Returns a new vector with `value` inserted before position `index`.
    ///
    /// `index == len()` appends. Returns `None` if `index > len()`.
    #[must_use]
    pub fn insert(&self, index: usize, value: T) -> Option<Self> {
        if index > self.len() {
            return None;
        }
        let mut new = self.0.clone();
        new.insert(index, value);
        Some(Self(new))
    }

    /// Returns a new vector with the element at `index` removed, plus that element.
    ///
    /// Returns `None` if `index` is out of bounds.
    #[must_use]
    pub fn remove(&self, index: usize) -> Option<(Self, T)> {
        if index >= self.len() {
            return None;
        }
        let mut new = self.0.clone();
        let value = new.remove(index);
        Some((Self(new), value))
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Clone + PartialEq> LtVec<T> {
    /// Returns the index of the first element equal to `value`.
    #[must_use]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.0.index_of(value)
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for LtVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for LtVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for LtVec<T> {}

impl<T: Clone + Hash> Hash for LtVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone> FromIterator<T> for LtVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<T: Clone> IntoIterator for LtVec<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a LtVec<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Persistent ordered set with structural sharing.
///
/// Iteration and [`LtOrdSet::first`] follow the element ordering.
#[derive(Clone, Default)]
pub struct LtOrdSet<T>(im::OrdSet<T>)
where
    T: Clone + Ord;

impl<T: Clone + Ord> LtOrdSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdSet::new())
    }

    /// Returns true if the set contains the value.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    /// Returns the smallest element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.get_min()
    }

    /// Returns a new set with the value inserted.
    #[must_use]
    pub fn insert(&self, value: T) -> Self {
        let mut new = self.0.clone();
        new.insert(value);
        Self(new)
    }

    /// Returns a new set with the value removed.
    #[must_use]
    pub fn remove(&self, value: &T) -> Self {
        let mut new = self.0.clone();
        new.remove(value);
        Self(new)
    }

    /// Returns a new set holding every element of `self` and `values`.
    #[must_use]
    pub fn extend<I: IntoIterator<Item = T>>(&self, values: I) -> Self {
        let mut new = self.0.clone();
        new.extend(values);
        Self(new)
    }
}

impl<T: Clone + Ord + fmt::Debug> fmt::Debug for LtOrdSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl<T: Clone + Ord> PartialEq for LtOrdSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Ord> Eq for LtOrdSet<T> {}

impl<T: Clone + Ord> FromIterator<T> for LtOrdSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::OrdSet::from_iter(iter))
    }
}
