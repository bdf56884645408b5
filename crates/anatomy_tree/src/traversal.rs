//! Iterators over a tree's structure.
//!
//! Both iterators borrow a single immutable [`Tree`] value, so later edits
//! (which produce new trees) never affect a walk in progress.

use std::iter::FusedIterator;

use anatomy_foundation::{Error, Result};
use tracing::trace;

use crate::part::{BodyPart, SlotIndex};
use crate::tree::Tree;

/// The children of one part, in stored order.
///
/// Cheap to clone: a clone taken before iterating walks the same children again.
#[derive(Clone, Debug)]
pub struct Children<'a> {
    tree: &'a Tree,
    part: &'a BodyPart,
    front: usize,
    back: usize,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a Tree, part: &'a BodyPart) -> Self {
        Self {
            tree,
            part,
            front: 0,
            back: part.num_children(),
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = Result<&'a BodyPart>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let child = self.tree.child_at(self.part, self.front);
        self.front += 1;
        Some(child)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.tree.child_at(self.part, self.back))
    }
}

impl ExactSizeIterator for Children<'_> {}

impl FusedIterator for Children<'_> {}

/// Depth-first, parent-first walk of a whole tree.
///
/// Uses an explicit stack, so deep narrow trees cannot overflow the call
/// stack. Stops after reporting the first empty slot it meets.
#[derive(Debug)]
pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<(SlotIndex, usize)>,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            stack: vec![(0, 0)],
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = Result<(&'a BodyPart, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, depth) = self.stack.pop()?;
        let Some(part) = self.tree.part_at(slot) else {
            self.stack.clear();
            return Some(Err(Error::corrupt_state(format!(
                "preorder walk reached empty slot {slot}"
            ))));
        };

        trace!(slot, depth, "visiting part");

        // Reverse push so the first child pops first
        self.stack
            .extend(part.children().iter().rev().map(|&child| (child, depth + 1)));
        Some(Ok((part, depth)))
    }
}

impl FusedIterator for Preorder<'_> {}
