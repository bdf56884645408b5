//! Undo history of tree snapshots.
//!
//! Trees are persistent, so keeping a prior version costs only the slots it
//! does not share with its successor.

use std::collections::VecDeque;

use anatomy_tree::Tree;

/// Ring buffer of prior trees, newest last.
#[derive(Clone, Debug)]
pub struct TreeHistory {
    /// Snapshots in chronological order.
    snapshots: VecDeque<Tree>,
    /// Maximum number of snapshots to retain.
    capacity: usize,
}

impl TreeHistory {
    /// Creates an empty history with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Returns the number of retained snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Records a snapshot, evicting the oldest if at capacity.
    pub fn push(&mut self, tree: Tree) {
        if self.capacity == 0 {
            return;
        }
        if self.snapshots.len() >= self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(tree);
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<Tree> {
        self.snapshots.pop_back()
    }
}
