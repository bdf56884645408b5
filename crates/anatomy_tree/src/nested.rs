//! Conversion of a tree into an owned nested structure.
//!
//! Host anatomies want each part to own its subparts directly. [`NestedPart`]
//! is that shape, built without recursion.

use anatomy_foundation::{Error, Result};

use crate::archetype::LimbArchetype;
use crate::tree::Tree;

/// An owned part with its subparts in stored order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NestedPart {
    /// Part name.
    pub name: String,
    /// Archetype tag.
    pub archetype: LimbArchetype,
    /// Subparts in stored order.
    pub subparts: Vec<NestedPart>,
}

impl NestedPart {
    /// Counts this part and every part below it.
    #[must_use]
    pub fn count(&self) -> usize {
        let mut total = 0;
        let mut stack = vec![self];
        while let Some(part) = stack.pop() {
            total += 1;
            stack.extend(&part.subparts);
        }
        total
    }
}

impl Tree {
    /// Builds an owned nested copy of this tree, rooted at the root part.
    ///
    /// # Errors
    ///
    /// Returns `CorruptState` if a child link points at an empty slot.
    pub fn to_nested(&self) -> Result<NestedPart> {
        // Each part is pushed twice: once to expand its children, once to
        // collect them. Children go on in reverse, so the first child is
        // finished first and `finished` stays in stored order.
        let mut stack = vec![(self.root(), false)];
        let mut finished: Vec<NestedPart> = Vec::with_capacity(self.live_count());

        while let Some((part, expanded)) = stack.pop() {
            if !expanded {
                stack.push((part, true));
                for child in self.reverse_children_of(part) {
                    stack.push((child?, false));
                }
                continue;
            }

            let split = finished
                .len()
                .checked_sub(part.num_children())
                .ok_or_else(|| {
                    Error::corrupt_state(format!("part {} has unvisited children", part.id()))
                })?;
            let subparts = finished.split_off(split);
            finished.push(NestedPart {
                name: part.name().to_string(),
                archetype: part.archetype().clone(),
                subparts,
            });
        }

        finished
            .pop()
            .ok_or_else(|| Error::corrupt_state("tree walk produced no parts"))
    }
}
