//! The persistent anatomy tree.
//!
//! A [`Tree`] owns an arena of slots, each either empty (a tombstone) or
//! holding one live [`BodyPart`]. Slot 0 always holds the root. Every edit
//! returns a new `Tree` and leaves the receiver untouched; unmodified slots
//! are shared between the two through the persistent arena.

use anatomy_foundation::{Error, ErrorContext, LtOrdSet, LtVec, Maybe, Result};
use tracing::{debug, warn};

use crate::archetype::LimbArchetype;
use crate::part::{BodyPart, PartId, SlotIndex};
use crate::traversal::{Children, Preorder};

/// Immutable snapshot of an anatomy.
///
/// Clone is O(1) due to structural sharing.
/// All edit methods return a new `Tree` instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    /// Slot arena. `slots[0]` is always the root.
    slots: LtVec<Maybe<BodyPart>>,
    /// Tombstoned slots available for reuse, lowest first.
    free: LtOrdSet<SlotIndex>,
    /// Number of live slots.
    live_count: usize,
    /// Id handed to the next inserted part.
    next_id: PartId,
}

impl Tree {
    /// Creates a tree holding only a root part.
    #[must_use]
    pub fn new(root_name: impl Into<String>, root_archetype: LimbArchetype) -> Self {
        let root = BodyPart::root(root_name.into(), root_archetype);
        Self {
            slots: LtVec::unit(Maybe::of(root)),
            free: LtOrdSet::new(),
            live_count: 1,
            next_id: PartId::ROOT.next(),
        }
    }

    /// Returns the root part.
    ///
    /// # Panics
    ///
    /// Panics if slot 0 is empty, which no sequence of tree operations can produce.
    #[must_use]
    pub fn root(&self) -> &BodyPart {
        self.part_at(0)
            .expect("slot 0 always holds the root of a tree")
    }

    /// Returns the number of live parts.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Returns the number of slots, live or tombstoned.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the id the next inserted part will receive.
    #[must_use]
    pub const fn next_id(&self) -> PartId {
        self.next_id
    }

    /// Returns this tree with its id counter raised to at least `floor`.
    ///
    /// Restoring an earlier tree must not hand out ids that later versions
    /// already used, or handles to discarded parts would resolve again.
    #[must_use]
    pub fn with_ids_from(&self, floor: PartId) -> Self {
        Self {
            next_id: self.next_id.max(floor),
            ..self.clone()
        }
    }

    /// Returns the live part stored at `slot`, if any.
    #[must_use]
    pub fn part_at(&self, slot: SlotIndex) -> Option<&BodyPart> {
        self.slots.get(slot).and_then(Maybe::get)
    }

    /// Finds a live part by identity.
    ///
    /// Use this to carry a selection across edits: slots are recycled, ids are not.
    #[must_use]
    pub fn find(&self, id: PartId) -> Option<&BodyPart> {
        self.slots
            .iter()
            .filter_map(Maybe::get)
            .find(|part| part.id() == id)
    }

    /// Resolves a handle to the part currently stored in its slot.
    ///
    /// # Errors
    ///
    /// Returns `DetachedNode` if the handle's slot is out of bounds, empty, or
    /// holds a different part.
    pub fn resolve(&self, handle: &BodyPart) -> Result<&BodyPart> {
        match self.part_at(handle.slot()) {
            Some(part) if part.id() == handle.id() => Ok(part),
            _ => {
                warn!(slot = handle.slot(), id = %handle.id(), "part handle does not resolve");
                Err(Error::detached_node(handle.slot(), handle.id().raw()))
            }
        }
    }

    /// Returns the `index`-th child of `part`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `part` has no child at `index`, and
    /// `CorruptState` if the child slot is empty.
    pub fn child_at(&self, part: &BodyPart, index: usize) -> Result<&BodyPart> {
        let slot = *part
            .children()
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, part.num_children()))?;
        self.part_at(slot).ok_or_else(|| {
            warn!(slot, parent = part.slot(), "child refers to an empty slot");
            Error::corrupt_state(format!(
                "child {index} of part {} refers to empty slot {slot}",
                part.id()
            ))
        })
    }

    /// Iterates the children of `part` in stored order.
    #[must_use]
    pub fn children_of<'a>(&'a self, part: &'a BodyPart) -> Children<'a> {
        Children::new(self, part)
    }

    /// Iterates the children of `part` in reverse stored order.
    #[must_use]
    pub fn reverse_children_of<'a>(&'a self, part: &'a BodyPart) -> std::iter::Rev<Children<'a>> {
        Children::new(self, part).rev()
    }

    /// Walks every part depth-first, parents before children, children in stored order.
    ///
    /// Yields each part with its depth; the root is at depth 0.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(self)
    }

    /// Calls `visit` on every part in preorder with its depth.
    ///
    /// # Errors
    ///
    /// Returns `CorruptState` if a child link points at an empty slot.
    pub fn map_preorder<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&BodyPart, usize),
    {
        for entry in self.preorder() {
            let (part, depth) = entry?;
            visit(part, depth);
        }
        Ok(())
    }

    /// Returns a new tree with a part added as a child of `parent`.
    ///
    /// `position` inserts before the existing child at that index; an absent
    /// position appends. The new part takes the lowest tombstoned slot, or a
    /// new slot at the end of the arena when there is none.
    ///
    /// # Errors
    ///
    /// Returns `DetachedNode` if `parent` does not resolve against this tree,
    /// and `IndexOutOfRange` if `position` exceeds the parent's child count.
    pub fn insert_child(
        &self,
        parent: &BodyPart,
        position: Maybe<usize>,
        name: impl Into<String>,
        archetype: LimbArchetype,
    ) -> Result<Self> {
        let context = || ErrorContext::new().with_operation("insert_child");
        let parent = self.resolve(parent).map_err(|e| e.with_context(context()))?;

        let reused = self.free.first().copied();
        let target = reused.unwrap_or(self.slots.len());

        let children = match position.into_option() {
            Some(at) => parent.children().insert(at, target).ok_or_else(|| {
                Error::index_out_of_range(at, parent.num_children()).with_context(context())
            })?,
            None => parent.children().push_back(target),
        };

        let child = BodyPart::leaf(name.into(), archetype, self.next_id, target, parent.slot());
        let slots = match reused {
            Some(slot) => self
                .slots
                .update(slot, Maybe::of(child))
                .ok_or_else(|| Error::corrupt_state(format!("free slot {slot} is out of bounds")))?,
            None => self.slots.push_back(Maybe::of(child)),
        };
        let slots = slots
            .update(parent.slot(), Maybe::of(parent.with_children(children)))
            .ok_or_else(|| {
                Error::corrupt_state(format!("parent slot {} is out of bounds", parent.slot()))
            })?;

        debug!(
            slot = target,
            reused = reused.is_some(),
            parent = parent.slot(),
            id = %self.next_id,
            "inserted part"
        );

        Ok(Self {
            slots,
            free: self.free.remove(&target),
            live_count: self.live_count + 1,
            next_id: self.next_id.next(),
        })
    }

    /// Returns a new tree without `part` and all of its descendants.
    ///
    /// # Errors
    ///
    /// Returns `RootRemoval` if `part` is the root, and `DetachedNode` if it does
    /// not resolve against this tree.
    pub fn remove_subtree(&self, part: &BodyPart) -> Result<Self> {
        let context = || ErrorContext::new().with_operation("remove_subtree");
        let Some(&parent_slot) = part.parent().get() else {
            return Err(Error::root_removal().with_context(context()));
        };
        let part = self.resolve(part).map_err(|e| e.with_context(context()))?;

        let parent = self.part_at(parent_slot).ok_or_else(|| {
            Error::corrupt_state(format!("parent slot {parent_slot} of part {} is empty", part.id()))
        })?;
        let (children, _) = parent
            .children()
            .position(&part.slot())
            .and_then(|at| parent.children().remove(at))
            .ok_or_else(|| {
                Error::corrupt_state(format!(
                    "part {} is missing from the children of its parent",
                    part.id()
                ))
            })?;
        let mut slots = self
            .slots
            .update(parent_slot, Maybe::of(parent.with_children(children)))
            .ok_or_else(|| {
                Error::corrupt_state(format!("parent slot {parent_slot} is out of bounds"))
            })?;

        let mut removed = Vec::new();
        let mut stack = vec![part.slot()];
        while let Some(slot) = stack.pop() {
            let current = self.part_at(slot).ok_or_else(|| {
                Error::corrupt_state(format!("descendant slot {slot} is empty"))
            })?;
            stack.extend(current.children().iter().copied());
            slots = slots
                .update(slot, Maybe::none())
                .ok_or_else(|| Error::corrupt_state(format!("slot {slot} is out of bounds")))?;
            removed.push(slot);
        }

        debug!(
            slot = part.slot(),
            id = %part.id(),
            removed = removed.len(),
            "removed subtree"
        );

        Ok(Self {
            slots,
            free: self.free.extend(removed.iter().copied()),
            live_count: self.live_count - removed.len(),
            next_id: self.next_id,
        })
    }
}
