//! Body parts: the immutable node values stored in a [`Tree`](crate::Tree).

use std::fmt;

use anatomy_foundation::{LtVec, Maybe};

use crate::archetype::LimbArchetype;

/// Position of a part in a tree's slot arena.
///
/// Only meaningful against the tree value the part was read from.
pub type SlotIndex = usize;

/// Identity of a part within one tree lineage.
///
/// Ids are allocated from a counter carried from tree value to tree value and
/// are never handed out twice in a lineage, while slots are recycled. A handle
/// resolves only when both its slot and its id match.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PartId(u32);

impl PartId {
    /// Id of the root part of every tree.
    pub const ROOT: Self = Self(0);

    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartId({})", self.0)
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One part of an anatomy, e.g. "Tentacle" or "Right Hand".
///
/// A `BodyPart` returned by a tree is a handle: it records the slot it was
/// read from and can be passed back to the same tree value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyPart {
    name: String,
    archetype: LimbArchetype,
    id: PartId,
    slot: SlotIndex,
    /// Absent only for the root.
    parent: Maybe<SlotIndex>,
    /// Display and traversal order.
    children: LtVec<SlotIndex>,
}

impl BodyPart {
    pub(crate) fn root(name: String, archetype: LimbArchetype) -> Self {
        Self {
            name,
            archetype,
            id: PartId::ROOT,
            slot: 0,
            parent: Maybe::none(),
            children: LtVec::new(),
        }
    }

    pub(crate) fn leaf(
        name: String,
        archetype: LimbArchetype,
        id: PartId,
        slot: SlotIndex,
        parent: SlotIndex,
    ) -> Self {
        Self {
            name,
            archetype,
            id,
            slot,
            parent: Maybe::of(parent),
            children: LtVec::new(),
        }
    }

    /// Returns a copy of this part with its child list replaced.
    pub(crate) fn with_children(&self, children: LtVec<SlotIndex>) -> Self {
        Self {
            children,
            ..self.clone()
        }
    }

    /// Returns the part name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the archetype tag.
    #[must_use]
    pub fn archetype(&self) -> &LimbArchetype {
        &self.archetype
    }

    /// Returns the part identity.
    #[must_use]
    pub const fn id(&self) -> PartId {
        self.id
    }

    /// Returns the slot this part was read from.
    #[must_use]
    pub const fn slot(&self) -> SlotIndex {
        self.slot
    }

    /// Returns the parent slot, absent for the root.
    #[must_use]
    pub const fn parent(&self) -> Maybe<SlotIndex> {
        self.parent
    }

    /// Returns the ordered child slots.
    #[must_use]
    pub fn children(&self) -> &LtVec<SlotIndex> {
        &self.children
    }

    /// Returns the number of children.
    #[must_use]
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns true if this part has no parent.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        !self.parent.is_present()
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.archetype, self.name)
    }
}
