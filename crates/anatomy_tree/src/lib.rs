//! Persistent arena-backed anatomy tree with copy-on-write edits.
//!
//! This crate provides:
//! - [`LimbArchetype`] - Opaque kind tag carried by every part
//! - [`BodyPart`] - Immutable part value and handle
//! - [`Tree`] - Slot arena with insert, remove, and traversal operations
//! - [`NestedPart`] - Owned nested export of a tree
//!
//! Edits never modify a tree in place:
//!
//! ```
//! use anatomy_foundation::Maybe;
//! use anatomy_tree::{LimbArchetype, Tree};
//!
//! let body = Tree::new("Body", LimbArchetype::body());
//! let armed = body
//!     .insert_child(body.root(), Maybe::none(), "Left Arm", LimbArchetype::new("Arm", true))
//!     .unwrap();
//!
//! assert_eq!(body.live_count(), 1);
//! assert_eq!(armed.live_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod archetype;
pub mod nested;
pub mod part;
pub mod traversal;
pub mod tree;

pub use archetype::LimbArchetype;
pub use nested::NestedPart;
pub use part::{BodyPart, PartId, SlotIndex};
pub use traversal::{Children, Preorder};
pub use tree::Tree;
