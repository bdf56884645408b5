//! Limb archetypes: the opaque kind tag attached to every part.

use std::fmt;

/// An archetypal limb type, such as "Hand", "Head", or "Face".
///
/// The tree never interprets an archetype; it is carried as inert payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LimbArchetype {
    name: String,
    is_appendage: bool,
}

/// Names of the appendage archetypes offered by the editor, in menu order.
const APPENDAGE_NAMES: [&str; 9] = [
    "Head", "Face", "Arm", "Hand", "Back", "Feet", "Tail", "Fin", "Roots",
];

impl LimbArchetype {
    /// Creates a new archetype.
    #[must_use]
    pub fn new(name: impl Into<String>, is_appendage: bool) -> Self {
        Self {
            name: name.into(),
            is_appendage,
        }
    }

    /// The archetype of a body, the usual root of a tree.
    #[must_use]
    pub fn body() -> Self {
        Self::new("Body", false)
    }

    /// Returns the catalog of appendage archetypes.
    #[must_use]
    pub fn appendages() -> Vec<Self> {
        APPENDAGE_NAMES
            .iter()
            .map(|name| Self::new(*name, true))
            .collect()
    }

    /// Looks up a catalog archetype by name, ignoring ASCII case.
    ///
    /// `"body"` resolves to [`LimbArchetype::body`].
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("body") {
            return Some(Self::body());
        }
        APPENDAGE_NAMES
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|name| Self::new(*name, true))
    }

    /// Returns the archetype name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if parts of this archetype are appendages.
    #[must_use]
    pub const fn is_appendage(&self) -> bool {
        self.is_appendage
    }
}

impl fmt::Display for LimbArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
