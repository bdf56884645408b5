//! Configuration for an editing session.

use anatomy_foundation::{Error, ErrorKind, Result};
use anatomy_tree::LimbArchetype;

/// Configuration for an editing session.
///
/// Controls the starting anatomy, menu rendering, and undo retention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Name of the root part of a fresh tree.
    pub root_name: String,

    /// Archetype of the root part of a fresh tree.
    pub root_archetype: LimbArchetype,

    /// Number of menu options pre-allocated in the option pool.
    pub menu_pool_size: usize,

    /// Spaces of indentation per tree depth in menu descriptions.
    pub indent_width: usize,

    /// Number of prior trees retained for undo.
    pub history_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            root_name: "Body".to_string(),
            root_archetype: LimbArchetype::body(),
            menu_pool_size: 12,
            indent_width: 2,
            history_capacity: 32,
        }
    }
}

impl SessionConfig {
    /// Creates a configuration for large anatomies: bigger pool, deeper undo.
    #[must_use]
    pub fn large() -> Self {
        Self {
            menu_pool_size: 64,
            history_capacity: 256,
            ..Self::default()
        }
    }

    /// Builder method to set the root part name.
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Builder method to set the root archetype.
    #[must_use]
    pub fn with_root_archetype(mut self, archetype: LimbArchetype) -> Self {
        self.root_archetype = archetype;
        self
    }

    /// Builder method to set the menu pool size.
    #[must_use]
    pub fn with_menu_pool_size(mut self, size: usize) -> Self {
        self.menu_pool_size = size;
        self
    }

    /// Builder method to set the indent width.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Builder method to set the undo history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Checks that the configuration can start a session.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the root name is blank or the history capacity is zero.
    pub fn validate(&self) -> Result<()> {
        if self.root_name.trim().is_empty() {
            return Err(Error::new(ErrorKind::InvalidConfig(
                "root name must not be blank".to_string(),
            )));
        }
        if self.history_capacity == 0 {
            return Err(Error::new(ErrorKind::InvalidConfig(
                "history capacity must be at least 1".to_string(),
            )));
        }
        Ok(())
    }
}
