//! Editing session state.
//!
//! The session holds the current tree, the selected part, undo history, and
//! the rendered menu. Every edit replaces the current tree with a new value
//! and rebuilds the menu from it.

use anatomy_foundation::{Error, ErrorContext, ErrorKind, Maybe, Result};
use anatomy_tree::{BodyPart, LimbArchetype, NestedPart, PartId, Tree};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::history::TreeHistory;
use crate::menu::{Menu, MenuOption};

/// Session state for interactively building an anatomy.
///
/// The selection is tracked by [`PartId`], so it follows its part through
/// unrelated edits. Adding or removing a limb clears it.
#[derive(Debug)]
pub struct EditSession {
    /// Session settings.
    config: SessionConfig,

    /// The current tree.
    tree: Tree,

    /// Identity of the selected part.
    selected: Maybe<PartId>,

    /// Prior trees for undo.
    history: TreeHistory,

    /// Menu rows derived from the current tree.
    menu: Menu,
}

impl EditSession {
    /// Creates a session holding a fresh tree built from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let tree = Tree::new(config.root_name.clone(), config.root_archetype.clone());
        Self::with_tree(config, tree)
    }

    /// Creates a session editing an existing tree.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails validation, and
    /// `CorruptState` if the tree cannot be walked.
    pub fn with_tree(config: SessionConfig, tree: Tree) -> Result<Self> {
        config.validate()?;
        let mut session = Self {
            history: TreeHistory::new(config.history_capacity),
            menu: Menu::new("Anatomy", "Build-a-Creature", config.menu_pool_size),
            config,
            tree,
            selected: Maybe::none(),
        };
        session.rebuild_menu()?;
        Ok(session)
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the current tree.
    #[must_use]
    pub const fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns the rendered menu.
    #[must_use]
    pub const fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Returns the menu rows.
    #[must_use]
    pub fn options(&self) -> &[MenuOption] {
        self.menu.options()
    }

    /// Returns the number of undoable edits.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Returns the selected part as stored in the current tree.
    #[must_use]
    pub fn selected(&self) -> Option<&BodyPart> {
        self.selected.get().and_then(|&id| self.tree.find(id))
    }

    /// Selects the part a handle refers to.
    ///
    /// # Errors
    ///
    /// Returns `DetachedNode` if the handle does not resolve against the current tree.
    pub fn select(&mut self, part: &BodyPart) -> Result<()> {
        let id = self.tree.resolve(part)?.id();
        self.set_selection(Maybe::of(id))
    }

    /// Selects the part shown on menu row `row`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if there is no such row.
    pub fn select_row(&mut self, row: usize) -> Result<&BodyPart> {
        let rows = self.menu.options().len();
        let id = self
            .menu
            .options()
            .get(row)
            .and_then(|option| option.part.get().copied())
            .ok_or_else(|| Error::index_out_of_range(row, rows))?;
        self.set_selection(Maybe::of(id))?;
        self.tree
            .find(id)
            .ok_or_else(|| Error::corrupt_state(format!("menu row {row} shows missing part {id}")))
    }

    /// Clears the selection.
    ///
    /// # Errors
    ///
    /// Returns `CorruptState` if the menu cannot be rebuilt.
    pub fn clear_selection(&mut self) -> Result<()> {
        self.set_selection(Maybe::none())
    }

    /// Appends a limb to the selected part.
    ///
    /// # Errors
    ///
    /// Returns `NoSelection` if no part is selected.
    pub fn add_limb(&mut self, archetype: LimbArchetype, name: impl Into<String>) -> Result<()> {
        self.insert_limb(Maybe::none(), archetype, name)
    }

    /// Inserts a limb under the selected part at `position`, or appends it.
    ///
    /// # Errors
    ///
    /// Returns `NoSelection` if no part is selected and `IndexOutOfRange` if
    /// `position` is past the end of the selected part's children.
    pub fn insert_limb(
        &mut self,
        position: Maybe<usize>,
        archetype: LimbArchetype,
        name: impl Into<String>,
    ) -> Result<()> {
        let parent = self.require_selection("add_limb")?;
        let name = name.into();
        let next = self
            .tree
            .insert_child(parent, position, name.clone(), archetype)?;

        info!(%name, parent = parent.name(), "added limb");
        self.commit(next)
    }

    /// Removes the selected part and everything attached to it.
    ///
    /// Returns the name of the removed part.
    ///
    /// # Errors
    ///
    /// Returns `NoSelection` if no part is selected and `RootRemoval` if the
    /// root is selected.
    pub fn remove_limb(&mut self) -> Result<String> {
        let part = self.require_selection("remove_limb")?;
        let name = part.name().to_string();
        let next = self.tree.remove_subtree(part)?;

        info!(%name, removed = self.tree.live_count() - next.live_count(), "removed limb");
        self.commit(next)?;
        Ok(name)
    }

    /// Restores the tree as it was before the last edit.
    ///
    /// The selection survives if its part exists in the restored tree. Ids
    /// handed out since the restored tree was taken are not reissued.
    ///
    /// # Errors
    ///
    /// Returns `NothingToUndo` if there is no prior tree.
    pub fn undo(&mut self) -> Result<()> {
        let previous = self
            .history
            .pop()
            .ok_or_else(|| Error::new(ErrorKind::NothingToUndo))?;
        let high_water = self.tree.next_id();
        self.tree = previous.with_ids_from(high_water);
        if self.selected().is_none() {
            self.selected = Maybe::none();
        }
        debug!(remaining = self.history.len(), "undid edit");
        self.rebuild_menu()
    }

    /// Builds an owned nested copy of the current tree.
    ///
    /// # Errors
    ///
    /// Returns `CorruptState` if the tree cannot be walked.
    pub fn export(&self) -> Result<NestedPart> {
        self.tree.to_nested()
    }

    /// Re-derives the menu rows from the current tree and selection.
    ///
    /// # Errors
    ///
    /// Returns `CorruptState` if the tree cannot be walked.
    pub fn rebuild_menu(&mut self) -> Result<()> {
        let selected = self.selected().map(BodyPart::id);
        self.menu
            .rebuild(&self.tree, selected, self.config.indent_width)
    }

    fn require_selection(&self, operation: &str) -> Result<&BodyPart> {
        self.selected().ok_or_else(|| {
            Error::new(ErrorKind::NoSelection)
                .with_context(ErrorContext::new().with_operation(operation))
        })
    }

    fn set_selection(&mut self, selected: Maybe<PartId>) -> Result<()> {
        self.selected = selected;
        self.rebuild_menu()
    }

    /// Replaces the current tree, keeping the old one for undo.
    fn commit(&mut self, next: Tree) -> Result<()> {
        let previous = std::mem::replace(&mut self.tree, next);
        self.history.push(previous);
        self.selected = Maybe::none();
        self.rebuild_menu()
    }
}
