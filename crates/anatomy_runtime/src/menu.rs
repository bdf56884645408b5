//! Menu rendering of a tree.
//!
//! The menu is rebuilt from scratch after every edit. Options are recycled
//! through a [`Pool`] so a rebuild reuses existing rows and their buffers.

use anatomy_foundation::{Maybe, Pool, Result};
use anatomy_tree::{PartId, Tree};
use tracing::trace;

/// Long description shown for every part.
const PART_BLURB: &str = "A piece of you.";

/// One selectable menu row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuOption {
    /// Indented `[Archetype] Name` label.
    pub description: String,
    /// Detail text.
    pub long_description: String,
    /// The part this row shows.
    pub part: Maybe<PartId>,
    /// Depth of the part in the tree.
    pub depth: usize,
    /// Whether the part is the current selection.
    pub selected: bool,
}

/// A titled list of menu rows backed by an option pool.
#[derive(Debug)]
pub struct Menu {
    title: String,
    description: String,
    options: Vec<MenuOption>,
    pool: Pool<MenuOption>,
}

impl Menu {
    /// Creates an empty menu whose pool holds `pool_size` options.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, pool_size: usize) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            options: Vec::new(),
            pool: Pool::new(pool_size),
        }
    }

    /// Returns the menu title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the menu description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current rows in preorder.
    #[must_use]
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Returns the number of pooled options not currently shown.
    #[must_use]
    pub fn pooled(&self) -> usize {
        self.pool.len()
    }

    /// Replaces the rows with one per part of `tree`, in preorder.
    ///
    /// # Errors
    ///
    /// Returns `CorruptState` if the tree walk fails. The menu is left empty.
    pub fn rebuild(
        &mut self,
        tree: &Tree,
        selected: Option<PartId>,
        indent_width: usize,
    ) -> Result<()> {
        for option in self.options.drain(..) {
            self.pool.give_back(option);
        }

        let pool = &mut self.pool;
        let options = &mut self.options;
        tree.map_preorder(|part, depth| {
            let mut option = pool.take();
            option.description.clear();
            option
                .description
                .extend(std::iter::repeat_n(' ', depth * indent_width));
            option.description.push_str(&part.to_string());
            option.long_description.clear();
            option.long_description.push_str(PART_BLURB);
            option.part = Maybe::of(part.id());
            option.depth = depth;
            option.selected = selected == Some(part.id());
            options.push(option);
        })
        .inspect_err(|_| {
            for option in self.options.drain(..) {
                self.pool.give_back(option);
            }
        })?;

        trace!(rows = self.options.len(), pooled = self.pool.len(), "rebuilt menu");
        Ok(())
    }
}
