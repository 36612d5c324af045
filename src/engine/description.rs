//! Loaded game descriptions.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{DocError, Result};
use crate::gdy::Gdy;

use super::grid::{read_layout, Grid};

/// Shared, immutable data behind a description and every grid built from it.
#[derive(Debug)]
pub(crate) struct DescriptionData {
    pub gdy: Gdy,
    /// Directories searched, in order, for sprite images.
    pub sprite_roots: Vec<PathBuf>,
}

impl DescriptionData {
    /// Resolve a sprite path against the sprite roots.
    pub fn resolve_sprite(&self, sprite: &str) -> Option<PathBuf> {
        let path = Path::new(sprite);
        if path.is_absolute() {
            return path.exists().then(|| path.to_path_buf());
        }

        self.sprite_roots
            .iter()
            .map(|root| root.join(path))
            .find(|candidate| candidate.exists())
    }
}

/// A game description loaded into the engine.
#[derive(Debug, Clone)]
pub struct GameDescription {
    data: Rc<DescriptionData>,
}

impl GameDescription {
    /// Load a GDY file.
    ///
    /// Sprites are looked up in `images_dir` first, then next to the GDY file.
    pub fn load(path: impl AsRef<Path>, images_dir: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let gdy = Gdy::load(path)?;

        let mut roots = vec![images_dir.as_ref().to_path_buf()];
        if let Some(parent) = path.parent() {
            roots.push(parent.to_path_buf());
        }

        Ok(Self::from_gdy(gdy, roots))
    }

    /// Wrap an already parsed description.
    pub fn from_gdy(gdy: Gdy, sprite_roots: Vec<PathBuf>) -> Self {
        Self {
            data: Rc::new(DescriptionData { gdy, sprite_roots }),
        }
    }

    pub fn gdy(&self) -> &Gdy {
        &self.data.gdy
    }

    pub(crate) fn data(&self) -> &DescriptionData {
        &self.data
    }

    /// Tile edge length in pixels.
    pub fn tile_size(&self) -> u32 {
        self.data.gdy.environment.tile_size()
    }

    /// Build the grid for a declared level.
    pub fn load_level(&self, index: usize) -> Result<Grid> {
        let levels = &self.data.gdy.environment.levels;
        let layout = levels.get(index).ok_or_else(|| DocError::Engine {
            message: format!(
                "Level {} does not exist in '{}' ({} levels)",
                index,
                self.data.gdy.environment.name,
                levels.len()
            ),
            help: None,
        })?;

        self.load_level_string(layout)
    }

    /// Build a grid from a literal layout.
    pub fn load_level_string(&self, layout: &str) -> Result<Grid> {
        let parsed = read_layout(layout, &self.data.gdy)?;
        Ok(Grid::new(Rc::clone(&self.data), parsed))
    }
}
