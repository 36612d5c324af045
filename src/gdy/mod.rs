//! GDY game description reader.
//!
//! Loads the YAML game description files that the documentation is generated
//! from, and tracks environment names so a run never documents two games
//! under the same name.
//!
//! # Example
//!
//! ```ignore
//! use gdydoc::gdy::{Gdy, NameRegistry};
//!
//! let gdy = Gdy::load("resources/games/sokoban.yaml")?;
//! let mut names = NameRegistry::new();
//! names.register(&gdy.environment.name)?;
//! ```

mod registry;
mod types;

use std::collections::HashMap;
use std::path::Path;

use crate::error::{DocError, Result};

pub use registry::NameRegistry;
pub use types::{
    BlockDefinition, BlockShape, Environment, Gdy, ObjectDef, PlayerConfig, DEFAULT_TILE_SIZE,
};

/// Extension recognised as a game description.
pub const GDY_EXTENSION: &str = ".yaml";

/// Map character marking an empty cell in a level layout.
pub const EMPTY_CELL: char = '.';

impl Gdy {
    /// Load a game description from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| DocError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read game description: {}", e),
        })?;

        Self::parse(&source)
    }

    /// Parse a game description from YAML source.
    pub fn parse(source: &str) -> Result<Self> {
        let gdy: Gdy = serde_yaml::from_str(source).map_err(|e| DocError::Parse {
            message: format!("Invalid GDY: {}", e),
            help: Some("A GDY file needs an Environment block with a Name".to_string()),
        })?;

        gdy.check_map_characters()?;
        Ok(gdy)
    }

    /// Objects that can be placed in a level, in declaration order.
    pub fn tile_objects(&self) -> impl Iterator<Item = &ObjectDef> + '_ {
        self.objects.iter().filter(|o| o.map_character.is_some())
    }

    /// A single-row layout holding one of every placeable object.
    pub fn tile_layout(&self) -> String {
        self.tile_objects().filter_map(|o| o.map_character).collect()
    }

    /// Find an object by its map character.
    pub fn object_for_char(&self, c: char) -> Option<&ObjectDef> {
        self.objects.iter().find(|o| o.map_character == Some(c))
    }

    /// Number of levels declared in the environment.
    pub fn level_count(&self) -> usize {
        self.environment.levels.len()
    }

    fn check_map_characters(&self) -> Result<()> {
        let mut seen: HashMap<char, &str> = HashMap::new();

        for object in &self.objects {
            let Some(c) = object.map_character else {
                continue;
            };

            if c == EMPTY_CELL || c.is_whitespace() || c.is_ascii_digit() {
                return Err(DocError::Parse {
                    message: format!(
                        "Object '{}' uses reserved map character '{}'",
                        object.name, c
                    ),
                    help: Some(
                        "'.', whitespace and digits are reserved in level layouts".to_string(),
                    ),
                });
            }

            if let Some(other) = seen.insert(c, &object.name) {
                return Err(DocError::Parse {
                    message: format!(
                        "Objects '{}' and '{}' share map character '{}'",
                        other, object.name, c
                    ),
                    help: None,
                });
            }
        }

        Ok(())
    }
}
