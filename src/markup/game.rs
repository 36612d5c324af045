//! Per-game documentation page.

use crate::engine::ObserverType;

use super::{heading, indent};

/// Description text used when the environment has none.
pub const NO_DESCRIPTION: &str = "No Description";

/// A placeable object and its tile images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    pub name: String,
    pub map_character: char,
    /// Image path per observer, in the order of [`ObserverType::ALL`].
    pub images: Vec<String>,
}

/// A level and its thumbnails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEntry {
    pub index: usize,
    /// Image path per observer, in the order of [`ObserverType::ALL`].
    pub images: Vec<String>,
}

/// Everything needed to write one game's page.
#[derive(Debug, Clone)]
pub struct GamePage<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub objects: Vec<ObjectEntry>,
    pub levels: Vec<LevelEntry>,
    /// Original GDY text, reproduced verbatim.
    pub source: &'a str,
}

impl GamePage<'_> {
    /// File name of the page, relative to its directory.
    pub fn file_name(&self) -> String {
        format!("{}.rst", self.name)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&heading(self.name, '='));

        out.push_str("Description\n");
        out.push_str("-------------\n\n");
        out.push_str(self.description.unwrap_or(NO_DESCRIPTION));
        out.push_str("\n\n");

        out.push_str("Objects\n");
        out.push_str("-------\n\n");
        out.push_str(&self.object_table());

        out.push_str("Levels\n");
        out.push_str("---------\n\n");
        out.push_str(&self.level_table());

        out.push_str("YAML\n");
        out.push_str("----\n\n");
        out.push_str(".. code-block:: YAML\n\n");
        out.push_str(&indent(self.source, "   "));
        out.push_str("\n\n");

        out
    }

    /// Object table: a name row and a map character row as headers, then
    /// one row of tile images per observer.
    pub fn object_table(&self) -> String {
        let mut out = String::from(".. list-table:: Tiles\n   :header-rows: 2\n\n");

        let mut names = String::from("   * - Name ->\n");
        let mut chars = String::from("   * - Map Char ->\n");
        for object in &self.objects {
            names.push_str(&format!("     - {}\n", object.name));
            chars.push_str(&format!("     - {}\n", object.map_character));
        }
        out.push_str(&names);
        out.push_str(&chars);

        if !self.objects.is_empty() {
            for (i, observer) in ObserverType::ALL.iter().enumerate() {
                out.push_str(&format!("   * - {}\n", observer));
                for object in &self.objects {
                    if let Some(image) = object.images.get(i) {
                        out.push_str(&format!("     - .. image:: {}\n", image));
                    }
                }
            }
        }

        out.push_str("\n\n");
        out
    }

    /// Level table: one row per level, one thumbnail column per observer.
    pub fn level_table(&self) -> String {
        let mut out = String::from(".. list-table:: Levels\n   :header-rows: 1\n\n");

        out.push_str("   * - \n");
        for observer in ObserverType::ALL {
            out.push_str(&format!("     - {}\n", observer));
        }

        for level in &self.levels {
            out.push_str(&format!("   * - {}\n", level.index));
            for image in level.images.iter().take(ObserverType::ALL.len()) {
                out.push_str(&format!("     - .. thumbnail:: {}\n", image));
            }
        }

        out.push('\n');
        out
    }
}
