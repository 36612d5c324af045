//! Level grids and the layout reader.
//!
//! A layout is plain text: one row per line, `.` for an empty cell, and a map
//! character for each object. A map character may be followed by digits
//! naming the player that owns the object (e.g. `A1`).

use std::rc::Rc;

use crate::error::{DocError, Result};
use crate::gdy::{Gdy, EMPTY_CELL};

use super::description::DescriptionData;
use super::observer::{BlockObserver, Observer, SpriteObserver};
use super::process::GameProcess;
use super::ObserverType;

/// An object placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedObject {
    /// Object name from the description.
    pub name: String,
    pub x: u32,
    pub y: u32,
    /// Owning player, 0 when unowned.
    pub player_id: u32,
}

/// Result of reading a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    pub width: u32,
    pub height: u32,
    pub objects: Vec<PlacedObject>,
    /// Highest player id referenced by the layout.
    pub max_player_id: u32,
}

/// A level ready to be turned into a game.
#[derive(Debug, Clone)]
pub struct Grid {
    description: Rc<DescriptionData>,
    layout: Layout,
}

impl Grid {
    pub(crate) fn new(description: Rc<DescriptionData>, layout: Layout) -> Self {
        Self {
            description,
            layout,
        }
    }

    /// Width in tiles.
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    /// Height in tiles.
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    /// Tile edge length in pixels.
    pub fn tile_size(&self) -> u32 {
        self.description.gdy.environment.tile_size()
    }

    /// Number of players a game on this grid needs.
    ///
    /// Uses the environment's explicit count when present, otherwise the
    /// highest player id in the layout, and never less than one.
    pub fn player_count(&self) -> u32 {
        self.description
            .gdy
            .environment
            .player_count()
            .unwrap_or(self.layout.max_player_id)
            .max(1)
    }

    /// Objects in layout order (row-major).
    pub fn objects(&self) -> &[PlacedObject] {
        &self.layout.objects
    }

    pub(crate) fn gdy(&self) -> &Gdy {
        &self.description.gdy
    }

    /// Create a game process observed in the given mode.
    ///
    /// Sprite games load their textures here, so a missing sprite file
    /// surfaces as an error from this call.
    pub fn create_game(&self, observer_type: ObserverType) -> Result<GameProcess> {
        let observer: Box<dyn Observer> = match observer_type {
            ObserverType::Block2D => Box::new(BlockObserver::new(self)),
            ObserverType::Sprite2D => Box::new(SpriteObserver::load(self, &self.description)?),
        };

        Ok(GameProcess::new(self.clone(), observer))
    }
}

/// Read a text layout into placed objects.
pub(crate) fn read_layout(layout: &str, gdy: &Gdy) -> Result<Layout> {
    let mut objects = Vec::new();
    let mut width = 0u32;
    let mut height = 0u32;
    let mut max_player_id = 0u32;

    for line in layout.lines() {
        let mut chars = line.chars().filter(|c| !matches!(c, ' ' | '\t' | '\r')).peekable();
        let mut x = 0u32;

        while let Some(c) = chars.next() {
            if c == EMPTY_CELL {
                x += 1;
                continue;
            }

            let object = gdy.object_for_char(c).ok_or_else(|| DocError::Engine {
                message: format!(
                    "Unknown map character '{}' at row {}, column {}",
                    c, height, x
                ),
                help: Some("Every layout character must be an object's MapCharacter or '.'".to_string()),
            })?;

            let mut digits = String::new();
            while let Some(d) = chars.next_if(|d| d.is_ascii_digit()) {
                digits.push(d);
            }
            let player_id = if digits.is_empty() {
                0
            } else {
                digits.parse().map_err(|_| DocError::Engine {
                    message: format!("Invalid player id '{}' after '{}'", digits, c),
                    help: None,
                })?
            };
            max_player_id = max_player_id.max(player_id);

            objects.push(PlacedObject {
                name: object.name.clone(),
                x,
                y: height,
                player_id,
            });
            x += 1;
        }

        if x == 0 {
            continue;
        }

        width = width.max(x);
        height += 1;
    }

    if width == 0 || height == 0 {
        return Err(DocError::Engine {
            message: "Level layout is empty".to_string(),
            help: None,
        });
    }

    Ok(Layout {
        width,
        height,
        objects,
        max_player_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameDescription;

    fn gdy() -> Gdy {
        Gdy::parse(
            r#"
Environment:
  Name: Grid Test
Objects:
  - Name: avatar
    MapCharacter: A
  - Name: wall
    MapCharacter: w
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_read_layout_dimensions() {
        let layout = read_layout("www\nw.w\nwww\n", &gdy()).unwrap();

        assert_eq!((layout.width, layout.height), (3, 3));
        assert_eq!(layout.objects.len(), 8);
        assert_eq!(layout.max_player_id, 0);
    }

    #[test]
    fn test_read_layout_positions() {
        let layout = read_layout("A.w\n", &gdy()).unwrap();

        assert_eq!(
            layout.objects,
            vec![
                PlacedObject {
                    name: "avatar".to_string(),
                    x: 0,
                    y: 0,
                    player_id: 0
                },
                PlacedObject {
                    name: "wall".to_string(),
                    x: 2,
                    y: 0,
                    player_id: 0
                },
            ]
        );
    }

    #[test]
    fn test_read_layout_player_ids() {
        let layout = read_layout("A1 . A2 w\n", &gdy()).unwrap();

        assert_eq!(layout.width, 4);
        assert_eq!(layout.max_player_id, 2);
        assert_eq!(layout.objects[0].player_id, 1);
        assert_eq!(layout.objects[1].player_id, 2);
        assert_eq!(layout.objects[1].x, 2);
    }

    #[test]
    fn test_read_layout_ignores_blank_lines() {
        let layout = read_layout("\n  ww\n\nww\n\n", &gdy()).unwrap();
        assert_eq!((layout.width, layout.height), (2, 2));
    }

    #[test]
    fn test_read_layout_ragged_rows() {
        let layout = read_layout("www\nw\n", &gdy()).unwrap();
        assert_eq!((layout.width, layout.height), (3, 2));
    }

    #[test]
    fn test_read_layout_unknown_character() {
        let result = read_layout("wxw\n", &gdy());
        assert!(matches!(result, Err(DocError::Engine { .. })));
    }

    #[test]
    fn test_read_layout_empty() {
        assert!(read_layout("", &gdy()).is_err());
        assert!(read_layout("\n\n", &gdy()).is_err());
    }

    #[test]
    fn test_player_count_from_layout() {
        let description = GameDescription::from_gdy(gdy(), vec![]);

        let grid = description.load_level_string("A1A2A3\n").unwrap();
        assert_eq!(grid.player_count(), 3);

        let grid = description.load_level_string("ww\n").unwrap();
        assert_eq!(grid.player_count(), 1);
    }

    #[test]
    fn test_player_count_explicit() {
        let gdy = Gdy::parse(
            "Environment:\n  Name: Duel\n  Player:\n    Count: 2\nObjects:\n  - Name: a\n    MapCharacter: a\n",
        )
        .unwrap();
        let description = GameDescription::from_gdy(gdy, vec![]);

        let grid = description.load_level_string("a\n").unwrap();
        assert_eq!(grid.player_count(), 2);
    }
}
