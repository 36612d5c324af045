//! GDY document types.
//!
//! These mirror the YAML layout of a game description. Only the parts needed
//! to document a game are modelled; `Actions` is kept as an opaque value.

use palette::Srgb;
use serde::Deserialize;

/// Default tile size in pixels when `Environment.TileSize` is absent.
pub const DEFAULT_TILE_SIZE: u32 = 10;

/// A parsed game description.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Gdy {
    /// Declared GDY version. Kept loose since files write it as a number.
    #[serde(default)]
    pub version: Option<serde_yaml::Value>,

    pub environment: Environment,

    #[serde(default)]
    pub objects: Vec<ObjectDef>,

    #[serde(default)]
    pub actions: serde_yaml::Value,
}

/// The `Environment` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Environment {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tile_size: Option<u32>,

    #[serde(default)]
    pub player: Option<PlayerConfig>,

    /// Level layouts, one row per line.
    #[serde(default)]
    pub levels: Vec<String>,
}

impl Environment {
    /// Tile size in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size.unwrap_or(DEFAULT_TILE_SIZE)
    }

    /// Explicit player count, if the description declares one.
    pub fn player_count(&self) -> Option<u32> {
        self.player.as_ref().and_then(|p| p.count)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerConfig {
    #[serde(default)]
    pub count: Option<u32>,
}

/// A single entry of the `Objects` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectDef {
    pub name: String,

    /// Symbol used for this object in level layouts.
    #[serde(default)]
    pub map_character: Option<char>,

    /// Sprite image path for the sprite observer.
    #[serde(default)]
    pub sprite: Option<String>,

    /// Shape definition for the block observer.
    #[serde(default)]
    pub block: Option<BlockDefinition>,
}

/// How the block observer draws an object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockDefinition {
    /// RGB components in `0.0..=1.0`.
    pub color: [f32; 3],

    pub shape: BlockShape,

    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl BlockDefinition {
    /// The block colour as 8-bit sRGB.
    pub fn rgb(&self) -> [u8; 3] {
        let [r, g, b] = self.color.map(|c| c.clamp(0.0, 1.0));
        let colour: Srgb<u8> = Srgb::new(r, g, b).into_format();
        [colour.red, colour.green, colour.blue]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockShape {
    Square,
    Triangle,
    Circle,
}
