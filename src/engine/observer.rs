//! Observers rasterise a grid into an RGBA frame.

use std::collections::HashMap;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::error::{DocError, Result};
use crate::gdy::{BlockDefinition, BlockShape};

use super::description::DescriptionData;
use super::grid::Grid;
use super::ObserverType;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Placeholder for objects with nothing to draw.
const MISSING: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Renders the state of a grid.
pub trait Observer {
    fn observer_type(&self) -> ObserverType;

    /// Render the whole grid. The frame is `width * tile_size` by
    /// `height * tile_size` pixels.
    fn render(&self, grid: &Grid) -> RgbaImage;
}

fn blank_frame(grid: &Grid) -> RgbaImage {
    let tile = grid.tile_size();
    RgbaImage::from_pixel(grid.width() * tile, grid.height() * tile, BACKGROUND)
}

/// Draws each object as a flat coloured shape.
pub struct BlockObserver {
    blocks: HashMap<String, BlockDefinition>,
}

impl BlockObserver {
    pub fn new(grid: &Grid) -> Self {
        let blocks = grid
            .gdy()
            .objects
            .iter()
            .filter_map(|o| o.block.clone().map(|b| (o.name.clone(), b)))
            .collect();

        Self { blocks }
    }
}

impl Observer for BlockObserver {
    fn observer_type(&self) -> ObserverType {
        ObserverType::Block2D
    }

    fn render(&self, grid: &Grid) -> RgbaImage {
        let tile = grid.tile_size();
        let mut frame = blank_frame(grid);

        for object in grid.objects() {
            let (shape, scale, colour) = match self.blocks.get(&object.name) {
                Some(block) => {
                    let [r, g, b] = block.rgb();
                    (block.shape, block.scale, Rgba([r, g, b, 255]))
                }
                None => (BlockShape::Square, 1.0, MISSING),
            };

            draw_shape(&mut frame, object.x * tile, object.y * tile, tile, shape, scale, colour);
        }

        frame
    }
}

/// Draw a shape centred in the tile at (`origin_x`, `origin_y`).
///
/// The shape fits a box of edge `tile * scale`. Each pixel is tested at its
/// centre in box-normalised coordinates.
fn draw_shape(
    frame: &mut RgbaImage,
    origin_x: u32,
    origin_y: u32,
    tile: u32,
    shape: BlockShape,
    scale: f32,
    colour: Rgba<u8>,
) {
    let size = tile as f32 * scale;
    if size <= 0.0 {
        return;
    }
    let centre = tile as f32 / 2.0;

    for py in 0..tile {
        for px in 0..tile {
            let u = (px as f32 + 0.5 - centre) / size + 0.5;
            let v = (py as f32 + 0.5 - centre) / size + 0.5;

            let inside = match shape {
                BlockShape::Square => (0.0..1.0).contains(&u) && (0.0..1.0).contains(&v),
                BlockShape::Triangle => (0.0..1.0).contains(&v) && (u - 0.5).abs() <= v / 2.0,
                BlockShape::Circle => (u - 0.5).powi(2) + (v - 0.5).powi(2) <= 0.25,
            };

            if inside {
                frame.put_pixel(origin_x + px, origin_y + py, colour);
            }
        }
    }
}

/// Draws each object with its sprite image scaled to the tile.
pub struct SpriteObserver {
    textures: HashMap<String, RgbaImage>,
    placeholder: RgbaImage,
}

impl SpriteObserver {
    /// Load and scale the sprites of every object on the grid.
    pub(crate) fn load(grid: &Grid, description: &DescriptionData) -> Result<Self> {
        let tile = grid.tile_size();
        let mut textures = HashMap::new();

        for placed in grid.objects() {
            if textures.contains_key(&placed.name) {
                continue;
            }

            let Some(sprite) = grid
                .gdy()
                .objects
                .iter()
                .find(|o| o.name == placed.name)
                .and_then(|o| o.sprite.as_deref())
            else {
                continue;
            };

            let path = description.resolve_sprite(sprite).ok_or_else(|| DocError::Engine {
                message: format!("Sprite '{}' for object '{}' not found", sprite, placed.name),
                help: Some("Sprites are resolved against the images directory, then the GDY file's directory".to_string()),
            })?;

            let image = image::open(&path)
                .map_err(|e| DocError::Engine {
                    message: format!("Failed to load sprite {}: {}", path.display(), e),
                    help: None,
                })?
                .to_rgba8();

            let scaled = imageops::resize(&image, tile, tile, FilterType::Nearest);
            textures.insert(placed.name.clone(), scaled);
        }

        Ok(Self {
            textures,
            placeholder: RgbaImage::from_pixel(tile, tile, MISSING),
        })
    }
}

impl Observer for SpriteObserver {
    fn observer_type(&self) -> ObserverType {
        ObserverType::Sprite2D
    }

    fn render(&self, grid: &Grid) -> RgbaImage {
        let tile = grid.tile_size();
        let mut frame = blank_frame(grid);

        for object in grid.objects() {
            let texture = self.textures.get(&object.name).unwrap_or(&self.placeholder);
            imageops::overlay(
                &mut frame,
                texture,
                (object.x * tile) as i64,
                (object.y * tile) as i64,
            );
        }

        frame
    }
}
