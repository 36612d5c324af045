//! Image export for documentation pages.
//!
//! Slices combined tile frames into one image per object and writes PNG
//! files at paths derived from the game name, observer mode and object or
//! level.

use std::path::Path;

use image::imageops;
use image::RgbaImage;

use crate::engine::ObserverType;
use crate::error::{DocError, Result};

/// Directory, relative to a page, that holds its images.
pub const IMAGE_DIR: &str = "img";

/// File-name form of a game name.
pub fn game_slug(game_name: &str) -> String {
    game_name.replace(' ', "_")
}

/// Page-relative path of an object tile image.
pub fn object_image_path(game_name: &str, observer: ObserverType, object: &str) -> String {
    format!(
        "{}/{}-object-{}-{}.png",
        IMAGE_DIR,
        game_slug(game_name),
        observer,
        object
    )
}

/// Page-relative path of a level image.
pub fn level_image_path(game_name: &str, observer: ObserverType, level: usize) -> String {
    format!(
        "{}/{}-level-{}-{}.png",
        IMAGE_DIR,
        game_slug(game_name),
        observer,
        level
    )
}

/// Split a frame of tiles laid out left to right into `count` tiles.
pub fn slice_tiles(frame: &RgbaImage, tile_size: u32, count: usize) -> Result<Vec<RgbaImage>> {
    let needed = tile_size as u64 * count as u64;
    if needed > frame.width() as u64 {
        return Err(DocError::Build {
            message: format!(
                "Frame is {} pixels wide but {} tiles of {} pixels were requested",
                frame.width(),
                count,
                tile_size
            ),
            help: None,
        });
    }

    let tiles = (0..count as u32)
        .map(|i| imageops::crop_imm(frame, i * tile_size, 0, tile_size, frame.height()).to_image())
        .collect();

    Ok(tiles)
}

/// Write an image to a PNG file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|e| DocError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}
