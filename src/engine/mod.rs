//! Software grid-game engine used to render documentation images.
//!
//! The engine follows the lifecycle of a grid-game runtime: a
//! [`GameDescription`] is loaded from a GDY file, a [`Grid`] is built from one
//! of its levels (or a literal layout), a [`GameProcess`] is created for an
//! observer mode, players are registered, and the process is initialised and
//! reset before its frame is observed. Each process must be released
//! explicitly once its frame has been captured.
//!
//! # Example
//!
//! ```ignore
//! use gdydoc::engine::{GameDescription, ObserverType};
//!
//! let description = GameDescription::load("sokoban.yaml", "resources/images")?;
//! let grid = description.load_level(0)?;
//! let mut game = grid.create_game(ObserverType::Block2D)?;
//! for p in 0..grid.player_count() {
//!     game.register_player(format!("P{p}"), ObserverType::Block2D)?;
//! }
//! game.init()?;
//! game.reset()?;
//! let frame = game.observe()?;
//! game.release();
//! ```

mod description;
mod grid;
mod observer;
mod process;

use std::fmt;

pub use description::GameDescription;
pub use grid::{Grid, PlacedObject};
pub use observer::{BlockObserver, Observer, SpriteObserver};
pub use process::{GameProcess, Player};

/// A rendering style for observing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObserverType {
    /// Sprite images scaled to the tile grid.
    Sprite2D,
    /// Flat coloured shapes.
    Block2D,
}

impl ObserverType {
    /// Every observer mode, in documentation order.
    pub const ALL: [ObserverType; 2] = [ObserverType::Sprite2D, ObserverType::Block2D];

    pub fn as_str(self) -> &'static str {
        match self {
            ObserverType::Sprite2D => "SPRITE_2D",
            ObserverType::Block2D => "BLOCK_2D",
        }
    }
}

impl fmt::Display for ObserverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
