//! gdydoc - Documentation generator for GDY games
//!
//! Walks a tree of GDY game descriptions, renders tile and level images
//! with a small software engine and writes reStructuredText pages plus one
//! index page per directory.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod docgen;
pub mod engine;
pub mod error;
pub mod export;
pub mod gdy;
pub mod markup;
pub mod output;

pub use config::{Config, CONFIG_FILENAME};
pub use discovery::{is_gdy_file, scan_tree, DirectoryListing};
pub use docgen::{DocGenerator, Summary, INDEX_FILENAME};
pub use engine::{GameDescription, GameProcess, Grid, ObserverType};
pub use error::{DocError, Result};
pub use export::{level_image_path, object_image_path, slice_tiles, write_png};
pub use gdy::{BlockShape, Gdy, NameRegistry};
pub use markup::{GamePage, IndexPage};
pub use output::Printer;
