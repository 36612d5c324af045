//! Documentation generation.
//!
//! Turns each GDY file into a page with tile and level images, and each
//! directory of the games tree into an index page. Everything runs
//! sequentially; every game process is released as soon as its frame has
//! been captured.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::config::Config;
use crate::discovery::{is_gdy_file, scan_tree, DirectoryListing};
use crate::engine::{GameDescription, Grid, ObserverType};
use crate::error::{DocError, Result};
use crate::export::{level_image_path, object_image_path, slice_tiles, write_png, IMAGE_DIR};
use crate::gdy::{Gdy, NameRegistry, GDY_EXTENSION};
use crate::markup::{GamePage, IndexPage, LevelEntry, ObjectEntry};
use crate::output::{display_path, plural, Printer};

/// Name of the index page written into every output directory.
pub const INDEX_FILENAME: &str = "index.rst";

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub games: usize,
    pub directories: usize,
    pub images: usize,
    pub skipped: usize,
}

/// Generates documentation for one run.
///
/// Holds the run's environment name registry, so a single generator must be
/// used for the whole tree.
pub struct DocGenerator<'a> {
    printer: &'a Printer,
    images_dir: PathBuf,
    names: NameRegistry,
    summary: Summary,
}

impl<'a> DocGenerator<'a> {
    pub fn new(images_dir: impl Into<PathBuf>, printer: &'a Printer) -> Self {
        Self {
            printer,
            images_dir: images_dir.into(),
            names: NameRegistry::new(),
            summary: Summary::default(),
        }
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Generate the whole documentation tree for `games_root` into `output_root`.
    pub fn generate_tree(&mut self, games_root: &Path, output_root: &Path) -> Result<Summary> {
        self.printer.status("Scanning", &display_path(games_root));

        for listing in scan_tree(games_root)? {
            self.generate_directory(&listing, output_root)?;
        }

        Ok(self.summary)
    }

    /// Generate the pages and index for a single directory.
    pub fn generate_directory(
        &mut self,
        listing: &DirectoryListing,
        output_root: &Path,
    ) -> Result<()> {
        let doc_dir = output_root.join(&listing.relative);
        create_dir(&doc_dir)?;

        let mut index = IndexPage::new(listing.title());

        if !listing.files.is_empty() {
            create_dir(&doc_dir.join(IMAGE_DIR))?;

            for file in &listing.files {
                if is_gdy_file(file) {
                    let page = self.generate_game_docs(file, &doc_dir)?;
                    index.pages.push(page);
                } else {
                    self.summary.skipped += 1;
                    self.printer.warning(
                        "Ignoring",
                        &format!(
                            "{} as it does not end in {}",
                            display_path(file),
                            GDY_EXTENSION
                        ),
                    );
                }
            }
        }

        index.subdirectories = listing.subdirectories.clone();

        let index_path = doc_dir.join(INDEX_FILENAME);
        write_text(&index_path, &index.render())?;
        self.summary.directories += 1;
        self.printer
            .verbose("Indexed", &display_path(&index_path));

        Ok(())
    }

    /// Generate the page and images for one GDY file.
    ///
    /// Returns the page's file name relative to `doc_dir`.
    pub fn generate_game_docs(&mut self, gdy_path: &Path, doc_dir: &Path) -> Result<String> {
        let source = fs::read_to_string(gdy_path).map_err(|e| DocError::Io {
            path: gdy_path.to_path_buf(),
            message: format!("Failed to read game description: {}", e),
        })?;

        let gdy = Gdy::parse(&source).inspect_err(|_| {
            self.printer
                .error("Failed", &format!("to parse {}", display_path(gdy_path)));
        })?;
        self.names.register(&gdy.environment.name)?;
        self.printer.verbose(
            "Loaded",
            &format!("Game description loaded: {}", gdy.environment.name),
        );

        let mut roots = vec![self.images_dir.clone()];
        if let Some(parent) = gdy_path.parent() {
            roots.push(parent.to_path_buf());
        }
        let description = GameDescription::from_gdy(gdy, roots);
        let environment = &description.gdy().environment;

        self.printer.status("Generating", &environment.name);

        let objects = self.generate_object_tile_images(&description, doc_dir)?;
        let levels = self.generate_level_images(&description, doc_dir)?;

        let page = GamePage {
            name: &environment.name,
            description: environment.description.as_deref(),
            objects,
            levels,
            source: &source,
        };

        let file_name = page.file_name();
        write_text(&doc_dir.join(&file_name), &page.render())?;
        self.summary.games += 1;

        Ok(file_name)
    }

    /// Render every placeable object once per observer, side by side in a
    /// single row, and write one image per object.
    fn generate_object_tile_images(
        &mut self,
        description: &GameDescription,
        doc_dir: &Path,
    ) -> Result<Vec<ObjectEntry>> {
        let gdy = description.gdy();
        let game_name = &gdy.environment.name;

        let mut entries: Vec<ObjectEntry> = gdy
            .tile_objects()
            .filter_map(|o| {
                o.map_character.map(|c| ObjectEntry {
                    name: o.name.clone(),
                    map_character: c,
                    images: Vec::new(),
                })
            })
            .collect();

        if entries.is_empty() {
            return Ok(entries);
        }

        let layout = format!("{}\n", gdy.tile_layout());

        for observer in ObserverType::ALL {
            let grid = description.load_level_string(&layout)?;
            let frame = capture(&grid, observer)?;
            let tiles = slice_tiles(&frame, grid.tile_size(), entries.len())?;

            for (entry, tile) in entries.iter_mut().zip(&tiles) {
                let relative = object_image_path(game_name, observer, &entry.name);
                write_png(tile, &doc_dir.join(&relative))?;
                entry.images.push(relative);
                self.summary.images += 1;
            }
        }

        self.printer.verbose(
            "Rendered",
            &format!("{} for {}", plural(entries.len(), "tile", "tiles"), game_name),
        );

        Ok(entries)
    }

    /// Render every level once per observer.
    fn generate_level_images(
        &mut self,
        description: &GameDescription,
        doc_dir: &Path,
    ) -> Result<Vec<LevelEntry>> {
        let game_name = &description.gdy().environment.name;
        let mut levels = Vec::new();

        for index in 0..description.gdy().level_count() {
            let mut images = Vec::with_capacity(ObserverType::ALL.len());

            for observer in ObserverType::ALL {
                let grid = description.load_level(index)?;
                let frame = capture(&grid, observer)?;

                let relative = level_image_path(game_name, observer, index);
                write_png(&frame, &doc_dir.join(&relative))?;
                images.push(relative);
                self.summary.images += 1;
            }

            levels.push(LevelEntry { index, images });
        }

        self.printer.verbose(
            "Rendered",
            &format!("{} for {}", plural(levels.len(), "level", "levels"), game_name),
        );

        Ok(levels)
    }
}

/// Run a game on `grid` just long enough to capture its first frame.
fn capture(grid: &Grid, observer: ObserverType) -> Result<RgbaImage> {
    let mut game = grid.create_game(observer)?;

    for p in 0..grid.player_count() {
        game.register_player(format!("P{}", p), observer)?;
    }

    game.init()?;
    game.reset()?;
    let frame = game.observe()?;

    game.release();

    Ok(frame)
}

/// Generate documentation as described by `config`.
pub fn run(config: &Config, printer: &Printer) -> Result<Summary> {
    let mut generator = DocGenerator::new(&config.images, printer);
    let summary = generator.generate_tree(&config.games, &config.output)?;

    printer.success(
        "Finished",
        &format!(
            "{} in {} ({}) -> {}",
            plural(summary.games, "game", "games"),
            plural(summary.directories, "directory", "directories"),
            plural(summary.images, "image", "images"),
            printer.cyan(&display_path(&config.output))
        ),
    );

    Ok(summary)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| DocError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create directory: {}", e),
    })
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| DocError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SOKOBAN: &str = r#"Environment:
  Name: Sokoban
  Description: Push the boxes.
  TileSize: 4
  Levels:
    - |
      wwww
      wAbw
      wwww
    - |
      www
      wAw

Objects:
  - Name: avatar
    MapCharacter: A
    Block:
      Color: [0.2, 0.8, 0.2]
      Shape: triangle
  - Name: box
    MapCharacter: b
    Block:
      Color: [1.0, 0.0, 0.0]
      Shape: square
  - Name: goal
  - Name: wall
    MapCharacter: w
    Block:
      Color: [0.5, 0.5, 0.5]
      Shape: square
"#;

    fn game(name: &str) -> String {
        format!(
            "Environment:\n  Name: {}\n  TileSize: 2\n  Levels:\n    - \"x\"\nObjects:\n  - Name: x\n    MapCharacter: x\n",
            name
        )
    }

    fn printer() -> Printer {
        Printer::plain()
    }

    #[test]
    fn test_generate_game_docs_writes_page_and_images() {
        let games = tempdir().unwrap();
        let docs = tempdir().unwrap();
        let gdy_path = games.path().join("sokoban.yaml");
        fs::write(&gdy_path, SOKOBAN).unwrap();
        fs::create_dir_all(docs.path().join(IMAGE_DIR)).unwrap();

        let printer = printer();
        let mut generator = DocGenerator::new(games.path(), &printer);
        let page = generator.generate_game_docs(&gdy_path, docs.path()).unwrap();

        assert_eq!(page, "Sokoban.rst");
        let text = fs::read_to_string(docs.path().join("Sokoban.rst")).unwrap();
        assert!(text.starts_with("Sokoban\n=======\n\n"));
        assert!(text.contains("Push the boxes."));

        // 3 tiles per observer
        assert_eq!(text.matches(".. image:: img/Sokoban-object-SPRITE_2D-").count(), 3);
        assert_eq!(text.matches(".. image:: img/Sokoban-object-BLOCK_2D-").count(), 3);
        assert!(!text.contains("goal"));

        // 2 levels, one thumbnail per observer each
        assert_eq!(text.matches(".. thumbnail::").count(), 4);

        for object in ["avatar", "box", "wall"] {
            for observer in ObserverType::ALL {
                let path = docs
                    .path()
                    .join(object_image_path("Sokoban", observer, object));
                let tile = image::open(&path).unwrap().to_rgba8();
                assert_eq!(tile.dimensions(), (4, 4));
            }
        }

        let level = image::open(docs.path().join(level_image_path(
            "Sokoban",
            ObserverType::Block2D,
            0,
        )))
        .unwrap()
        .to_rgba8();
        assert_eq!(level.dimensions(), (16, 12));

        assert_eq!(generator.summary().games, 1);
        assert_eq!(generator.summary().images, 10);
    }

    #[test]
    fn test_block_tile_colours() {
        let games = tempdir().unwrap();
        let docs = tempdir().unwrap();
        let gdy_path = games.path().join("sokoban.yaml");
        fs::write(&gdy_path, SOKOBAN).unwrap();
        fs::create_dir_all(docs.path().join(IMAGE_DIR)).unwrap();

        let printer = printer();
        DocGenerator::new(games.path(), &printer)
            .generate_game_docs(&gdy_path, docs.path())
            .unwrap();

        let tile = image::open(docs.path().join(object_image_path(
            "Sokoban",
            ObserverType::Block2D,
            "box",
        )))
        .unwrap()
        .to_rgba8();
        assert!(tile.pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn test_yaml_source_is_embedded() {
        let games = tempdir().unwrap();
        let docs = tempdir().unwrap();
        let gdy_path = games.path().join("sokoban.yaml");
        fs::write(&gdy_path, SOKOBAN).unwrap();
        fs::create_dir_all(docs.path().join(IMAGE_DIR)).unwrap();

        let printer = printer();
        DocGenerator::new(games.path(), &printer)
            .generate_game_docs(&gdy_path, docs.path())
            .unwrap();

        let text = fs::read_to_string(docs.path().join("Sokoban.rst")).unwrap();
        assert!(text.contains(".. code-block:: YAML\n\n   Environment:\n     Name: Sokoban\n"));
        // the blank line in the source stays blank
        assert!(text.contains("wAw\n\n   Objects:\n"));
    }

    #[test]
    fn test_game_without_tiles() {
        let games = tempdir().unwrap();
        let docs = tempdir().unwrap();
        let gdy_path = games.path().join("empty.yaml");
        fs::write(
            &gdy_path,
            "Environment:\n  Name: Empty\nObjects:\n  - Name: ghost\n",
        )
        .unwrap();

        let printer = printer();
        DocGenerator::new(games.path(), &printer)
            .generate_game_docs(&gdy_path, docs.path())
            .unwrap();

        let text = fs::read_to_string(docs.path().join("Empty.rst")).unwrap();
        assert!(text.contains("   * - Name ->\n   * - Map Char ->\n\n\n"));
        assert!(!text.contains(".. image::"));
        assert!(!text.contains(".. thumbnail::"));
        assert!(text.contains("No Description"));
    }

    #[test]
    fn test_generate_tree_mirrors_directories() {
        let games = tempdir().unwrap();
        let docs = tempdir().unwrap();
        fs::create_dir_all(games.path().join("puzzles")).unwrap();
        fs::write(games.path().join("sokoban.yaml"), SOKOBAN).unwrap();
        fs::write(games.path().join("README.md"), "# games").unwrap();
        fs::write(games.path().join("puzzles/maze.yaml"), game("Maze")).unwrap();

        let printer = printer();
        let summary = DocGenerator::new(games.path(), &printer)
            .generate_tree(games.path(), docs.path())
            .unwrap();

        assert_eq!(summary.games, 2);
        assert_eq!(summary.directories, 2);
        assert_eq!(summary.skipped, 1);

        let root_index = fs::read_to_string(docs.path().join(INDEX_FILENAME)).unwrap();
        assert_eq!(
            root_index,
            "Games\n=====\n\n.. toctree:: \n\n   Sokoban.rst\n   puzzles/index.rst\n"
        );
        assert!(!root_index.contains("README"));

        let nested = fs::read_to_string(docs.path().join("puzzles").join(INDEX_FILENAME)).unwrap();
        assert_eq!(nested, "puzzles\n=======\n\n.. toctree:: \n\n   Maze.rst\n");
        assert!(docs.path().join("puzzles/img").is_dir());
        assert!(docs.path().join("puzzles/Maze.rst").exists());
    }

    #[test]
    fn test_directory_without_files_has_no_img_dir() {
        let games = tempdir().unwrap();
        let docs = tempdir().unwrap();
        fs::create_dir_all(games.path().join("empty/inner")).unwrap();

        let printer = printer();
        DocGenerator::new(games.path(), &printer)
            .generate_tree(games.path(), docs.path())
            .unwrap();

        assert!(docs.path().join("empty").join(INDEX_FILENAME).exists());
        assert!(!docs.path().join("empty").join(IMAGE_DIR).exists());
    }

    #[test]
    fn test_duplicate_names_abort_run() {
        let games = tempdir().unwrap();
        let docs = tempdir().unwrap();
        fs::create_dir_all(games.path().join("more")).unwrap();
        fs::write(games.path().join("a.yaml"), game("Twin")).unwrap();
        fs::write(games.path().join("more/b.yaml"), game("Twin")).unwrap();
        fs::write(games.path().join("more/c.yaml"), game("Other")).unwrap();

        let printer = printer();
        let result = DocGenerator::new(games.path(), &printer)
            .generate_tree(games.path(), docs.path());

        assert!(matches!(result, Err(DocError::DuplicateName { ref name }) if name == "Twin"));
        assert!(docs.path().join("Twin.rst").exists());
        assert!(!docs.path().join("more/Other.rst").exists());
        assert!(!docs.path().join("more").join(INDEX_FILENAME).exists());
    }

    #[test]
    fn test_malformed_gdy_aborts_run() {
        let games = tempdir().unwrap();
        let docs = tempdir().unwrap();
        fs::write(games.path().join("bad.yaml"), "Environment: [").unwrap();

        let printer = printer();
        let result = DocGenerator::new(games.path(), &printer)
            .generate_tree(games.path(), docs.path());

        assert!(matches!(result, Err(DocError::Parse { .. })));
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let games = tempdir().unwrap();
        let docs = tempdir().unwrap();
        fs::create_dir_all(games.path().join("puzzles")).unwrap();
        fs::write(games.path().join("sokoban.yaml"), SOKOBAN).unwrap();
        fs::write(games.path().join("puzzles/maze.yaml"), game("Maze")).unwrap();

        let printer = printer();
        let read_all = || {
            ["index.rst", "Sokoban.rst", "puzzles/index.rst", "puzzles/Maze.rst"]
                .map(|p| fs::read(docs.path().join(p)).unwrap())
        };

        DocGenerator::new(games.path(), &printer)
            .generate_tree(games.path(), docs.path())
            .unwrap();
        let first = read_all();

        DocGenerator::new(games.path(), &printer)
            .generate_tree(games.path(), docs.path())
            .unwrap();
        let second = read_all();

        assert_eq!(first, second);
    }

    #[test]
    fn test_run_with_config() {
        let root = tempdir().unwrap();
        let config = Config {
            games: root.path().join("games"),
            output: root.path().join("docs"),
            images: root.path().join("images"),
        };
        fs::create_dir_all(&config.games).unwrap();
        fs::write(config.games.join("maze.yaml"), game("Maze")).unwrap();

        let summary = run(&config, &printer()).unwrap();

        assert_eq!(summary.games, 1);
        assert!(config.output.join("Maze.rst").exists());
        assert!(config.output.join("img/Maze-level-SPRITE_2D-0.png").exists());
    }
}
