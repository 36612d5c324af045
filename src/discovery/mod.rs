//! Discovery of game descriptions.
//!
//! Scans a games directory tree so the generator can mirror it into the
//! documentation tree, one index page per directory.
//!
//! # Example
//!
//! ```ignore
//! use gdydoc::discovery::scan_tree;
//!
//! for dir in scan_tree("resources/games".as_ref())? {
//!     println!("{}: {} game(s)", dir.title(), dir.gdy_files().count());
//! }
//! ```

mod scanner;

pub use scanner::{is_gdy_file, scan_tree, DirectoryListing, ROOT_TITLE};
