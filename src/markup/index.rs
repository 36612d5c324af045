//! Per-directory index pages.

use super::heading;

/// Table of contents for one output directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexPage {
    pub title: String,
    /// Page file names, e.g. `Sokoban.rst`.
    pub pages: Vec<String>,
    /// Subdirectory names; each links to its own `index.rst`.
    pub subdirectories: Vec<String>,
}

impl IndexPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn render(&self) -> String {
        let mut out = heading(&self.title, '=');

        out.push_str(".. toctree:: \n\n");
        for page in &self.pages {
            out.push_str(&format!("   {}\n", page));
        }
        for dir in &self.subdirectories {
            out.push_str(&format!("   {}/index.rst\n", dir));
        }

        out
    }
}
