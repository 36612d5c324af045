//! reStructuredText composition.
//!
//! Builds the per-game pages and per-directory indexes consumed by the
//! Sphinx documentation build. Output is plain string concatenation so the
//! same input always produces byte-identical text.

mod game;
mod index;

pub use game::{GamePage, LevelEntry, ObjectEntry, NO_DESCRIPTION};
pub use index::IndexPage;

/// Section title underlined with `marker`, repeated to the title's width.
pub fn heading(title: &str, marker: char) -> String {
    let underline: String = std::iter::repeat(marker).take(title.chars().count()).collect();
    format!("{}\n{}\n\n", title, underline)
}

/// Prefix every line that has non-whitespace content.
///
/// Line endings are preserved, and blank lines are left untouched so that
/// literal blocks do not pick up trailing whitespace.
pub fn indent(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len() + prefix.len() * 8);
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            out.push_str(prefix);
        }
        out.push_str(line);
    }
    out
}
