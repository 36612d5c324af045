//! Generate command implementation.
//!
//! Resolves the run's directories from `gdydoc.yaml` and the command line,
//! then documents the games tree.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::docgen;
use crate::error::Result;
use crate::output::Printer;

/// Generate documentation for a tree of GDY files
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Config file (defaults to ./gdydoc.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Root directory of the GDY files
    #[arg(long, short)]
    pub games: Option<PathBuf>,

    /// Root directory for the generated documentation
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Directory sprite images are resolved against
    #[arg(long, short)]
    pub images: Option<PathBuf>,

    /// Print every file as it is written
    #[arg(long, short)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Load the config, then apply command line overrides.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::discover(Path::new("."))?,
        };

        if let Some(games) = &self.games {
            config.games = games.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(images) = &self.images {
            config.images = images.clone();
        }

        Ok(config)
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::new().with_verbose(args.verbose);
    let config = args.resolve()?;

    docgen::run(&config, &printer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_from_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docs.yaml");
        fs::write(&path, "games: gdy\noutput: out\n").unwrap();

        let args = GenerateArgs {
            config: Some(path),
            ..Default::default()
        };
        let config = args.resolve().unwrap();

        assert_eq!(config.games, PathBuf::from("gdy"));
        assert_eq!(config.output, PathBuf::from("out"));
        assert_eq!(config.images, PathBuf::from("resources/images"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docs.yaml");
        fs::write(&path, "games: gdy\noutput: out\n").unwrap();

        let args = GenerateArgs {
            config: Some(path),
            output: Some(PathBuf::from("site")),
            ..Default::default()
        };
        let config = args.resolve().unwrap();

        assert_eq!(config.games, PathBuf::from("gdy"));
        assert_eq!(config.output, PathBuf::from("site"));
    }

    #[test]
    fn test_resolve_missing_config_file() {
        let args = GenerateArgs {
            config: Some(PathBuf::from("/nonexistent/gdydoc.yaml")),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
    }
}
