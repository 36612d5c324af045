pub mod completions;
pub mod generate;

use clap::{Parser, Subcommand};

/// gdydoc - Documentation generator for GDY games
#[derive(Parser, Debug)]
#[command(name = "gdydoc")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: generate::GenerateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
