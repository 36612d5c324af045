use clap::Parser;
use gdydoc::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions(args)) => gdydoc::cli::completions::run(args)?,
        None => gdydoc::cli::generate::run(cli.generate)?,
    }

    Ok(())
}
