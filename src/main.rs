use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use terrafactor::cli::{Cli, Command, ResourcesCommand};
use terrafactor::commands;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Resources { command } => match command {
            ResourcesCommand::List(args) => commands::list(&args, &mut stdout)?,
            ResourcesCommand::Refactor(args) => commands::refactor(&args, &mut stdout)?,
        },
        Command::Version => commands::version(&mut stdout)?,
    }

    Ok(())
}
