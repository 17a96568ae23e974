//! autocue binary entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use autocue::logging::{self, LogSink};
use autocue::Config;
use cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        commands::completions::handle(shell);
        return Ok(());
    }

    let config = Config::load()?;
    let sink = match cli.command {
        Commands::Play(_) => LogSink::FileOnly,
        _ => LogSink::Stderr,
    };
    logging::init(&config.log, cli.verbose, sink)?;

    match &cli.command {
        Commands::Play(args) => commands::play::handle(args, &config),
        Commands::Inspect(args) => commands::inspect::handle(args, &config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(*force),
        },
        Commands::Completions { .. } => Ok(()),
    }
}
