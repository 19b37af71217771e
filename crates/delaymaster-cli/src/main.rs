//! Delaymaster CLI: the `delaymaster` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            inputs,
            stdin,
            engine,
            strict_exit,
            json,
        } => commands::check::run(commands::check::Args {
            inputs,
            stdin,
            engine,
            strict_exit,
            json,
        }),

        Commands::Explain {
            input,
            engine,
            json,
        } => commands::explain::run(commands::explain::Args {
            input,
            engine,
            json,
        }),
    }
}
