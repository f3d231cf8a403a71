mod cli;
mod commands;
mod config;
#[allow(unused_assignments)]
mod diagnostic;
mod error;
mod logging;
mod output;

use clap::Parser;

use crate::error::CliError;
use crate::output::OutputContext;

fn main() {
    let cli = cli::Cli::parse();
    let output = OutputContext::from_global(&cli.global);

    match run(cli, &output) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}

fn run(cli: cli::Cli, output: &OutputContext) -> Result<(), CliError> {
    let config = config::load_config(cli.global.config.as_deref())?;
    logging::init(&cli.global, &config.logging);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        cli::Commands::Parse(args) => commands::parse::run(args, &config, output),
        cli::Commands::Completions(args) => commands::completions::run(args),
    }
}
