mod cli;
mod commands;
mod config;
mod directory;
mod error;
mod output;
mod responses;
mod session;
mod store;
mod types;
mod views;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, SessionArgs};
use config::Config;
use directory::DirectoryClient;
use error::Result;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("userdesk={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Set global output format
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "userdesk", &mut io::stdout());
        }
        Some(Commands::Init) => {
            commands::init::run().await?;
        }
        // Commands that require config
        Some(Commands::List(args)) => {
            let config = Config::load()?;
            let client = DirectoryClient::from_config(&config)?;
            commands::list::run(&client, args).await?;
        }
        Some(Commands::Session(args)) => {
            let config = Config::load()?;
            commands::shell::run(&config, args).await?;
        }
        None => {
            let config = Config::load()?;
            commands::shell::run(&config, SessionArgs::default()).await?;
        }
    }

    Ok(())
}
