// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so command output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve { config, bind, seed } => {
            commands::cmd_serve(config.as_deref(), bind.as_deref(), seed.as_deref()).await
        }
        Commands::Summary { seed, name } => commands::cmd_summary(&seed, &name),
        Commands::Parse { input } => commands::cmd_parse(&input),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cookbook", &mut std::io::stdout());
            Ok(())
        }
    }
}
