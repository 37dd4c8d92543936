// src/cli.rs
//! CLI definitions for the cookbook
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author = "Cookbook Contributors")]
#[command(version)]
#[command(about = "Flatten recipes into base ingredients and total cook time", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the cookbook HTTP server
    ///
    /// Flags override values from the config file.
    #[cfg(feature = "server")]
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to bind to (host:port)
        #[arg(short, long)]
        bind: Option<String>,

        /// JSON seed file loaded at startup
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },

    /// Print the summary of a recipe from a seed file
    Summary {
        /// JSON seed file with the cookbook entries
        #[arg(short, long)]
        seed: PathBuf,

        /// Recipe name
        name: String,
    },

    /// Normalize a handwritten recipe name
    Parse {
        /// Name to normalize
        input: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
