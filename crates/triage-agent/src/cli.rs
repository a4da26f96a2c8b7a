//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(
    name = "triage",
    about = "Support ticket triage desk: tickets, activity trail, knowledge base"
)]
pub struct Cli {
    /// Subcommand; `serve` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested subcommand, defaulting to `serve` with no overrides.
    pub fn command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve(ServeArgs),
    /// Print the `triage_expert` prompt.
    Prompt,
    /// Print the method catalog as JSON.
    Catalog,
}

/// Overrides for `serve`. Anything set here wins over file and environment.
#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Settings file (default `~/.triage/settings.json`).
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Listen host.
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Start with an empty ticket store.
    #[arg(long, default_value_t = false)]
    pub no_seed: bool,
}
