//! `triage` binary: parse the command line and run the requested subcommand.

#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use triage_agent::bootstrap::{announce_startup, build_state, resolve_settings};
use triage_agent::cli::{Cli, Command, ServeArgs};
use triage_server::rpc::handlers::build_registry;
use triage_server::rpc::handlers::prompts::TRIAGE_EXPERT_PROMPT;

#[tokio::main]
async fn main() -> Result<()> {
    match Cli::parse().command() {
        Command::Serve(args) => serve(&args).await,
        Command::Prompt => {
            println!("{TRIAGE_EXPERT_PROMPT}");
            Ok(())
        }
        Command::Catalog => {
            let catalog = serde_json::to_string_pretty(&build_registry().catalog())
                .context("failed to render catalog")?;
            println!("{catalog}");
            Ok(())
        }
    }
}

async fn serve(args: &ServeArgs) -> Result<()> {
    let settings = resolve_settings(args).context("failed to load settings")?;

    triage_core::logging::init_subscriber(&settings.logging.level, settings.logging.json)
        .context("failed to install tracing subscriber")?;

    let mut state = build_state(&settings);
    match triage_server::metrics::install_recorder() {
        Ok(handle) => state = state.with_metrics(handle),
        Err(e) => warn!(error = %e, "metrics disabled"),
    }
    announce_startup(&state);

    triage_server::server::run(&settings.server, state)
        .await
        .context("server failed")
}
