mod config;
mod domain;
mod error;
mod infra;
mod report;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, CommandFactory, Parser};

use crate::config::SearchConfig;
use crate::error::{AppError, AppResult};
use crate::infra::git::GitCli;
use crate::services::InspectorRegistry;

#[derive(Parser)]
#[command(
    name = "repo-scout",
    version,
    disable_version_flag = true,
    about = "Scan a directory tree for version-controlled projects and report their status"
)]
struct Cli {
    /// Directory to scan; a file argument scans its containing directory.
    path: Option<PathBuf>,
    /// Maximum search depth, counting the root itself as depth 1.
    depth: Option<usize>,
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(()) => {}
        Err(AppError::InvalidInvocation(message)) => {
            eprintln!("{message}");
            eprint!("{}", Cli::command().render_help());
            std::process::exit(2);
        }
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = SearchConfig::resolve(cli.path, cli.depth)?;

    let mut registry = InspectorRegistry::new();
    registry.register(Arc::new(GitCli::new()));

    let statuses = workflow::scan_projects(&config, &registry).await?;

    let stdout = std::io::stdout();
    report::render(&mut stdout.lock(), &statuses)?;
    Ok(())
}
