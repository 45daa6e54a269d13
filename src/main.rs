mod ai;
mod cli;
mod config;
mod error;
mod git;
mod orchestrator;
mod report;

use clap::Parser;
use cli::Cli;
use config::Config;
use error::{GitDailyError, Result};
use orchestrator::Orchestrator;
use std::env;
use std::process;
use tracing::Level;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cwd = env::current_dir()?;

    if !git::repo::is_git_repository(&cwd) {
        return Err(GitDailyError::NotARepository);
    }

    let config = Config::load();
    let orchestrator = Orchestrator::new(config);
    let outcome = orchestrator.run(&cwd, cli.window(), !cli.no_ai).await?;

    // Diagnostics go to stderr so a fallback never corrupts the report
    if let Some(diagnostic) = outcome.diagnostic() {
        eprintln!("AI summarization failed: {}", diagnostic);
        eprintln!("Falling back to the deterministic report.\n");
    }

    println!("{}", outcome.report());
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
