use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use trapwise::config::Config;
use trapwise::content::{Catalog, Verdict};
use trapwise::logging::init_tracing;
use trapwise::session::QuizSession;
use trapwise::ui::app::App;
use trapwise::ui::runtime;

#[derive(Parser)]
#[command(name = "trapwise")]
#[command(version, about = "Trust or Trap: learn to spot manipulative messages", long_about = None)]
struct Cli {
    /// Question catalog (.json or .toml) instead of the built-in questions
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Shuffle seed for a reproducible question order
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Config file (default: ~/.config/trapwise/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Validate the catalog, print a summary and exit
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = init_tracing() {
        tracing::info!(
            path = %path.display(),
            version = env!("CARGO_PKG_VERSION"),
            "Logging started"
        );
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    let catalog = match cli.catalog.as_ref().or(config.quiz.catalog.as_ref()) {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog '{}'", path.display()))?,
        None => Catalog::builtin(),
    };

    if cli.check {
        println!(
            "Catalog OK: {} questions ({} trust, {} trap)",
            catalog.len(),
            catalog.count_by_verdict(Verdict::Trust),
            catalog.count_by_verdict(Verdict::Trap)
        );
        return Ok(());
    }

    let catalog = Arc::new(catalog);
    let session = match cli.seed.or(config.quiz.seed) {
        Some(seed) => QuizSession::with_seed(catalog, seed),
        None => QuizSession::new(catalog),
    };

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    runtime::run(App::new(session), tick_rate).context("Terminal UI failed")?;
    Ok(())
}
