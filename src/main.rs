//! quantdeck - terminal dashboard for a quant strategy blueprint
//!
//! Binary entry point: parses the command line, loads settings, and runs
//! either the TUI or the headless NDJSON walk.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use quantdeck_app::config::{self, Overrides};
use quantdeck_core::{logging, Section};
use tracing::info;

/// quantdeck - A terminal dashboard for the quant strategy blueprint
#[derive(Parser, Debug)]
#[command(name = "quantdeck")]
#[command(about = "A terminal dashboard for the quant strategy blueprint", long_about = None)]
struct Args {
    /// Project directory containing .quantdeck/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Read the replication report from a file or http(s) URL
    #[arg(long, value_name = "PATH|URL")]
    artifact: Option<String>,

    /// Use the built-in replication report
    #[arg(long, conflicts_with = "artifact")]
    mock: bool,

    /// Section to open first (headless: the only section to load)
    #[arg(long, value_name = "NAME")]
    section: Option<Section>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Resolve fetches immediately instead of simulating latency
    #[arg(long)]
    no_latency: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let log_guard = logging::init()?;

    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut settings = config::load_settings(&project_path);
    Overrides {
        artifact: args.artifact,
        mock: args.mock,
        section: args.section,
        no_latency: args.no_latency,
    }
    .apply(&mut settings);

    let provider = config::build_provider(&settings, &project_path)?;
    info!("Project: {}", project_path.display());

    let outcome = if args.headless {
        let sections = match args.section {
            Some(section) => vec![section],
            None => Section::ALL.to_vec(),
        };
        headless::run_headless(settings, provider, sections).await
    } else {
        quantdeck_tui::run(settings, provider).await
    };

    outcome.wrap_err_with(|| format!("logs in {}", log_guard.directory().display()))
}
