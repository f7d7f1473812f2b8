//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, debug, warn};

use crate::app::api::{self, ScaffoldOptions};

#[derive(Parser)]
#[command(name = "mkcomponent")]
#[command(version)]
#[command(
    about = "Scaffold a React component or page: <Name>.tsx, <Name>.module.css and index.ts",
    long_about = None
)]
struct Cli {
    /// Source root holding components/ and pages/ (default: ./src)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Config file to use instead of ./mkcomponent.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = ctrlc::set_handler(|| {
        std::process::exit(0);
    }) {
        warn!("failed to install interrupt handler: {}", err);
    }

    let options = ScaffoldOptions { root: cli.root, config: cli.config };
    match api::scaffold(options) {
        Ok(outcome) => debug!(?outcome, "scaffold finished"),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
