//! Rural CLI - Rural investments dashboard
//!
//! Usage:
//!   rural serve --port 8050            Start web server
//!   rural summary --program All        Print totals for a tab
//!   rural export --output view.json    Export chart figures as JSON

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref(), cli.data.as_deref())?;

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(config, host, port, static_dir).await,
        Commands::Summary { program, dimension } => {
            let dashboard = commands::open_dashboard(&config)?;
            let selection = commands::parse_selection(&program, &dimension)?;
            commands::cmd_summary(&dashboard, &selection)
        }
        Commands::Export {
            program,
            dimension,
            output,
        } => {
            let dashboard = commands::open_dashboard(&config)?;
            let selection = commands::parse_selection(&program, &dimension)?;
            commands::cmd_export(&dashboard, &selection, output.as_deref())
        }
    }
}
