//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rural investments dashboard
#[derive(Parser)]
#[command(name = "rural")]
#[command(about = "Interactive dashboard for rural investment data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Dataset CSV path (overrides the config file)
    #[arg(long, env = "RURAL_DATA_PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Config file path
    ///
    /// Defaults to ~/.config/rural/dashboard.toml when that file exists.
    #[arg(long, env = "RURAL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "RURAL_PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "RURAL_HOST")]
        host: Option<String>,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print the total and the ranked breakdown for a selection
    Summary {
        /// Program area tab ("All" for every program)
        #[arg(long, default_value = "All")]
        program: String,

        /// Bar chart dimension: "Program Area" or "Investment Type"
        #[arg(short, long, default_value = "Program Area")]
        dimension: String,
    },

    /// Export all dashboard outputs for a selection as JSON
    Export {
        /// Program area tab ("All" for every program)
        #[arg(long, default_value = "All")]
        program: String,

        /// Bar chart dimension: "Program Area" or "Investment Type"
        #[arg(short, long, default_value = "Program Area")]
        dimension: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
