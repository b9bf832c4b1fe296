//! Server command implementation

use std::path::PathBuf;

use anyhow::Result;
use rural_core::DashboardConfig;

use super::open_dashboard;

pub async fn cmd_serve(
    mut config: DashboardConfig,
    host: Option<String>,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
) -> Result<()> {
    // CLI flags (and their RURAL_* env fallbacks) win over the config file
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if static_dir.is_some() {
        config.static_dir = static_dir;
    }

    println!("🚀 Starting rural investments dashboard...");
    println!("   Dataset: {}", config.data_path.display());
    println!("   Listening: http://{}:{}", config.host, config.port);
    if let Some(dir) = &config.static_dir {
        println!("   Static files: {}", dir.display());
    }
    if !config.allowed_origins.is_empty() {
        println!("   🌐 Allowed origins: {}", config.allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    // Load before binding so a bad dataset never serves a request
    let dashboard = open_dashboard(&config)?;

    let server_config = rural_server::ServerConfig {
        allowed_origins: config.allowed_origins.clone(),
    };

    let static_dir_str = config
        .static_dir
        .as_deref()
        .map(|p| {
            p.to_str()
                .ok_or_else(|| anyhow::anyhow!("static_dir path must be valid UTF-8"))
        })
        .transpose()?;
    rural_server::serve(
        dashboard,
        &config.host,
        config.port,
        static_dir_str,
        server_config,
    )
    .await?;

    Ok(())
}
